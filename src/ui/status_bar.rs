//! Status bar UI component.

use super::formatters::{format_coord, format_number};
use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let driver = &app.driver;
    let revealed = driver.buffer().len();
    let total = driver.config().frame_count;

    let mut spans = vec![Span::raw(format!(
        " Frame {}/{} | {}",
        format_number(revealed),
        format_number(total),
        driver.state().name()
    ))];

    if app.scheduler.is_paused() {
        spans.push(Span::styled(" (paused)", Style::default().fg(colors.warning)));
    }

    if let Some(p) = driver.buffer().latest() {
        spans.push(Span::raw(format!(
            " | ({}, {})",
            format_coord(p.x),
            format_coord(p.y)
        )));
    }

    if !app.status.is_empty() {
        spans.push(Span::raw(format!(" | {}", app.status)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
