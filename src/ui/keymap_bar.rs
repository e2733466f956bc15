//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    paused: bool,
    finished: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if finished {
        " r:restart | T:theme | q/Esc:quit"
    } else if paused {
        " space:resume | T:theme | q/Esc:quit"
    } else {
        " space:pause | T:theme | q/Esc:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.keymap_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
