//! User interface rendering.

mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{axis_labels, format_axis_label, format_number};
pub use plot::{draw_plot, PlotView};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    plot::draw_plot(
        f,
        chunks[0],
        app.driver.renderer(),
        app.driver.config().frame_count,
        &app.plot_config,
        &colors,
    );
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(
        f,
        chunks[2],
        app.scheduler.is_paused(),
        app.driver.is_finished(),
        &colors,
    );
}
