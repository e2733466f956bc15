//! Scatter plot view.
//!
//! [`PlotView`] is the renderer handed to the animation driver. It keeps an
//! owned copy of the revealed points so the chart can be redrawn at any time
//! (resize, theme change, paused animation) without touching the buffer.

use super::formatters::axis_labels;
use super::ThemeColors;
use crate::animation::Renderer;
use crate::config::PlotConfig;
use crate::data::{AxisBounds, Point};
use crate::error::Result;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Latest snapshot of the revealed points, ready to draw.
#[derive(Debug, Clone, Default)]
pub struct PlotView {
    title: String,
    points: Vec<(f64, f64)>,
    bounds: AxisBounds,
    updates: usize,
}

impl PlotView {
    /// Create an empty view titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Revealed points as `(x, y)` tuples.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Bounds received with the last update.
    pub fn bounds(&self) -> &AxisBounds {
        &self.bounds
    }

    /// Number of updates since creation.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Plot title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Renderer for PlotView {
    fn update(&mut self, points: &[Point], bounds: &AxisBounds) -> Result<()> {
        // Snapshots only grow between resets, so copying the tail is enough.
        if points.len() < self.points.len() {
            self.points.clear();
        }
        let known = self.points.len();
        self.points.extend(points[known..].iter().map(|p| p.as_tuple()));
        self.bounds = *bounds;
        self.updates += 1;
        Ok(())
    }

    fn reset(&mut self, bounds: &AxisBounds) {
        self.points.clear();
        self.bounds = *bounds;
    }
}

/// Draw the scatter chart for `view` into `area`.
pub fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    view: &PlotView,
    total: usize,
    config: &PlotConfig,
    colors: &ThemeColors,
) {
    let (x_range, y_range) = view.bounds.display_ranges();
    let marker = config.marker.marker();

    let (latest, earlier) = match view.points.split_last() {
        Some((last, rest)) => (std::slice::from_ref(last), rest),
        None => (&[][..], &[][..]),
    };

    let datasets = vec![
        Dataset::default()
            .marker(marker)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.point))
            .data(earlier),
        Dataset::default()
            .marker(marker)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(colors.latest)
                    .add_modifier(Modifier::BOLD),
            )
            .data(latest),
    ];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.text))
        .bounds(x_range)
        .labels(axis_labels(x_range[0], x_range[1], config.axis_labels));

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.text))
        .bounds(y_range)
        .labels(axis_labels(y_range[0], y_range[1], config.axis_labels));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(
                    " {} ({}/{}) ",
                    view.title,
                    view.points.len(),
                    total
                ))
                .title_style(Style::default().fg(colors.heading)),
        )
        .style(Style::default().bg(colors.bg))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
