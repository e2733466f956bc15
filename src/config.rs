//! Configuration for the animation and the plot view.

use crate::data::Y_HEADROOM;
use ratatui::symbols::Marker;
use std::time::Duration;

/// Default delay between frames.
pub const DEFAULT_INTERVAL_MS: u64 = 10;

/// Timing and length of one animation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Number of frames to play. One point is revealed per frame.
    pub frame_count: usize,
    /// Nominal delay between frames.
    pub interval: Duration,
    /// Start over from an empty plot after the last frame.
    pub repeat: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 0,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            repeat: false,
        }
    }
}

impl AnimationConfig {
    /// Config that plays every point of a dataset of `len` points once.
    pub fn for_len(len: usize) -> Self {
        Self {
            frame_count: len,
            ..Self::default()
        }
    }

    /// Set the frame interval in milliseconds.
    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.interval = Duration::from_millis(ms);
        self
    }

    /// Enable or disable repeating.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Marker used for scatter points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MarkerStyle {
    /// Braille dots, highest resolution.
    #[default]
    Braille,
    /// One dot per cell.
    Dot,
    /// Full block per cell.
    Block,
    /// Vertical bar per cell.
    Bar,
}

impl MarkerStyle {
    /// The ratatui marker for this style.
    pub fn marker(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::Dot => Marker::Dot,
            Self::Block => Marker::Block,
            Self::Bar => Marker::Bar,
        }
    }
}

/// Configuration for the scatter plot view.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Fraction added on top of the y maximum.
    pub y_headroom: f64,
    /// Scatter marker.
    pub marker: MarkerStyle,
    /// Number of labels on each axis.
    pub axis_labels: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            y_headroom: Y_HEADROOM,
            marker: MarkerStyle::default(),
            axis_labels: 3,
        }
    }
}
