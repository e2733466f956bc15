//! Application state and logic.

use std::time::{Duration, Instant};

use crate::animation::{AnimationDriver, FrameScheduler};
use crate::buffer::RevealBuffer;
use crate::config::{AnimationConfig, PlotConfig};
use crate::data::{AxisBounds, Dataset};
use crate::error::Result;
use crate::ui::PlotView;

/// Longest the event loop waits for input before re-checking the clock.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Animation state machine, rendering into a [`PlotView`].
    pub driver: AnimationDriver<PlotView>,
    /// Frame clock.
    pub scheduler: FrameScheduler,
    /// Plot appearance.
    pub plot_config: PlotConfig,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create an application for `dataset` with the driver already running.
    ///
    /// Axis bounds are computed here, once, from the complete dataset.
    pub fn new(dataset: Dataset, config: AnimationConfig, plot_config: PlotConfig) -> Result<Self> {
        let bounds = AxisBounds::with_headroom(dataset.points(), plot_config.y_headroom);
        let view = PlotView::new(dataset.display_name());
        let buffer = RevealBuffer::with_capacity(config.frame_count);
        let scheduler = FrameScheduler::new(&config);

        let mut driver = AnimationDriver::new(view);
        driver.start(config, dataset, buffer, bounds)?;

        Ok(Self {
            driver,
            scheduler,
            plot_config,
            status: String::new(),
            theme: Theme::default(),
        })
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Start the frame clock.
    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(now);
    }

    /// Advance the animation if a frame is due.
    ///
    /// Returns whether anything changed and the screen needs a redraw.
    pub fn on_tick(&mut self, now: Instant) -> Result<bool> {
        if self.cycle_due(now) {
            self.driver.rewind()?;
            self.scheduler.restart(now);
        }

        let advanced = self.scheduler.dispatch(now, &mut self.driver)?;
        if advanced && self.driver.is_finished() {
            self.status = "Done".to_string();
        } else if advanced {
            self.status.clear();
        }
        Ok(advanced)
    }

    // With repeat on, the finished plot stays up for one interval before the
    // next cycle clears it.
    fn cycle_due(&self, now: Instant) -> bool {
        self.driver.config().repeat
            && self.driver.is_finished()
            && self.scheduler.is_done()
            && !self.scheduler.is_paused()
            && self.last_frame_elapsed(now)
    }

    fn last_frame_elapsed(&self, now: Instant) -> bool {
        self.scheduler
            .next_due()
            .is_some_and(|due| now >= due)
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler
            .time_until_due(now)
            .map_or(MAX_POLL, |d| d.min(MAX_POLL))
    }

    /// Pause or resume frame delivery.
    pub fn toggle_pause(&mut self, now: Instant) {
        let paused = self.scheduler.toggle_pause(now);
        self.status = if paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
        tracing::debug!("Paused: {}", paused);
    }

    /// Play the animation again from frame 0 once it has finished.
    pub fn restart(&mut self, now: Instant) {
        if let Err(e) = self.driver.replay() {
            tracing::debug!("Restart ignored: {}", e);
            self.status = "Restart is available once the animation finishes".to_string();
            return;
        }
        self.scheduler.restart(now);
        self.status = "Restarted".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
