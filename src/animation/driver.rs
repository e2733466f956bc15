//! Animation state machine.

use super::{FrameHandler, Renderer};
use crate::buffer::RevealBuffer;
use crate::config::AnimationConfig;
use crate::data::{AxisBounds, Dataset};
use crate::error::{PlotError, Result};

/// Lifecycle of an animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Waiting for `start`.
    Idle,
    /// Accepting frames.
    Running,
    /// All frames handled.
    Finished,
}

impl DriverState {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            DriverState::Idle => "Idle",
            DriverState::Running => "Running",
            DriverState::Finished => "Finished",
        }
    }
}

/// Reveals one dataset point per frame and pushes each snapshot to a
/// renderer.
#[derive(Debug)]
pub struct AnimationDriver<R> {
    renderer: R,
    state: DriverState,
    config: AnimationConfig,
    dataset: Dataset,
    buffer: RevealBuffer,
    bounds: AxisBounds,
    next_tick: usize,
    cycles: usize,
}

impl<R: Renderer> AnimationDriver<R> {
    /// Create an idle driver around `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            state: DriverState::Idle,
            config: AnimationConfig::default(),
            dataset: Dataset::default(),
            buffer: RevealBuffer::new(),
            bounds: AxisBounds::default(),
            next_tick: 0,
            cycles: 0,
        }
    }

    /// Move from `Idle` to `Running`.
    ///
    /// `bounds` must already be computed from the complete dataset; the
    /// driver never recomputes them. A zero frame count finishes at once.
    pub fn start(
        &mut self,
        config: AnimationConfig,
        dataset: Dataset,
        buffer: RevealBuffer,
        bounds: AxisBounds,
    ) -> Result<()> {
        if self.state != DriverState::Idle {
            return Err(PlotError::invalid_state(format!(
                "cannot start a driver that is {}",
                self.state.name()
            )));
        }
        if config.frame_count > dataset.len() {
            return Err(PlotError::invalid_state(format!(
                "frame count {} exceeds dataset length {}",
                config.frame_count,
                dataset.len()
            )));
        }
        if !buffer.is_empty() {
            return Err(PlotError::invalid_state(
                "reveal buffer must be empty at start",
            ));
        }

        tracing::info!(
            "Starting animation: {} frames every {:?}, repeat={}",
            config.frame_count,
            config.interval,
            config.repeat
        );

        self.config = config;
        self.dataset = dataset;
        self.buffer = buffer;
        self.bounds = bounds;
        self.next_tick = 0;
        self.renderer.reset(&self.bounds);
        self.state = if self.config.frame_count == 0 {
            DriverState::Finished
        } else {
            DriverState::Running
        };
        Ok(())
    }

    /// Handle one tick: append `dataset[tick]` and redraw.
    ///
    /// Any tick other than the next expected one is a scheduler bug and
    /// returns [`PlotError::SchedulerContract`] without touching the buffer.
    pub fn tick(&mut self, tick: usize) -> Result<()> {
        let frame_count = self.config.frame_count;

        if self.state != DriverState::Running {
            tracing::error!("Tick {} delivered while {}", tick, self.state.name());
            return Err(PlotError::scheduler_contract(tick, None, frame_count));
        }
        if tick != self.next_tick {
            tracing::error!("Tick {} delivered, expected {}", tick, self.next_tick);
            return Err(PlotError::scheduler_contract(
                tick,
                Some(self.next_tick),
                frame_count,
            ));
        }

        let point = self
            .dataset
            .get(tick)
            .ok_or_else(|| PlotError::scheduler_contract(tick, None, frame_count))?;

        // The tick counts as consumed once its point is in the buffer, even
        // if the renderer then fails.
        self.buffer.append(point);
        self.next_tick += 1;
        if self.next_tick == frame_count {
            self.state = DriverState::Finished;
            self.cycles += 1;
            tracing::info!("Animation finished after {} frames", frame_count);
        }

        self.renderer.update(self.buffer.snapshot(), &self.bounds)?;
        tracing::debug!("Frame {}: ({}, {})", tick, point.x, point.y);
        Ok(())
    }

    /// Start another cycle from an empty buffer.
    ///
    /// Only allowed from `Finished` when repeating is enabled.
    pub fn rewind(&mut self) -> Result<()> {
        if self.state != DriverState::Finished {
            return Err(PlotError::invalid_state(format!(
                "cannot rewind a driver that is {}",
                self.state.name()
            )));
        }
        if !self.config.repeat {
            return Err(PlotError::invalid_state(
                "rewind requires repeat to be enabled",
            ));
        }
        self.restart_cycle();
        Ok(())
    }

    /// Play a finished animation again from an empty buffer, whatever the
    /// repeat setting.
    pub fn replay(&mut self) -> Result<()> {
        if self.state != DriverState::Finished {
            return Err(PlotError::invalid_state(format!(
                "cannot replay a driver that is {}",
                self.state.name()
            )));
        }
        self.restart_cycle();
        Ok(())
    }

    fn restart_cycle(&mut self) {
        if self.config.frame_count == 0 {
            return;
        }

        self.buffer.clear();
        self.next_tick = 0;
        self.renderer.reset(&self.bounds);
        self.state = DriverState::Running;
        tracing::info!("Restarting animation (cycle {})", self.cycles + 1);
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether all frames of the current run are done.
    pub fn is_finished(&self) -> bool {
        self.state == DriverState::Finished
    }

    /// Points revealed so far.
    pub fn buffer(&self) -> &RevealBuffer {
        &self.buffer
    }

    /// Bounds fixed at start.
    pub fn bounds(&self) -> &AxisBounds {
        &self.bounds
    }

    /// The dataset being revealed.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Completed runs.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer, for view-only state like themes.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<R: Renderer> FrameHandler for AnimationDriver<R> {
    fn frame_count(&self) -> usize {
        self.config.frame_count
    }

    fn on_frame(&mut self, frame: usize) -> Result<()> {
        self.tick(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataReader, Point};

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<Vec<Point>>,
        resets: usize,
    }

    impl Renderer for Recorder {
        fn update(&mut self, points: &[Point], _bounds: &AxisBounds) -> Result<()> {
            self.frames.push(points.to_vec());
            Ok(())
        }

        fn reset(&mut self, _bounds: &AxisBounds) {
            self.resets += 1;
        }
    }

    fn started(text: &str, repeat: bool) -> AnimationDriver<Recorder> {
        let dataset = DataReader::parse(text).unwrap();
        let bounds = dataset.bounds();
        let config = AnimationConfig::for_len(dataset.len()).with_repeat(repeat);
        let mut driver = AnimationDriver::new(Recorder::default());
        driver
            .start(config, dataset, RevealBuffer::new(), bounds)
            .unwrap();
        driver
    }

    #[test]
    fn test_new_driver_is_idle() {
        let driver = AnimationDriver::new(Recorder::default());
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_tick_while_idle_is_contract_violation() {
        let mut driver = AnimationDriver::new(Recorder::default());
        let err = driver.tick(0).unwrap_err();
        assert!(matches!(err, PlotError::SchedulerContract { tick: 0, .. }));
    }

    #[test]
    fn test_scenario_reveal() {
        let mut driver = started("0,0\n1,2\n2,1\n", false);
        assert_eq!(driver.state(), DriverState::Running);

        driver.tick(0).unwrap();
        assert_eq!(driver.buffer().snapshot(), &[Point::new(0.0, 0.0)]);

        driver.tick(1).unwrap();
        driver.tick(2).unwrap();
        assert_eq!(
            driver.buffer().snapshot(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 2.0),
                Point::new(2.0, 1.0)
            ]
        );
        assert_eq!(driver.state(), DriverState::Finished);
        assert_eq!(driver.renderer().frames.len(), 3);
        assert_eq!(driver.renderer().frames[1].len(), 2);
    }

    #[test]
    fn test_snapshot_len_tracks_ticks() {
        let mut driver = started("1,1\n2,2\n3,3\n4,4\n", false);
        for k in 0..4 {
            driver.tick(k).unwrap();
            assert_eq!(driver.buffer().len(), k + 1);
            assert_eq!(
                driver.buffer().snapshot(),
                &driver.dataset().points()[..=k]
            );
        }
    }

    #[test]
    fn test_tick_after_finish_rejected() {
        let mut driver = started("0,0\n1,1\n", false);
        driver.tick(0).unwrap();
        driver.tick(1).unwrap();

        let err = driver.tick(2).unwrap_err();
        assert!(matches!(err, PlotError::SchedulerContract { tick: 2, .. }));
        assert_eq!(driver.buffer().len(), 2);
        assert_eq!(driver.renderer().frames.len(), 2);
    }

    #[test]
    fn test_out_of_order_tick_rejected() {
        let mut driver = started("0,0\n1,1\n2,2\n", false);
        driver.tick(0).unwrap();
        assert!(driver.tick(2).is_err());
        assert!(driver.tick(0).is_err());
        assert_eq!(driver.buffer().len(), 1);
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn test_bounds_fixed_at_start() {
        let mut driver = started("0,0\n1,2\n2,1\n", false);
        let before = *driver.bounds();
        driver.tick(0).unwrap();
        assert_eq!(*driver.bounds(), before);
        assert_eq!(before.x, (0.0, 2.0));
    }

    #[test]
    fn test_empty_dataset_finishes_immediately() {
        let driver = started("", false);
        assert_eq!(driver.state(), DriverState::Finished);
        assert_eq!(driver.renderer().resets, 1);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut driver = started("0,0\n", false);
        let err = driver
            .start(
                AnimationConfig::default(),
                Dataset::default(),
                RevealBuffer::new(),
                AxisBounds::default(),
            )
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidState(_)));
    }

    #[test]
    fn test_frame_count_beyond_dataset_rejected() {
        let mut driver = AnimationDriver::new(Recorder::default());
        let err = driver
            .start(
                AnimationConfig::for_len(2),
                Dataset::new(vec![Point::new(0.0, 0.0)]),
                RevealBuffer::new(),
                AxisBounds::default(),
            )
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidState(_)));
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_partial_frame_count() {
        let dataset = DataReader::parse("0,0\n1,1\n2,2\n").unwrap();
        let bounds = dataset.bounds();
        let mut driver = AnimationDriver::new(Recorder::default());
        driver
            .start(AnimationConfig::for_len(2), dataset, RevealBuffer::new(), bounds)
            .unwrap();
        driver.tick(0).unwrap();
        driver.tick(1).unwrap();
        assert!(driver.is_finished());
    }

    #[test]
    fn test_rewind_requires_repeat() {
        let mut driver = started("0,0\n", false);
        driver.tick(0).unwrap();
        assert!(driver.rewind().is_err());
        assert_eq!(driver.state(), DriverState::Finished);
    }

    #[test]
    fn test_rewind_restarts_from_empty() {
        let mut driver = started("0,0\n1,1\n", true);
        driver.tick(0).unwrap();
        assert!(driver.rewind().is_err());

        driver.tick(1).unwrap();
        driver.rewind().unwrap();
        assert_eq!(driver.state(), DriverState::Running);
        assert!(driver.buffer().is_empty());
        assert_eq!(driver.cycles(), 1);
        assert_eq!(driver.renderer().resets, 2);

        driver.tick(0).unwrap();
        assert_eq!(driver.buffer().snapshot(), &[Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_replay_without_repeat() {
        let mut driver = started("0,0\n1,1\n", false);
        driver.tick(0).unwrap();
        assert!(matches!(driver.replay(), Err(PlotError::InvalidState(_))));
        assert_eq!(driver.buffer().len(), 1);

        driver.tick(1).unwrap();
        driver.replay().unwrap();
        assert_eq!(driver.state(), DriverState::Running);
        assert!(driver.buffer().is_empty());
        assert_eq!(driver.renderer().frames.len(), 2);

        driver.tick(0).unwrap();
        driver.tick(1).unwrap();
        assert!(driver.is_finished());
        assert_eq!(driver.cycles(), 2);
    }

    #[derive(Debug, Default)]
    struct FailOnce {
        failed: bool,
        frames: usize,
    }

    impl Renderer for FailOnce {
        fn update(&mut self, _points: &[Point], _bounds: &AxisBounds) -> Result<()> {
            if !self.failed {
                self.failed = true;
                return Err(PlotError::invalid_state("render target gone"));
            }
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_renderer_failure_consumes_tick() {
        let dataset = DataReader::parse("0,0\n1,1\n").unwrap();
        let bounds = dataset.bounds();
        let mut driver = AnimationDriver::new(FailOnce::default());
        driver
            .start(AnimationConfig::for_len(2), dataset, RevealBuffer::new(), bounds)
            .unwrap();

        assert!(matches!(driver.tick(0), Err(PlotError::InvalidState(_))));
        assert_eq!(driver.buffer().len(), 1);

        // Redelivering the failed tick must not append the point twice.
        assert!(matches!(
            driver.tick(0),
            Err(PlotError::SchedulerContract { .. })
        ));
        assert_eq!(driver.buffer().len(), 1);

        driver.tick(1).unwrap();
        assert_eq!(
            driver.buffer().snapshot(),
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]
        );
        assert!(driver.is_finished());
        assert_eq!(driver.renderer().frames, 1);
    }

    #[test]
    fn test_renderer_failure_on_last_tick_finishes() {
        let dataset = DataReader::parse("0,0\n").unwrap();
        let bounds = dataset.bounds();
        let mut driver = AnimationDriver::new(FailOnce::default());
        driver
            .start(AnimationConfig::for_len(1), dataset, RevealBuffer::new(), bounds)
            .unwrap();

        assert!(driver.tick(0).is_err());
        assert!(driver.is_finished());
        assert!(driver.tick(0).is_err());
        assert_eq!(driver.buffer().len(), 1);
    }

    #[test]
    fn test_driver_as_frame_handler() {
        let mut driver = started("5,5\n6,6\n", false);
        let handler: &mut dyn FrameHandler = &mut driver;
        assert_eq!(handler.frame_count(), 2);
        handler.on_frame(0).unwrap();
        assert_eq!(driver.buffer().len(), 1);
    }
}
