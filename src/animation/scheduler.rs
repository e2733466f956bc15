//! Fixed-interval frame clock.

use super::FrameHandler;
use crate::config::AnimationConfig;
use crate::error::Result;
use std::time::{Duration, Instant};

/// Hands out frame indices `0..frame_count` at a fixed interval.
///
/// The clock never catches up: after a late frame the next one is due a full
/// interval later, so delays shift timing but never skip or reorder frames.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    frame_count: usize,
    next_frame: usize,
    next_due: Option<Instant>,
    paused: bool,
}

impl FrameScheduler {
    /// Create a stopped scheduler for `config`.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            interval: config.interval,
            frame_count: config.frame_count,
            next_frame: 0,
            next_due: None,
            paused: false,
        }
    }

    /// Begin delivering frames; the first one is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next_frame = 0;
        self.next_due = Some(now);
        self.paused = false;
    }

    /// Start again from frame 0.
    pub fn restart(&mut self, now: Instant) {
        self.start(now);
    }

    /// Next frame index, if one is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if self.paused || self.is_done() {
            return None;
        }
        let due = self.next_due?;
        if now < due {
            return None;
        }

        let frame = self.next_frame;
        self.next_frame += 1;
        self.next_due = Some(now + self.interval);
        Some(frame)
    }

    /// Deliver the due frame, if any, to `handler`.
    ///
    /// Returns whether a frame was delivered.
    pub fn dispatch<H: FrameHandler + ?Sized>(
        &mut self,
        now: Instant,
        handler: &mut H,
    ) -> Result<bool> {
        match self.poll(now) {
            Some(frame) => {
                handler.on_frame(frame)?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// How long until the next frame is due, `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if self.paused || self.is_done() {
            return None;
        }
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Stop delivering frames until [`FrameScheduler::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause; the next frame is due immediately.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            if self.next_due.is_some() {
                self.next_due = Some(now);
            }
        }
    }

    /// Toggle pause, returning the new paused flag.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        if self.paused {
            self.resume(now);
        } else {
            self.pause();
        }
        self.paused
    }

    /// Whether delivery is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether every frame has been handed out.
    pub fn is_done(&self) -> bool {
        self.next_frame >= self.frame_count
    }

    /// Frames handed out so far in this run.
    pub fn delivered(&self) -> usize {
        self.next_frame
    }

    /// When the next frame (or, once done, the end of the last frame's
    /// interval) falls due.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
