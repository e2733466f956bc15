//! Frame-by-frame reveal animation.
//!
//! [`AnimationDriver`] owns the dataset and the [`RevealBuffer`] and turns
//! each delivered frame index into one append plus one renderer update.
//! [`FrameScheduler`] decides when frames are due; the event loop in the
//! binary feeds its output to the driver.
//!
//! [`RevealBuffer`]: crate::buffer::RevealBuffer

mod driver;
mod scheduler;

pub use driver::{AnimationDriver, DriverState};
pub use scheduler::FrameScheduler;

use crate::data::{AxisBounds, Point};
use crate::error::Result;

/// Something that draws the revealed points.
///
/// `points` is only borrowed for the duration of the call; implementations
/// copy whatever they need to keep.
pub trait Renderer {
    /// Redraw with the current snapshot.
    fn update(&mut self, points: &[Point], bounds: &AxisBounds) -> Result<()>;

    /// Called when a run starts or restarts with an empty buffer.
    fn reset(&mut self, _bounds: &AxisBounds) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn update(&mut self, points: &[Point], bounds: &AxisBounds) -> Result<()> {
        (**self).update(points, bounds)
    }

    fn reset(&mut self, bounds: &AxisBounds) {
        (**self).reset(bounds)
    }
}

/// Capability to render one frame given its index.
pub trait FrameHandler {
    /// Total frames in one run.
    fn frame_count(&self) -> usize;

    /// Handle frame `frame`. Frames arrive as `0..frame_count`, in order.
    fn on_frame(&mut self, frame: usize) -> Result<()>;
}
