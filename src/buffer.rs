//! Growing buffer of revealed points.

use crate::data::Point;

/// Points revealed so far, in insertion order.
///
/// The buffer only grows while an animation runs; [`RevealBuffer::clear`] is
/// reserved for starting a repeat cycle.
#[derive(Debug, Clone, Default)]
pub struct RevealBuffer {
    points: Vec<Point>,
}

impl RevealBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append `point` as the new last element.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Current contents in insertion order.
    pub fn snapshot(&self) -> &[Point] {
        &self.points
    }

    /// Number of revealed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been revealed yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently revealed point.
    pub fn latest(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}
