//! A single 2-D sample.

/// A point read from one row of the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Value of the first column.
    pub x: f64,
    /// Value of the second column.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point as an `(x, y)` tuple, the shape ratatui charts expect.
    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
