//! Axis bounds computed once from a full dataset.

use super::Point;

/// Headroom added on top of the largest y value.
pub const Y_HEADROOM: f64 = 0.01;

/// Fixed x and y ranges for the whole animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// `(min, max)` of the first column.
    pub x: (f64, f64),
    /// `(min, max * (1 + headroom))` of the second column.
    pub y: (f64, f64),
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        }
    }
}

impl AxisBounds {
    /// Compute bounds with the default 1% y headroom.
    ///
    /// An empty slice yields the unit square.
    pub fn from_points(points: &[Point]) -> Self {
        Self::with_headroom(points, Y_HEADROOM)
    }

    /// Compute bounds, scaling the y maximum by `1 + headroom`.
    ///
    /// The scaling is multiplicative, so a negative y maximum moves towards
    /// zero.
    pub fn with_headroom(points: &[Point], headroom: f64) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        let init = (first.x, first.x, first.y, first.y);
        let (x_min, x_max, y_min, y_max) = points.iter().fold(init, |(x_lo, x_hi, y_lo, y_hi), p| {
            (x_lo.min(p.x), x_hi.max(p.x), y_lo.min(p.y), y_hi.max(p.y))
        });

        Self {
            x: (x_min, x_max),
            y: (y_min, y_max * (1.0 + headroom)),
        }
    }

    /// Ranges safe to hand to a chart: an empty span is widened by 0.5 on
    /// each side, and a reversed y range is swapped.
    pub fn display_ranges(&self) -> ([f64; 2], [f64; 2]) {
        (widen(self.x), widen(self.y))
    }
}

fn widen((lo, hi): (f64, f64)) -> [f64; 2] {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi - lo > f64::EPSILON {
        [lo, hi]
    } else {
        [lo - 0.5, hi + 0.5]
    }
}
