//! Dataset information.

use super::{AxisBounds, Point};
use std::ops::Index;
use std::path::PathBuf;

/// An ordered sequence of points, in file row order.
///
/// Row order is the reveal order of the animation, so the dataset is never
/// sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Path to the source file, if the data came from disk.
    pub file_path: Option<PathBuf>,
    points: Vec<Point>,
}

impl Dataset {
    /// Create a dataset from points already in reveal order.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            file_path: None,
            points,
        }
    }

    /// Attach the source path.
    pub fn with_file_path(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// All points in reveal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Axis bounds over the whole dataset.
    pub fn bounds(&self) -> AxisBounds {
        AxisBounds::from_points(&self.points)
    }

    /// Display name of the source, for titles.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "data".to_string())
    }
}

impl Index<usize> for Dataset {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl From<Vec<Point>> for Dataset {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
