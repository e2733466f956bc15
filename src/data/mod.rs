//! Data reading and representation.
//!
//! This module handles reading comma-delimited numeric files and
//! representing them as an ordered dataset of 2-D points.

mod bounds;
mod dataset;
mod point;
mod reader;

pub use bounds::{AxisBounds, Y_HEADROOM};
pub use dataset::Dataset;
pub use point::Point;
pub use reader::DataReader;
