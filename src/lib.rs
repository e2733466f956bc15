//! plotreveal - Animated terminal scatter plots.
//!
//! plotreveal reads a comma-separated file of `x,y` rows and draws a scatter
//! plot that reveals one row per frame, in file order, inside the terminal.
//!
//! # Features
//!
//! - Two-column numeric loader with per-line parse errors
//! - Axis bounds fixed up front from the complete dataset
//! - Explicit `Idle -> Running -> Finished` animation state machine
//! - Fixed-interval frame clock with pause and optional repeat
//! - Adaptive function sampler for generating datasets
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use plotreveal::animation::AnimationDriver;
//! use plotreveal::buffer::RevealBuffer;
//! use plotreveal::config::AnimationConfig;
//! use plotreveal::data::DataReader;
//! use plotreveal::ui::PlotView;
//! use std::path::Path;
//!
//! let dataset = DataReader::load(Path::new("t.txt"))?;
//! let bounds = dataset.bounds();
//! let config = AnimationConfig::for_len(dataset.len());
//!
//! let mut driver = AnimationDriver::new(PlotView::new("t.txt"));
//! driver.start(config, dataset, RevealBuffer::new(), bounds)?;
//! driver.tick(0)?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod animation;
pub mod app;
pub mod buffer;
pub mod config;
pub mod data;
pub mod error;
pub mod sampler;
pub mod ui;

pub use error::{PlotError, Result};
