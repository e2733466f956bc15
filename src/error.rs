//! Error types for plotreveal.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotreveal operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in plotreveal.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open or read the data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A data row could not be parsed into two finite numbers.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// The frame scheduler delivered a tick the driver cannot accept.
    ///
    /// This is a bug in the driving loop, never a data problem.
    #[error("Scheduler delivered tick {tick}, expected {expected} (frame count {frame_count})")]
    SchedulerContract {
        /// Tick that was delivered.
        tick: usize,
        /// Tick the driver was waiting for, if any.
        expected: String,
        /// Total number of frames in the animation.
        frame_count: usize,
    },

    /// An operation was called in a state that does not allow it.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a SchedulerContract error.
    pub fn scheduler_contract(tick: usize, expected: Option<usize>, frame_count: usize) -> Self {
        Self::SchedulerContract {
            tick,
            expected: expected.map_or_else(|| "no further ticks".to_string(), |e| e.to_string()),
            frame_count,
        }
    }

    /// Create an InvalidState error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Whether this error happened while loading the dataset.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::FileOpen { .. } | Self::Parse { .. })
    }
}
