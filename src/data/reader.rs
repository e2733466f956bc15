//! Delimited text reader.

use super::{Dataset, Point};
use crate::error::{PlotError, Result};
use std::path::Path;

/// Field separator for data rows.
pub const DELIMITER: char = ',';

/// Lines starting with this character (after whitespace) are skipped.
pub const COMMENT: char = '#';

/// Reader for comma-delimited numeric files.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a data file into a dataset, preserving row order.
    ///
    /// Fails on the first row that does not hold two finite numbers.
    pub fn load(path: &Path) -> Result<Dataset> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;

        let dataset = Self::parse(&text)?.with_file_path(path.to_path_buf());
        tracing::info!(
            "Loaded {} points from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse in-memory text.
    pub fn parse(text: &str) -> Result<Dataset> {
        let mut points = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }
            points.push(Self::parse_row(trimmed, idx + 1)?);
        }

        Ok(Dataset::new(points))
    }

    fn parse_row(row: &str, line: usize) -> Result<Point> {
        let mut fields = row.split(DELIMITER);

        // Columns past the second are ignored.
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(PlotError::parse(
                line,
                format!("expected at least 2 fields, found 1 in '{}'", row),
            ));
        };

        Ok(Point::new(
            Self::parse_field(x, line, 1)?,
            Self::parse_field(y, line, 2)?,
        ))
    }

    fn parse_field(field: &str, line: usize, column: usize) -> Result<f64> {
        let field = field.trim();
        let value: f64 = field.parse().map_err(|_| {
            PlotError::parse(line, format!("column {} is not a number: '{}'", column, field))
        })?;

        if !value.is_finite() {
            return Err(PlotError::parse(
                line,
                format!("column {} is not finite: '{}'", column, field),
            ));
        }
        Ok(value)
    }
}
