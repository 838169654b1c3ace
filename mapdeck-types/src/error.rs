//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum MapDeckTypesError {
    /// Columns of a data frame have different lengths.
    #[error("column \"{column}\" has {actual} values, expected {expected}")]
    Shape {
        /// Name of the offending column.
        column: String,
        /// Length of the first column of the frame.
        expected: usize,
        /// Length of the offending column.
        actual: usize,
    },
    /// Tabular data is not valid JSON or has unexpected structure.
    #[error("invalid tabular data: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV input cannot be read.
    #[cfg(feature = "csv")]
    #[error("invalid csv data: {0}")]
    Csv(#[from] csv::Error),
}
