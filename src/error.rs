//! Error types shared by every module of the crate.

use std::io;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors reported by model construction, cost evaluation and dataset loading.
///
/// Numerical degeneracy (log of zero, an empty training set) is not an error:
/// it shows up as non-finite floats in the returned values.
#[derive(Debug, thiserror::Error)]
pub enum RegressionError {
    #[error("row/label count mismatch: X has {rows} rows but Y has {labels} labels")]
    RowLabelMismatch { rows: usize, labels: usize },

    #[error(
        "parameter/feature width mismatch: theta has {parameters} parameters \
         but X has {features} features"
    )]
    WidthMismatch { parameters: usize, features: usize },

    #[error("ragged rows: row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
