//! Errors raised by the simulation engine

use thiserror::Error;

/// Failures of grid construction, cell access and pattern seeding.
///
/// None of these leave a grid partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: String, height: String },

    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
}
