//! # Grid Errors
//!
//! Error types for grid generation and construction.

use thiserror::Error;

/// Errors that can occur while generating or assembling an occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A requested dimension is zero.
    #[error("Invalid dimensions: {rows}x{cols} (both must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Raw grid data does not describe a non-empty rectangle.
    #[error("Invalid grid: {message}")]
    InvalidGrid { message: String },

    /// Raw grid data contains a value other than 0 or 1.
    #[error("Invalid cell value {value} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

impl GridError {
    /// Creates an invalid grid error.
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGrid {
            message: message.into(),
        }
    }
}
