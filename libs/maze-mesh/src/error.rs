//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use maze_grid::GridError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The input grid is empty or malformed
    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    /// The mesh would need more vertices than a `u32` index can address
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
