//! # Maze Errors
//!
//! Single error type for a full generation request. Each variant wraps the
//! error of the stage that failed; no partial result is ever returned.

use config::ConfigError;
use maze_grid::GridError;
use maze_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating a maze.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// The configuration failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Grid generation failed
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Mesh generation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}
