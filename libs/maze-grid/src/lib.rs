//! # Maze Grid
//!
//! Produces the 2D occupancy grid a maze is built from. Each cell is either a
//! wall or open floor; the outer border is always wall.
//!
//! ## Architecture
//!
//! ```text
//! (rows, cols, threshold, rng) → maze-grid (OccupancyGrid) → maze-mesh (MeshData)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use maze_grid::generate;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let grid = generate(13, 15, 0.1, &mut rng).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (13, 15));
//! assert!(grid.is_wall(0, 0));
//! ```

pub mod dump;
pub mod error;
pub mod generator;
pub mod grid;

pub use error::GridError;
pub use generator::generate;
pub use grid::{Cell, GridPos, OccupancyGrid};
