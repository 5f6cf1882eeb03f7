//! # Maze
//!
//! One-call maze generation: occupancy grid, render mesh, start/goal cells and
//! the world positions a host application needs to place its trigger volumes.
//!
//! The host owns everything else. It supplies the configuration and random
//! source, receives an immutable [`Maze`], and wires its own collision and
//! callback machinery to the returned placements.
//!
//! ## Usage
//!
//! ```rust
//! use maze::{Maze, MazeConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let maze = Maze::generate(13, 15, &MazeConfig::default(), &mut rng).unwrap();
//!
//! assert_eq!(maze.grid().rows(), 13);
//! assert!(maze.mesh().validate().is_ok());
//! if let Some(goal) = maze.goal_trigger() {
//!     assert_eq!(goal.position.y, 0.5);
//! }
//! ```

pub mod constructor;
pub mod error;
pub mod trigger;

pub use config::{ConfigError, MazeConfig};
pub use constructor::Maze;
pub use error::MazeError;
pub use maze_grid::{Cell, GridPos, OccupancyGrid};
pub use maze_mesh::{MeshData, Submesh};
pub use trigger::{TriggerKind, TriggerPlacement};
