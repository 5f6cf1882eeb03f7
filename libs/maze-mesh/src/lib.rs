//! # Maze Mesh
//!
//! Converts an occupancy grid into renderable mesh data.
//!
//! ## Architecture
//!
//! ```text
//! maze-grid (OccupancyGrid) → maze-mesh (MeshData) → renderer / physics
//! ```
//!
//! Every open cell gets a floor quad and a ceiling quad; every side of an open
//! cell that faces a wall (or the edge of the grid) gets a wall quad. Floor and
//! ceiling quads go to one triangle list, walls to another, so a renderer can
//! assign two materials.
//!
//! Normals are not computed here. Consumers derive them from the triangle
//! winding, which is fixed per quad.
//!
//! ## Usage
//!
//! ```rust
//! use maze_grid::OccupancyGrid;
//! use maze_mesh::{build, find_first_open, Submesh};
//!
//! let grid = OccupancyGrid::default();
//! let mesh = build(&grid, 3.75, 3.5).unwrap();
//! assert_eq!(mesh.quad_count(Submesh::FloorAndCeiling), 2);
//! assert_eq!(mesh.quad_count(Submesh::Walls), 4);
//! assert!(find_first_open(&grid).is_some());
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod placement;
pub mod quad;

pub use builder::{build, build_from_rows};
pub use error::MeshError;
pub use mesh::{MeshData, Submesh};
pub use placement::{cell_center, find_first_open, find_last_open};
pub use quad::{look_rotation, QuadTransform};
