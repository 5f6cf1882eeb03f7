//! # Maze Mesh Builder
//!
//! Walks an occupancy grid in row-major order and emits, for every open cell:
//! a floor quad, a ceiling quad, and one wall quad per side that borders a
//! wall or the edge of the grid.
//!
//! World layout: column `j` maps to `x = j * width`, row `i` to
//! `z = i * width`, and `y` is up. Each cell is `width × width` and hallways
//! are `height` tall.

use glam::Vec3;
use log::debug;
use maze_grid::{GridPos, OccupancyGrid};

use crate::error::MeshError;
use crate::mesh::{MeshData, Submesh, VERTICES_PER_QUAD};
use crate::quad::QuadTransform;

/// Quads emitted per open cell before walls: floor and ceiling.
const SURFACE_QUADS_PER_CELL: usize = 2;

/// Side of a cell that may receive a wall, named by the world axis it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WallSide {
    /// Towards the previous row.
    NegZ,
    /// Towards the next column.
    PosX,
    /// Towards the previous column.
    NegX,
    /// Towards the next row.
    PosZ,
}

impl WallSide {
    /// Emission order.
    const ALL: [WallSide; 4] = [WallSide::NegZ, WallSide::PosX, WallSide::NegX, WallSide::PosZ];

    /// Neighbor across this side, or `None` when it would be before row/col 0.
    fn neighbor(self, pos: GridPos) -> Option<GridPos> {
        match self {
            WallSide::NegZ => pos.row.checked_sub(1).map(|row| GridPos::new(row, pos.col)),
            WallSide::PosX => Some(GridPos::new(pos.row, pos.col + 1)),
            WallSide::NegX => pos.col.checked_sub(1).map(|col| GridPos::new(pos.row, col)),
            WallSide::PosZ => Some(GridPos::new(pos.row + 1, pos.col)),
        }
    }

    /// `(dx, dz)` from the cell center to the wall, in cells.
    fn offset(self) -> (f32, f32) {
        match self {
            WallSide::NegZ => (0.0, -0.5),
            WallSide::PosX => (0.5, 0.0),
            WallSide::NegX => (-0.5, 0.0),
            WallSide::PosZ => (0.0, 0.5),
        }
    }

    /// Direction the wall faces: back into the cell it encloses.
    fn facing(self) -> Vec3 {
        match self {
            WallSide::NegZ => Vec3::Z,
            WallSide::PosX => Vec3::NEG_X,
            WallSide::NegX => Vec3::X,
            WallSide::PosZ => Vec3::NEG_Z,
        }
    }
}

/// Builds the maze mesh for `grid`.
///
/// # Arguments
///
/// * `grid` - Occupancy grid; wall cells emit nothing
/// * `width` - Hallway width (cell size on X and Z)
/// * `height` - Hallway height
///
/// # Errors
///
/// [`MeshError::TooManyVertices`] when the mesh could not be indexed with
/// `u32`.
///
/// # Example
///
/// ```rust
/// use maze_grid::OccupancyGrid;
/// use maze_mesh::{build, Submesh};
///
/// let grid = OccupancyGrid::from_rows(vec![
///     vec![1, 1, 1, 1],
///     vec![1, 0, 0, 1],
///     vec![1, 1, 1, 1],
/// ]).unwrap();
/// let mesh = build(&grid, 2.0, 3.0).unwrap();
/// assert_eq!(mesh.quad_count(Submesh::FloorAndCeiling), 4);
/// assert_eq!(mesh.quad_count(Submesh::Walls), 6);
/// ```
pub fn build(grid: &OccupancyGrid, width: f32, height: f32) -> Result<MeshData, MeshError> {
    let open = grid.open_count();
    let max_vertices = open * (SURFACE_QUADS_PER_CELL + WallSide::ALL.len()) * VERTICES_PER_QUAD;
    let limit = u32::MAX as usize;
    if max_vertices > limit {
        return Err(MeshError::TooManyVertices {
            count: max_vertices,
            max: limit,
        });
    }

    let mut mesh = MeshData::with_capacity(open * SURFACE_QUADS_PER_CELL, open * 2);
    let half_height = height * 0.5;
    let floor_scale = Vec3::new(width, width, 1.0);
    let wall_scale = Vec3::new(width, height, 1.0);

    for (pos, cell) in grid.iter() {
        if cell.is_wall() {
            continue;
        }
        let x = pos.col as f32 * width;
        let z = pos.row as f32 * width;

        // floor
        mesh.add_quad(
            &QuadTransform::facing(Vec3::new(x, 0.0, z), Vec3::Y, floor_scale),
            Submesh::FloorAndCeiling,
        )?;
        // ceiling
        mesh.add_quad(
            &QuadTransform::facing(Vec3::new(x, height, z), Vec3::NEG_Y, floor_scale),
            Submesh::FloorAndCeiling,
        )?;

        for side in WallSide::ALL {
            let blocked = side
                .neighbor(pos)
                .map_or(true, |n| grid.is_wall(n.row, n.col));
            if !blocked {
                continue;
            }
            let (dx, dz) = side.offset();
            let center = Vec3::new(
                (pos.col as f32 + dx) * width,
                half_height,
                (pos.row as f32 + dz) * width,
            );
            mesh.add_quad(
                &QuadTransform::facing(center, side.facing(), wall_scale),
                Submesh::Walls,
            )?;
        }
    }

    debug!(
        "Built maze mesh: {} vertices, {} floor/ceiling triangles, {} wall triangles",
        mesh.vertex_count(),
        mesh.triangle_count(Submesh::FloorAndCeiling),
        mesh.triangle_count(Submesh::Walls)
    );
    Ok(mesh)
}

/// Builds a mesh straight from raw `0`/`1` rows.
///
/// Empty, ragged or non-binary input fails with [`MeshError::InvalidGrid`].
pub fn build_from_rows(data: Vec<Vec<u8>>, width: f32, height: f32) -> Result<MeshData, MeshError> {
    let grid = OccupancyGrid::from_rows(data)?;
    build(&grid, width, height)
}
