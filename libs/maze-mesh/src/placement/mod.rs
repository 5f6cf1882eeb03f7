//! # Start and Goal Placement
//!
//! Scans used by the caller to place start/goal markers, plus the mapping
//! from grid cells to world positions used by the mesh builder.

use glam::Vec3;
use maze_grid::{GridPos, OccupancyGrid};

/// First open cell scanning rows ascending, columns ascending.
///
/// Returns `None` for an all-wall grid.
///
/// # Example
///
/// ```rust
/// use maze_grid::{GridPos, OccupancyGrid};
/// use maze_mesh::{find_first_open, find_last_open};
///
/// let grid = OccupancyGrid::default();
/// assert_eq!(find_first_open(&grid), Some(GridPos::new(1, 1)));
/// assert_eq!(find_last_open(&grid), Some(GridPos::new(1, 1)));
/// ```
pub fn find_first_open(grid: &OccupancyGrid) -> Option<GridPos> {
    grid.iter().find(|(_, cell)| cell.is_open()).map(|(pos, _)| pos)
}

/// First open cell scanning rows descending, columns descending.
///
/// This is the open cell nearest the far corner in reverse scan order, not
/// necessarily the one geometrically farthest from the start.
pub fn find_last_open(grid: &OccupancyGrid) -> Option<GridPos> {
    grid.iter().rev().find(|(_, cell)| cell.is_open()).map(|(pos, _)| pos)
}

/// World-space center of a cell at height `y`.
#[inline]
pub fn cell_center(pos: GridPos, width: f32, y: f32) -> Vec3 {
    Vec3::new(pos.col as f32 * width, y, pos.row as f32 * width)
}

#[cfg(test)]
mod tests;
