//! Tests for start/goal scans.

use glam::Vec3;
use maze_grid::{GridPos, OccupancyGrid};

use super::*;

#[test]
fn scans_pick_opposite_ends() {
    let grid = OccupancyGrid::from_rows(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 1, 0, 0, 1],
        vec![1, 0, 1, 0, 1],
        vec![1, 0, 0, 1, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap();
    assert_eq!(find_first_open(&grid), Some(GridPos::new(1, 2)));
    assert_eq!(find_last_open(&grid), Some(GridPos::new(3, 2)));
}

/// The reverse scan finishes a whole row before moving up, so a cell far to
/// the right in an earlier row loses to any open cell in a later row.
#[test]
fn last_open_follows_scan_order() {
    let grid = OccupancyGrid::from_rows(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 0, 1, 1, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap();
    assert_eq!(find_last_open(&grid), Some(GridPos::new(2, 1)));
}

#[test]
fn all_wall_grid_has_no_positions() {
    let grid = OccupancyGrid::from_rows(vec![vec![1; 3]; 3]).unwrap();
    assert_eq!(find_first_open(&grid), None);
    assert_eq!(find_last_open(&grid), None);
}

#[test]
fn open_border_cells_are_found() {
    let grid = OccupancyGrid::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    assert_eq!(find_first_open(&grid), Some(GridPos::new(0, 0)));
    assert_eq!(find_last_open(&grid), Some(GridPos::new(1, 1)));
}

#[test]
fn cell_center_maps_col_to_x_and_row_to_z() {
    assert_eq!(cell_center(GridPos::new(2, 3), 2.0, 0.5), Vec3::new(6.0, 0.5, 4.0));
    assert_eq!(cell_center(GridPos::new(0, 0), 3.75, 1.0), Vec3::new(0.0, 1.0, 0.0));
}
