//! Tests for the occupancy grid type.
//!
//! These tests verify that the grid:
//! - Accepts rectangular 0/1 data and rejects everything else
//! - Treats out-of-bounds lookups as walls
//! - Iterates in row-major order

use crate::grid::{Cell, GridPos, OccupancyGrid};
use crate::GridError;

fn corridor() -> OccupancyGrid {
    OccupancyGrid::from_rows(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap()
}

#[test]
fn test_default_is_single_open_room() {
    let grid = OccupancyGrid::default();
    assert_eq!((grid.rows(), grid.cols()), (3, 3));
    assert_eq!(grid.open_count(), 1);
    assert!(grid.is_open(1, 1));
    assert_eq!(grid.wall_count(), 8);
}

#[test]
fn test_from_rows_keeps_layout() {
    let grid = corridor();
    assert_eq!((grid.rows(), grid.cols()), (3, 5));
    assert_eq!(grid.get(1, 3), Some(Cell::Open));
    assert_eq!(grid.get(1, 4), Some(Cell::Wall));
    assert_eq!(grid.to_rows()[1], vec![1, 0, 0, 0, 1]);
}

#[test]
fn test_from_rows_rejects_empty() {
    assert!(matches!(
        OccupancyGrid::from_rows(vec![]),
        Err(GridError::InvalidGrid { .. })
    ));
    assert!(matches!(
        OccupancyGrid::from_rows(vec![vec![]]),
        Err(GridError::InvalidGrid { .. })
    ));
}

#[test]
fn test_from_rows_rejects_ragged() {
    let result = OccupancyGrid::from_rows(vec![vec![1, 1, 1], vec![1, 0]]);
    assert!(matches!(result, Err(GridError::InvalidGrid { .. })));
}

#[test]
fn test_from_rows_rejects_unknown_values() {
    let result = OccupancyGrid::from_rows(vec![vec![1, 2], vec![0, 1]]);
    assert_eq!(
        result.unwrap_err(),
        GridError::InvalidCell {
            row: 0,
            col: 1,
            value: 2
        }
    );
}

#[test]
fn test_out_of_bounds_is_wall() {
    let grid = corridor();
    assert_eq!(grid.get(3, 0), None);
    assert!(grid.is_wall(3, 0));
    assert!(grid.is_wall(0, 99));
    assert!(!grid.is_open(7, 7));
}

#[test]
fn test_border_detection() {
    let grid = corridor();
    assert!(grid.is_border(0, 2));
    assert!(grid.is_border(2, 2));
    assert!(grid.is_border(1, 0));
    assert!(grid.is_border(1, 4));
    assert!(!grid.is_border(1, 2));
}

#[test]
fn test_iter_is_row_major() {
    let grid = corridor();
    let positions: Vec<GridPos> = grid.iter().map(|(pos, _)| pos).take(6).collect();
    assert_eq!(positions[4], GridPos::new(0, 4));
    assert_eq!(positions[5], GridPos::new(1, 0));

    let open: Vec<GridPos> = grid
        .iter()
        .filter(|(_, cell)| cell.is_open())
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(open, vec![GridPos::new(1, 1), GridPos::new(1, 2), GridPos::new(1, 3)]);
}

#[test]
fn test_row_access() {
    let grid = corridor();
    assert_eq!(grid.row(1).map(<[Cell]>::len), Some(5));
    assert!(grid.row(3).is_none());
}

#[test]
fn test_cell_encoding() {
    assert_eq!(Cell::Open.as_u8(), 0);
    assert_eq!(Cell::Wall.as_u8(), 1);
    assert_eq!(Cell::from_u8(1), Some(Cell::Wall));
    assert_eq!(Cell::from_u8(5), None);
}

#[test]
fn test_validate_accepts_built_grids() {
    assert!(OccupancyGrid::default().validate().is_ok());
    assert!(corridor().validate().is_ok());
}

#[test]
fn test_deserialize_rejects_inconsistent_shape() {
    for json in [
        r#"{ "rows": 2, "cols": 2, "cells": ["Open"] }"#,
        r#"{ "rows": 0, "cols": 0, "cells": [] }"#,
        r#"{ "rows": 1, "cols": 0, "cells": ["Open"] }"#,
        r#"{ "rows": 1, "cols": 2, "cells": ["Wall", "Open", "Wall"] }"#,
    ] {
        assert!(serde_json::from_str::<OccupancyGrid>(json).is_err(), "{json}");
    }
}

#[test]
fn test_serde_keeps_layout() {
    let grid = corridor();
    let json = serde_json::to_string(&grid).unwrap();
    let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
    assert!(back.is_open(1, 3));
    assert_eq!(back.to_rows(), grid.to_rows());
}
