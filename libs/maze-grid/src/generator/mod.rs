//! # Grid Generator
//!
//! Randomized junction carving. Cells on the outer border become walls; every
//! interior cell with an even row and even column (a junction) becomes a wall
//! with probability `1 - threshold`, together with one of its four orthogonal
//! neighbors picked at random. Everything else stays open.
//!
//! The algorithm is tuned for odd dimensions. Even dimensions still produce a
//! grid, but the carving lattice no longer lines up with the far border.

use log::{debug, trace, warn};
use rand::Rng;

use crate::error::GridError;
use crate::grid::{Cell, OccupancyGrid};

/// Generates a `rows × cols` occupancy grid.
///
/// `placement_threshold` is the probability that a junction is skipped: `0.0`
/// walls every junction, `1.0` leaves only the border. The random source is
/// supplied by the caller so the result is reproducible under a fixed seed.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] when either dimension is zero.
///
/// # Example
///
/// ```rust
/// use maze_grid::generate;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let a = generate(9, 9, 0.1, &mut StdRng::seed_from_u64(1)).unwrap();
/// let b = generate(9, 9, 0.1, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate<R>(
    rows: usize,
    cols: usize,
    placement_threshold: f32,
    rng: &mut R,
) -> Result<OccupancyGrid, GridError>
where
    R: Rng + ?Sized,
{
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    if rows % 2 == 0 && cols % 2 == 0 {
        warn!("Odd numbers work better for maze size: got {rows}x{cols}");
    }

    let mut grid = OccupancyGrid::filled(rows, cols, Cell::Open);

    for row in 0..rows {
        for col in 0..cols {
            if grid.is_border(row, col) {
                grid.set(row, col, Cell::Wall);
            } else if row % 2 == 0 && col % 2 == 0 && rng.gen::<f32>() > placement_threshold {
                grid.set(row, col, Cell::Wall);
                mark_neighbor(&mut grid, row, col, rng);
            }
        }
    }

    debug!(
        "Generated {rows}x{cols} grid: {} walls, {} open",
        grid.wall_count(),
        grid.open_count()
    );
    Ok(grid)
}

/// Walls one orthogonal neighbor of `(row, col)`.
///
/// The first coin flip picks the axis, the second the direction along it.
/// Writes that would land outside the grid are skipped.
fn mark_neighbor<R>(grid: &mut OccupancyGrid, row: usize, col: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let horizontal = rng.gen_bool(0.5);
    let step: isize = if rng.gen_bool(0.5) { -1 } else { 1 };
    let (dr, dc) = if horizontal { (0, step) } else { (step, 0) };

    let target = row
        .checked_add_signed(dr)
        .zip(col.checked_add_signed(dc))
        .filter(|&(r, c)| r < grid.rows() && c < grid.cols());

    match target {
        Some((r, c)) => {
            grid.set(r, c, Cell::Wall);
        }
        None => trace!("Skipped neighbor write outside grid from ({row}, {col}) by ({dr}, {dc})"),
    }
}
