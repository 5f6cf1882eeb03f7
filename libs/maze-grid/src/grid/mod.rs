//! # Occupancy Grid
//!
//! Row-major grid of wall/open cells. A grid is immutable once built: only the
//! generator inside this crate writes cells, and only before handing it out.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Walkable floor (`0`).
    Open,
    /// Blocked (`1`).
    Wall,
}

impl Cell {
    /// Numeric encoding: `0` for open, `1` for wall.
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }

    /// Decodes `0`/`1`; any other value is rejected.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// Row/column coordinate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A `rows × cols` occupancy grid.
///
/// # Example
///
/// ```rust
/// use maze_grid::{Cell, OccupancyGrid};
///
/// let grid = OccupancyGrid::from_rows(vec![
///     vec![1, 1, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 1],
/// ]).unwrap();
/// assert_eq!(grid.get(1, 1), Some(Cell::Open));
/// assert_eq!(grid.open_count(), 1);
/// assert_eq!(grid, OccupancyGrid::default());
/// ```
///
/// Deserialization goes through [`OccupancyGrid::validate`], so a grid whose
/// stored shape disagrees with its cells is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` long
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`OccupancyGrid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for OccupancyGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let grid = Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        };
        grid.validate()?;
        Ok(grid)
    }
}

impl Default for OccupancyGrid {
    /// Walls surrounding a single empty cell.
    fn default() -> Self {
        let mut grid = Self::filled(3, 3, Cell::Wall);
        grid.set(1, 1, Cell::Open);
        grid
    }
}

impl OccupancyGrid {
    /// Allocates a grid with every cell set to `cell`. Callers guarantee
    /// non-zero dimensions.
    pub(crate) fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Builds a grid from raw `0`/`1` rows.
    ///
    /// Fails if there are no rows, a row is empty, rows differ in length, or a
    /// value is neither `0` nor `1`.
    pub fn from_rows(data: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::invalid_grid(format!(
                "grid must have at least one cell, got {rows}x{cols}"
            )));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, values) in data.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::invalid_grid(format!(
                    "row {row} has {} cells, expected {cols}",
                    values.len()
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_u8(value).ok_or(GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Checks the shape invariants: non-zero dimensions and `rows * cols`
    /// cells.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::invalid_grid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.cells.len() != self.rows * self.cols {
            return Err(GridError::invalid_grid(format!(
                "{} cells stored for a {}x{} grid",
                self.cells.len(),
                self.rows,
                self.cols
            )));
        }
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, pos: GridPos) -> Option<Cell> {
        self.get(pos.row, pos.col)
    }

    /// True for wall cells. Out-of-bounds coordinates count as wall.
    #[inline]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.get(row, col).map_or(true, Cell::is_wall)
    }

    /// True for open cells inside the grid.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_open)
    }

    /// True for cells on the outer border.
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    /// Returns one row as a slice, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (GridPos, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (GridPos::new(i / cols, i % cols), cell))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.len() - self.open_count()
    }

    /// Copies the grid back out as raw `0`/`1` rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Writes a cell. Returns `false` (and writes nothing) when out of bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
