//! # Debug Dump
//!
//! Textual view of an occupancy grid for diagnostics. Not a file format: the
//! glyphs and layout carry no compatibility guarantee.

use std::fmt;

use config::constants::{OPEN_GLYPH, WALL_GLYPH};

use crate::grid::OccupancyGrid;

impl OccupancyGrid {
    /// Renders the grid as text, one line per row.
    ///
    /// Rows are emitted from the highest index down to row 0 so the output
    /// matches a top-down view where rows grow away from the viewer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze_grid::OccupancyGrid;
    ///
    /// let dump = OccupancyGrid::default().debug_dump();
    /// assert_eq!(dump.lines().nth(1), Some("==....=="));
    /// ```
    pub fn debug_dump(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() * OPEN_GLYPH.len() + 1));
        for row in (0..self.rows()).rev() {
            for col in 0..self.cols() {
                out.push_str(if self.is_open(row, col) { OPEN_GLYPH } else { WALL_GLYPH });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_dump())
    }
}
