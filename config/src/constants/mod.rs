//! Centralized constants shared across the maze pipeline.
//!
//! Each public item documents its purpose and, where useful, a minimal usage
//! example so downstream crates can stay declarative.

// =============================================================================
// GENERATION DEFAULTS
// =============================================================================

/// Default probability that a junction cell is skipped (left open).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PLACEMENT_THRESHOLD;
/// assert!((0.0..=1.0).contains(&DEFAULT_PLACEMENT_THRESHOLD));
/// ```
pub const DEFAULT_PLACEMENT_THRESHOLD: f32 = 0.1;

/// Default number of grid rows requested by the host application.
pub const DEFAULT_ROWS: usize = 13;

/// Default number of grid columns requested by the host application.
pub const DEFAULT_COLS: usize = 15;

// =============================================================================
// HALLWAY GEOMETRY
// =============================================================================

/// Default hallway width in world units. One grid cell spans this distance
/// along both horizontal axes.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_HALL_HEIGHT, DEFAULT_HALL_WIDTH};
/// assert!(DEFAULT_HALL_WIDTH > DEFAULT_HALL_HEIGHT);
/// ```
pub const DEFAULT_HALL_WIDTH: f32 = 3.75;

/// Default hallway height in world units (floor to ceiling).
pub const DEFAULT_HALL_HEIGHT: f32 = 3.5;

// =============================================================================
// PLACEMENT HEIGHTS
// =============================================================================

/// Vertical offset of the start trigger volume.
pub const START_TRIGGER_HEIGHT: f32 = 0.5 + 0.75;

/// Vertical offset of the goal trigger volume.
pub const GOAL_TRIGGER_HEIGHT: f32 = 0.5;

/// Vertical offset at which the player is spawned on the start cell.
pub const PLAYER_SPAWN_HEIGHT: f32 = 1.0;

// =============================================================================
// DEBUG DUMP
// =============================================================================

/// Glyph run emitted for a wall cell in the textual grid dump.
pub const WALL_GLYPH: &str = "==";

/// Glyph run emitted for an open cell in the textual grid dump.
///
/// # Examples
/// ```
/// use config::constants::{OPEN_GLYPH, WALL_GLYPH};
/// assert_ne!(OPEN_GLYPH, WALL_GLYPH);
/// ```
pub const OPEN_GLYPH: &str = "....";
