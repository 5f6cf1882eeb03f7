//! # Config Crate
//!
//! Centralized configuration for the maze pipeline. Every tunable value used by
//! the grid generator, the mesh builder and the orchestration layer is defined
//! here so that downstream crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_HALL_WIDTH, DEFAULT_PLACEMENT_THRESHOLD};
//! use config::MazeConfig;
//!
//! let cfg = MazeConfig::default();
//! assert_eq!(cfg.hall_width, DEFAULT_HALL_WIDTH);
//! assert_eq!(cfg.placement_threshold, DEFAULT_PLACEMENT_THRESHOLD);
//!
//! let tighter = MazeConfig::new(0.0, 2.0, 3.0).unwrap();
//! assert_eq!(tighter.hall_width, 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Caller-Owned**: Configuration is a plain value passed into each call
//! - **Validated**: `MazeConfig::new` rejects values the generators cannot use

pub mod constants;
pub mod maze_config;

pub use maze_config::{ConfigError, MazeConfig};
