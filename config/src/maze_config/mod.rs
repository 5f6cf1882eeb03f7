//! Caller-owned generation configuration.
//!
//! A `MazeConfig` is constructed (or deserialized) by the host application and
//! passed by reference into every generation request. Nothing in the pipeline
//! mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_HALL_HEIGHT, DEFAULT_HALL_WIDTH, DEFAULT_PLACEMENT_THRESHOLD};

/// Parameters consumed by the grid generator and the mesh builder.
///
/// # Examples
/// ```
/// use config::MazeConfig;
/// let cfg = MazeConfig::default().with_hall_width(5.0);
/// assert_eq!(cfg.hall_width, 5.0);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Probability in `[0, 1]` that a junction cell is left open.
    pub placement_threshold: f32,
    /// Hallway width in world units.
    pub hall_width: f32,
    /// Hallway height in world units.
    pub hall_height: f32,
}

impl MazeConfig {
    /// Builds a configuration, rejecting values the pipeline cannot use.
    ///
    /// # Examples
    /// ```
    /// use config::{ConfigError, MazeConfig};
    /// assert!(MazeConfig::new(0.5, 3.0, 3.0).is_ok());
    /// assert_eq!(
    ///     MazeConfig::new(1.5, 3.0, 3.0).unwrap_err(),
    ///     ConfigError::InvalidThreshold(1.5)
    /// );
    /// ```
    pub fn new(
        placement_threshold: f32,
        hall_width: f32,
        hall_height: f32,
    ) -> Result<Self, ConfigError> {
        let cfg = Self {
            placement_threshold,
            hall_width,
            hall_height,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.placement_threshold.is_finite() || !(0.0..=1.0).contains(&self.placement_threshold) {
            return Err(ConfigError::InvalidThreshold(self.placement_threshold));
        }
        if !self.hall_width.is_finite() || self.hall_width <= 0.0 {
            return Err(ConfigError::InvalidHallWidth(self.hall_width));
        }
        if !self.hall_height.is_finite() || self.hall_height <= 0.0 {
            return Err(ConfigError::InvalidHallHeight(self.hall_height));
        }
        Ok(())
    }

    /// Returns a copy with a different placement threshold. Unchecked.
    pub fn with_placement_threshold(mut self, placement_threshold: f32) -> Self {
        self.placement_threshold = placement_threshold;
        self
    }

    /// Returns a copy with a different hallway width. Unchecked.
    pub fn with_hall_width(mut self, hall_width: f32) -> Self {
        self.hall_width = hall_width;
        self
    }

    /// Returns a copy with a different hallway height. Unchecked.
    pub fn with_hall_height(mut self, hall_height: f32) -> Self {
        self.hall_height = hall_height;
        self
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            placement_threshold: DEFAULT_PLACEMENT_THRESHOLD,
            hall_width: DEFAULT_HALL_WIDTH,
            hall_height: DEFAULT_HALL_HEIGHT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold is not a probability.
    #[error("placement threshold must be within [0, 1]: {0}")]
    InvalidThreshold(f32),
    /// Width is zero, negative or not finite.
    #[error("hall width must be positive: {0}")]
    InvalidHallWidth(f32),
    /// Height is zero, negative or not finite.
    #[error("hall height must be positive: {0}")]
    InvalidHallHeight(f32),
}

#[cfg(test)]
mod tests;
