//! # Trigger Placement
//!
//! World positions for the start and goal trigger volumes. The maze only
//! reports where they go; creating colliders and invoking callbacks is left to
//! the host.

use config::constants::{GOAL_TRIGGER_HEIGHT, START_TRIGGER_HEIGHT};
use glam::Vec3;
use maze_grid::GridPos;
use maze_mesh::cell_center;
use serde::{Deserialize, Serialize};

/// Which marker a trigger stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    Start,
    Goal,
}

impl TriggerKind {
    /// Vertical offset of this trigger above the floor.
    #[inline]
    pub fn height(self) -> f32 {
        match self {
            TriggerKind::Start => START_TRIGGER_HEIGHT,
            TriggerKind::Goal => GOAL_TRIGGER_HEIGHT,
        }
    }
}

/// A trigger volume location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerPlacement {
    pub kind: TriggerKind,
    /// Grid cell the trigger occupies
    pub cell: GridPos,
    /// World-space center
    pub position: Vec3,
}

impl TriggerPlacement {
    /// Places a trigger of `kind` on `cell` for hallways `hall_width` wide.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze::{GridPos, TriggerKind, TriggerPlacement};
    /// use glam::Vec3;
    ///
    /// let t = TriggerPlacement::new(TriggerKind::Goal, GridPos::new(3, 5), 2.0);
    /// assert_eq!(t.position, Vec3::new(10.0, 0.5, 6.0));
    /// ```
    pub fn new(kind: TriggerKind, cell: GridPos, hall_width: f32) -> Self {
        Self {
            kind,
            cell,
            position: cell_center(cell, hall_width, kind.height()),
        }
    }
}
