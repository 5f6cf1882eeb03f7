//! # Maze Constructor
//!
//! Runs the pipeline for one generation request and packages the results.
//! A [`Maze`] is immutable: asking for a new maze means building a new value.

use config::constants::{DEFAULT_COLS, DEFAULT_ROWS, PLAYER_SPAWN_HEIGHT};
use config::MazeConfig;
use glam::Vec3;
use log::{debug, info};
use maze_grid::{GridPos, OccupancyGrid};
use maze_mesh::{build, cell_center, find_first_open, find_last_open, MeshData};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::trigger::{TriggerKind, TriggerPlacement};

/// A generated maze: topology, mesh and marker cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    grid: OccupancyGrid,
    mesh: MeshData,
    start: Option<GridPos>,
    goal: Option<GridPos>,
    hall_width: f32,
    hall_height: f32,
}

impl Maze {
    /// Generates a `rows × cols` maze.
    ///
    /// The configuration is validated first, then the grid is generated from
    /// `rng`, start/goal cells are located, and the mesh is built with the
    /// configured hallway size.
    ///
    /// # Errors
    ///
    /// [`MazeError::Config`] for an invalid configuration,
    /// [`MazeError::Grid`] for zero dimensions, and [`MazeError::Mesh`] if
    /// meshing fails.
    pub fn generate<R>(
        rows: usize,
        cols: usize,
        config: &MazeConfig,
        rng: &mut R,
    ) -> Result<Self, MazeError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let grid = maze_grid::generate(rows, cols, config.placement_threshold, rng)?;
        Self::assemble(grid, config)
    }

    /// Generates a maze of the default size (13 rows by 15 columns) with the
    /// default configuration.
    pub fn generate_default<R>(rng: &mut R) -> Result<Self, MazeError>
    where
        R: Rng + ?Sized,
    {
        Self::generate(DEFAULT_ROWS, DEFAULT_COLS, &MazeConfig::default(), rng)
    }

    /// Builds a maze around a caller-supplied grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze::{GridPos, Maze, MazeConfig, OccupancyGrid};
    ///
    /// let grid = OccupancyGrid::from_rows(vec![
    ///     vec![1, 1, 1, 1],
    ///     vec![1, 0, 0, 1],
    ///     vec![1, 1, 1, 1],
    /// ]).unwrap();
    /// let maze = Maze::from_grid(grid, &MazeConfig::default()).unwrap();
    /// assert_eq!(maze.start(), Some(GridPos::new(1, 1)));
    /// assert_eq!(maze.goal(), Some(GridPos::new(1, 2)));
    /// ```
    pub fn from_grid(grid: OccupancyGrid, config: &MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        Self::assemble(grid, config)
    }

    /// The room shown before any maze is requested: walls surrounding a single
    /// empty cell.
    pub fn single_room(config: &MazeConfig) -> Result<Self, MazeError> {
        Self::from_grid(OccupancyGrid::default(), config)
    }

    fn assemble(grid: OccupancyGrid, config: &MazeConfig) -> Result<Self, MazeError> {
        let mesh = build(&grid, config.hall_width, config.hall_height)?;
        let start = find_first_open(&grid);
        let goal = find_last_open(&grid);
        if start.is_none() {
            debug!("Maze has no open cell; start and goal are unset");
        }

        info!(
            "Maze {}x{} ready: start {:?}, goal {:?}, {} vertices",
            grid.rows(),
            grid.cols(),
            start,
            goal,
            mesh.vertex_count()
        );

        Ok(Self {
            grid,
            mesh,
            start,
            goal,
            hall_width: config.hall_width,
            hall_height: config.hall_height,
        })
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// First open cell in scan order, `None` for an all-wall grid.
    #[inline]
    pub fn start(&self) -> Option<GridPos> {
        self.start
    }

    /// Last open cell in scan order, `None` for an all-wall grid.
    #[inline]
    pub fn goal(&self) -> Option<GridPos> {
        self.goal
    }

    /// Hallway width the mesh was built with.
    #[inline]
    pub fn hall_width(&self) -> f32 {
        self.hall_width
    }

    /// Hallway height the mesh was built with.
    #[inline]
    pub fn hall_height(&self) -> f32 {
        self.hall_height
    }

    pub fn start_trigger(&self) -> Option<TriggerPlacement> {
        self.start
            .map(|cell| TriggerPlacement::new(TriggerKind::Start, cell, self.hall_width))
    }

    pub fn goal_trigger(&self) -> Option<TriggerPlacement> {
        self.goal
            .map(|cell| TriggerPlacement::new(TriggerKind::Goal, cell, self.hall_width))
    }

    /// Start and goal triggers, in that order, skipping any that are unset.
    pub fn triggers(&self) -> Vec<TriggerPlacement> {
        self.start_trigger().into_iter().chain(self.goal_trigger()).collect()
    }

    /// Where the player should be placed: above the start cell.
    pub fn spawn_position(&self) -> Option<Vec3> {
        self.start
            .map(|cell| cell_center(cell, self.hall_width, PLAYER_SPAWN_HEIGHT))
    }
}
