//! Rotworld - perfect-maze levels for a rigid-body physics demo
//!
//! Core modules:
//! - `maze`: Deterministic perfect maze generation (connection sets, analysis)
//! - `level`: Static wall geometry and player spawn built from a maze
//! - `settings`: JSON-backed configuration
//! - `error`: Error types

pub mod error;
pub mod level;
pub mod maze;
pub mod settings;

pub use error::{MazeError, Result};
pub use level::{Level, PlayerSpawn, WallSegment, build_level};
pub use maze::{ConnectionSet, EdgeState, GeneratorParams, Grid, LabelMerge, generate, generate_with};
pub use settings::Settings;

/// Level configuration constants
pub mod consts {
    /// Default maze dimensions (cells)
    pub const DEFAULT_GRID_WIDTH: usize = 10;
    pub const DEFAULT_GRID_HEIGHT: usize = 10;
    /// World units per cell
    pub const DEFAULT_GRID_SIZE: f32 = 20.0;

    /// Chance of joining two neighbours in a row (forced to 1 on the last row)
    pub const DEFAULT_HORIZONTAL_CHANCE: f32 = 0.5;
    /// Chance of carving down from a cell
    pub const DEFAULT_VERTICAL_CHANCE: f32 = 0.5;

    /// Player body defaults
    pub const PLAYER_MASS: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 5.0;

    /// Wall segments are infinitely thin
    pub const WALL_RADIUS: f32 = 0.0;
}
