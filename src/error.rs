//! Error types for maze generation and level setup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("probability `{name}` must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },

    #[error("grid size must be a positive number, got {0}")]
    InvalidGridSize(f32),

    #[error("settings file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
