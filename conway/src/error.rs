// error.rs - Error type shared by the simulation core

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell size must be between 1 and {} pixels", crate::view::MAX_CELL_SIZE)]
    InvalidCellSize,

    #[error("a {rows}x{cols} board of {cell_size} px cells does not fit on the pixel plane")]
    BoardTooLarge {
        rows: usize,
        cols: usize,
        cell_size: u32,
    },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("tick rate must be a positive number of ticks per second, got {0}")]
    InvalidTickRate(f32),

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
