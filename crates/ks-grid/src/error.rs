//! Grid-subsystem error type.

use thiserror::Error;

use ks_core::Location;

/// Errors produced by `ks-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("map parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("location {0} is outside the grid")]
    OutOfBounds(Location),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
