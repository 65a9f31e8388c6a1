//! Planner-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration or parsing problems can surface.

use thiserror::Error;

/// The error type for `ks-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ks-core`.
pub type CoreResult<T> = Result<T, CoreError>;
