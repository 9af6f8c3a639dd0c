//! Model error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for model construction and parsing.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced when building or parsing model values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("start offset {start:?} must be before end offset {end:?}")]
    StartNotBeforeEnd { start: Duration, end: Duration },

    #[error("invalid offset '{0}', expected HH:MM:SS.mmm")]
    InvalidOffset(String),
}
