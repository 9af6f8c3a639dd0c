//! Subtitle error types.

use thiserror::Error;

/// Result type for subtitle operations.
pub type SubtitleResult<T> = Result<T, SubtitleError>;

/// Errors that can occur while decoding a subtitle file.
#[derive(Debug, Error)]
pub enum SubtitleError {
    #[error("subtitle file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("failed to parse subtitles: {0}")]
    Parse(#[from] srtlib::ParsingError),

    #[error("invalid cue timing: {0}")]
    InvalidCue(#[from] phraseclip_models::ModelError),
}
