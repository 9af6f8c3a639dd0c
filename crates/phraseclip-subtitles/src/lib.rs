//! SRT parsing and time shifting for the scene pipeline.
//!
//! Decodes conventional `.srt` content into validated [`SubtitleEntry`]
//! values, applying optional global start/end shifts and normalizing each
//! cue's text into its canonical search form.
//!
//! [`SubtitleEntry`]: phraseclip_models::SubtitleEntry

pub mod error;
pub mod parse;

pub use error::{SubtitleError, SubtitleResult};
pub use parse::{parse_subtitles, SubtitleShift, DEFAULT_MAX_ENTRIES};
