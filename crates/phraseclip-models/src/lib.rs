//! Shared data models for the phraseclip backend.
//!
//! This crate provides:
//! - Movie and phrase identifiers
//! - The movie processing status state machine
//! - Phrase records and validated creation drafts
//! - Transient subtitle entries
//! - The phrase transfer schema for export/import
//! - In-movie offset formatting (`HH:MM:SS.mmm`)

pub mod error;
pub mod ids;
pub mod movie;
pub mod offset;
pub mod phrase;
pub mod subtitle;
pub mod transfer;

pub use error::{ModelError, ModelResult};
pub use ids::{MovieId, PhraseId};
pub use movie::MovieStatus;
pub use offset::{format_offset, parse_offset};
pub use phrase::{Phrase, PhraseDraft};
pub use subtitle::SubtitleEntry;
pub use transfer::PhraseTransfer;
