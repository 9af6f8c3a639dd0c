//! Pipeline error types.
//!
//! Validation problems surface before any pipeline work starts and never
//! trigger rollback. Everything that fails inside a run funnels through
//! one rollback handler and is re-raised as a single
//! [`PipelineError::Failed`] whose cause stays reachable via
//! `std::error::Error::source`.

use std::path::PathBuf;

use thiserror::Error;

use phraseclip_media::MediaError;
use phraseclip_models::{ModelError, MovieId, PhraseId};
use phraseclip_storage::StorageError;
use phraseclip_subtitles::SubtitleError;

/// Result type for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for catalog collaborators.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Upload problems caught before the state machine is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("file name is required")]
    MissingFileName,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("unsupported file type '{extension}', supported: {supported}")]
    UnsupportedFileType {
        extension: String,
        supported: String,
    },

    #[error("file is too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },
}

/// Errors reported by the movie/phrase persistence collaborators.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    #[error("phrase not found: {0}")]
    PhraseNotFound(PhraseId),

    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Cause of a failed run, by stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Subtitle(#[from] SubtitleError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("scene file missing: {0}")]
    MissingScene(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid upload: {0}")]
    Validation(#[from] ValidationError),

    #[error("an extraction run is already in flight for movie {0}")]
    AlreadyRunning(MovieId),

    #[error("scene extraction pipeline failed")]
    Failed(#[source] Box<StageError>),
}
