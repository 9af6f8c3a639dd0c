//! Subtitle-driven scene extraction pipeline.
//!
//! This crate provides:
//! - The [`ScenePipeline`] orchestrator: parse subtitles, batch-create
//!   inactive phrases, cut scene clips, upload and activate, with a
//!   single rollback path and a terminal movie status
//! - Collaborator traits for the movie/phrase catalog, scene storage and
//!   the extractor, plus in-memory implementations for tests
//! - Upload validation, per-movie leases and configuration
//! - Phrase metadata export/import

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod lease;
pub mod memory;
pub mod pipeline;
pub mod store;
pub mod transfer;
pub mod upload;

pub use catalog::{MovieCatalog, PhraseCatalog};
pub use config::PipelineConfig;
pub use error::{
    CatalogError, CatalogResult, PipelineError, PipelineResult, StageError, ValidationError,
};
pub use extract::{FfmpegSceneExtractor, SceneExtractor};
pub use lease::{MovieLease, MovieLeases};
pub use pipeline::ScenePipeline;
pub use store::{video_content_type, SceneStore};
pub use transfer::{export_phrases, import_phrases};
pub use upload::{
    validate_upload, FileUpload, SUPPORTED_SUBTITLE_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS,
};
