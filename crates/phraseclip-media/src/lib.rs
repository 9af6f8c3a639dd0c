//! FFmpeg CLI wrapper for batched scene trimming.
//!
//! This crate provides:
//! - Type-safe trim command building (one input, many cut outputs)
//! - A runner that captures output streams and supports a timeout
//! - Batched scene extraction with deterministic clip file names

pub mod command;
pub mod error;
pub mod extractor;

pub use command::{check_ffmpeg, FfmpegRunner, TrimCommand};
pub use error::{MediaError, MediaResult};
pub use extractor::{extract_scenes, scene_file_name, ExtractorConfig, SceneCut};
