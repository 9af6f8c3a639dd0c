//! S3-compatible object storage client for scene clips.
//!
//! Works against any S3 API endpoint (Cloudflare R2 included) via a
//! configurable endpoint URL and path-style addressing. Provides:
//! - File and byte upload/download
//! - Single, bulk and prefix deletion
//! - Key listing and existence checks
//! - Presigned GET URLs for clip playback

pub mod client;
pub mod error;

pub use client::{S3Client, S3Config};
pub use error::{StorageError, StorageResult};
