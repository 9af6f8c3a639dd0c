//! Object storage seam for scene clips.

use async_trait::async_trait;

use phraseclip_storage::{S3Client, StorageResult};

/// Where finished scene clips go.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Store one clip under `key`. Durable once this returns.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;
}

#[async_trait]
impl SceneStore for S3Client {
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()> {
        self.upload_bytes(data, key, content_type).await
    }
}

/// MIME type for a video file extension (leading dot optional).
pub fn video_content_type(extension: &str) -> &'static str {
    match extension.trim_start_matches('.') {
        "mp4" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "mpeg" | "mpg" => "video/mpeg",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_content_type() {
        assert_eq!(video_content_type(".mp4"), "video/mp4");
        assert_eq!(video_content_type("mkv"), "video/x-matroska");
        assert_eq!(video_content_type(".weird"), "application/octet-stream");
    }
}
