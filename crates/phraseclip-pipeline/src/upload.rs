//! Uploaded file handles and validation.
//!
//! Validation happens before the pipeline touches the movie's status or
//! the filesystem, so a rejected upload leaves no trace.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncRead;

use crate::error::ValidationError;

/// Video container extensions the trimming tool is trusted with.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "mpeg", "mpg", "webm"];

/// Subtitle formats the parser understands.
pub const SUPPORTED_SUBTITLE_EXTENSIONS: &[&str] = &["srt"];

/// An uploaded file: a name, a declared size and a byte stream.
///
/// The stream is consumed once, chunk by chunk; the whole file is never
/// buffered in memory.
pub struct FileUpload {
    pub file_name: String,
    pub size: u64,
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        size: u64,
        reader: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            size,
            reader: Box::new(reader),
        }
    }

    /// Open a file on disk as an upload.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).await?;
        let size = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::new(file_name, size, file))
    }

    /// Lower-cased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (_, extension) = self.file_name.rsplit_once('.')?;
        if extension.is_empty() {
            return None;
        }
        Some(extension.to_lowercase())
    }

    pub(crate) fn into_reader(self) -> Box<dyn AsyncRead + Send + Unpin> {
        self.reader
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Check name, extension and declared size against the allowed set.
pub fn validate_upload(
    upload: &FileUpload,
    supported_extensions: &[&str],
    max_size: u64,
) -> Result<(), ValidationError> {
    if upload.file_name.is_empty() {
        return Err(ValidationError::MissingFileName);
    }

    if upload.file_name.contains('/') || upload.file_name.contains('\\') {
        return Err(ValidationError::InvalidFileName(upload.file_name.clone()));
    }

    let extension = upload.extension().unwrap_or_default();
    if !supported_extensions.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFileType {
            extension,
            supported: supported_extensions.join(", "),
        });
    }

    if upload.size > max_size {
        return Err(ValidationError::FileTooLarge {
            size: upload.size,
            max: max_size,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, size: u64) -> FileUpload {
        FileUpload::new(name, size, std::io::Cursor::new(Vec::new()))
    }

    #[test]
    fn test_accepts_supported_video() {
        let result = validate_upload(&upload("movie.mp4", 1024), SUPPORTED_VIDEO_EXTENSIONS, 4096);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_missing_name() {
        let result = validate_upload(&upload("", 10), SUPPORTED_VIDEO_EXTENSIONS, 4096);
        assert!(matches!(result, Err(ValidationError::MissingFileName)));
    }

    #[test]
    fn test_rejects_path_traversal_names() {
        let result = validate_upload(
            &upload("../../etc/movie.mp4", 10),
            SUPPORTED_VIDEO_EXTENSIONS,
            4096,
        );
        assert!(matches!(result, Err(ValidationError::InvalidFileName(_))));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let result = validate_upload(&upload("movie.txt", 10), SUPPORTED_VIDEO_EXTENSIONS, 4096);
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedFileType { .. })
        ));

        let result = validate_upload(&upload("noextension", 10), SUPPORTED_VIDEO_EXTENSIONS, 4096);
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_file() {
        let result = validate_upload(&upload("movie.mp4", 5000), SUPPORTED_VIDEO_EXTENSIONS, 4096);
        assert!(matches!(result, Err(ValidationError::FileTooLarge { .. })));
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(upload("MOVIE.MP4", 1).extension().as_deref(), Some("mp4"));
        assert_eq!(upload("archive.tar.gz", 1).extension().as_deref(), Some("gz"));
        assert!(upload("trailing.", 1).extension().is_none());
    }
}
