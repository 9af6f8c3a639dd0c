//! Pipeline configuration.

use std::path::PathBuf;

use phraseclip_media::ExtractorConfig;
use phraseclip_subtitles::DEFAULT_MAX_ENTRIES;

/// Pipeline configuration.
///
/// Extraction runs synchronously inside the triggering request; the entry
/// cap bounds its worst-case wall time.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root under which per-movie temp directories are created
    pub scenes_tmp_path: PathBuf,
    /// Maximum subtitle entries (and so phrases) taken per run
    pub max_subtitle_entries: usize,
    /// Cuts per FFmpeg invocation
    pub ffmpeg_batch_size: usize,
    /// Audio volume multiplier applied to every clip
    pub audio_volume: f64,
    /// Per-batch FFmpeg timeout, if any
    pub batch_timeout_secs: Option<u64>,
    /// Buffer size for streaming the source media to disk
    pub copy_chunk_bytes: usize,
    /// Maximum accepted movie file size
    pub max_movie_file_size: u64,
    /// Maximum accepted subtitles file size
    pub max_subtitles_file_size: u64,
    /// Storage key prefix for scene objects
    pub movies_storage_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scenes_tmp_path: PathBuf::from("/tmp/phraseclip"),
            max_subtitle_entries: DEFAULT_MAX_ENTRIES,
            ffmpeg_batch_size: 5,
            audio_volume: 1.5,
            batch_timeout_secs: None,
            copy_chunk_bytes: 8 * 1024 * 1024,
            max_movie_file_size: 5 * 1024 * 1024 * 1024,
            max_subtitles_file_size: 10 * 1024 * 1024,
            movies_storage_prefix: "movies".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            scenes_tmp_path: std::env::var("PHRASECLIP_SCENES_TMP_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scenes_tmp_path),
            max_subtitle_entries: env_parse("PHRASECLIP_MAX_SUBTITLE_ENTRIES")
                .unwrap_or(defaults.max_subtitle_entries),
            ffmpeg_batch_size: env_parse("PHRASECLIP_FFMPEG_BATCH_SIZE")
                .unwrap_or(defaults.ffmpeg_batch_size),
            audio_volume: env_parse("PHRASECLIP_AUDIO_VOLUME").unwrap_or(defaults.audio_volume),
            batch_timeout_secs: env_parse("PHRASECLIP_BATCH_TIMEOUT_SECS"),
            copy_chunk_bytes: env_parse("PHRASECLIP_COPY_CHUNK_BYTES")
                .unwrap_or(defaults.copy_chunk_bytes),
            max_movie_file_size: env_parse("PHRASECLIP_MAX_MOVIE_FILE_SIZE")
                .unwrap_or(defaults.max_movie_file_size),
            max_subtitles_file_size: env_parse("PHRASECLIP_MAX_SUBTITLES_FILE_SIZE")
                .unwrap_or(defaults.max_subtitles_file_size),
            movies_storage_prefix: std::env::var("PHRASECLIP_MOVIES_STORAGE_PREFIX")
                .unwrap_or(defaults.movies_storage_prefix),
        }
    }

    /// Extraction settings derived from this config.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            batch_size: self.ffmpeg_batch_size,
            audio_volume: self.audio_volume,
            timeout_secs: self.batch_timeout_secs,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();

        assert_eq!(config.max_subtitle_entries, 50);
        assert_eq!(config.ffmpeg_batch_size, 5);
        assert_eq!(config.max_movie_file_size, 5 * 1024 * 1024 * 1024);
        assert_eq!(config.max_subtitles_file_size, 10 * 1024 * 1024);
        assert_eq!(config.movies_storage_prefix, "movies");
    }

    #[test]
    fn test_extractor_config_carries_batching() {
        let config = PipelineConfig {
            ffmpeg_batch_size: 3,
            audio_volume: 2.0,
            batch_timeout_secs: Some(120),
            ..PipelineConfig::default()
        };

        let extractor = config.extractor_config();
        assert_eq!(extractor.batch_size, 3);
        assert!((extractor.audio_volume - 2.0).abs() < f64::EPSILON);
        assert_eq!(extractor.timeout_secs, Some(120));
    }
}
