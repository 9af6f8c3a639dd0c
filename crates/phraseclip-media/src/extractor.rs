//! Batched scene extraction.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use phraseclip_models::PhraseId;

use crate::command::{FfmpegRunner, TrimCommand};
use crate::error::MediaResult;

/// One interval to cut out of the source media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCut {
    pub phrase_id: PhraseId,
    pub start: Duration,
    pub end: Duration,
}

/// Extraction settings.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Cuts per FFmpeg invocation. Worst-case wall time is
    /// `ceil(cuts / batch_size)` sequential process runs.
    pub batch_size: usize,
    /// Audio volume multiplier applied to every clip
    pub audio_volume: f64,
    /// Per-batch timeout, if any
    pub timeout_secs: Option<u64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            audio_volume: 1.5,
            timeout_secs: None,
        }
    }
}

/// Deterministic clip file name for a phrase: `<phrase_id><extension>`.
///
/// `extension` carries its leading dot (`".mp4"`), or is empty.
pub fn scene_file_name(phrase_id: PhraseId, extension: &str) -> String {
    format!("{}{}", phrase_id, extension)
}

/// Cut one clip per interval out of `source`, writing clips under
/// `output_dir`.
///
/// Batches run sequentially, one FFmpeg process per batch, each blocking
/// until the tool exits. A clip that FFmpeg silently failed to produce is
/// only discovered when the caller reads it back.
pub async fn extract_scenes(
    source: &Path,
    cuts: &[SceneCut],
    output_dir: &Path,
    config: &ExtractorConfig,
) -> MediaResult<()> {
    if cuts.is_empty() {
        return Ok(());
    }

    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let batch_size = config.batch_size.max(1);
    let mut runner = FfmpegRunner::new();
    if let Some(secs) = config.timeout_secs {
        runner = runner.with_timeout(secs);
    }

    info!(
        source = %source.display(),
        cuts = cuts.len(),
        batch_size,
        "extracting scenes"
    );

    for (index, batch) in cuts.chunks(batch_size).enumerate() {
        let mut cmd = TrimCommand::new(source).audio_volume(config.audio_volume);

        for cut in batch {
            let output = output_dir.join(scene_file_name(cut.phrase_id, &extension));
            cmd = cmd.cut(cut.start.as_secs_f64(), cut.end.as_secs_f64(), output);
        }

        debug!(batch = index, clips = batch.len(), "running trim batch");
        runner.run(&cmd).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_name() {
        let id = PhraseId::new();
        assert_eq!(scene_file_name(id, ".mp4"), format!("{}.mp4", id));
        assert_eq!(scene_file_name(id, ""), id.to_string());
    }

    #[test]
    fn test_config_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.batch_size, 5);
        assert!((config.audio_volume - 1.5).abs() < f64::EPSILON);
        assert!(config.timeout_secs.is_none());
    }

    #[tokio::test]
    async fn test_no_cuts_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_scenes(
            Path::new("missing.mp4"),
            &[],
            dir.path(),
            &ExtractorConfig::default(),
        )
        .await;

        assert!(result.is_ok());
    }
}
