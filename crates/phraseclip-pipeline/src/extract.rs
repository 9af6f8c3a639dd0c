//! Scene extraction seam.

use std::path::Path;

use async_trait::async_trait;

use phraseclip_media::{extract_scenes, ExtractorConfig, MediaResult, SceneCut};

/// Cuts clips out of a source file into an output directory.
#[async_trait]
pub trait SceneExtractor: Send + Sync {
    async fn extract(
        &self,
        source: &Path,
        cuts: &[SceneCut],
        output_dir: &Path,
    ) -> MediaResult<()>;
}

/// The real extractor: batched FFmpeg invocations.
#[derive(Debug, Clone, Default)]
pub struct FfmpegSceneExtractor {
    config: ExtractorConfig,
}

impl FfmpegSceneExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SceneExtractor for FfmpegSceneExtractor {
    async fn extract(
        &self,
        source: &Path,
        cuts: &[SceneCut],
        output_dir: &Path,
    ) -> MediaResult<()> {
        extract_scenes(source, cuts, output_dir, &self.config).await
    }
}
