//! Scene extraction orchestration.
//!
//! One run takes a movie's uploaded source file and subtitle file and
//! leaves behind: one inactive-then-activated phrase per subtitle cue, one
//! stored clip per phrase, and a terminal movie status. The status state
//! machine is `pending -> processing -> {processed | error}`; any failure
//! inside a run funnels through a single rollback handler.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, BufWriter};
use tracing::{debug, error, info, warn};

use phraseclip_media::{scene_file_name, SceneCut};
use phraseclip_models::{MovieId, MovieStatus, Phrase, PhraseDraft};
use phraseclip_subtitles::{parse_subtitles, SubtitleShift};

use crate::catalog::{MovieCatalog, PhraseCatalog};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult, StageError};
use crate::extract::SceneExtractor;
use crate::lease::MovieLeases;
use crate::store::{video_content_type, SceneStore};
use crate::upload::{
    validate_upload, FileUpload, SUPPORTED_SUBTITLE_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS,
};

/// The scene extraction pipeline.
///
/// Collaborators are injected behind trait objects; production wiring uses
/// the catalog's database implementations, [`S3Client`] and
/// [`FfmpegSceneExtractor`], tests swap in fakes.
///
/// [`S3Client`]: phraseclip_storage::S3Client
/// [`FfmpegSceneExtractor`]: crate::extract::FfmpegSceneExtractor
pub struct ScenePipeline {
    movies: Arc<dyn MovieCatalog>,
    phrases: Arc<dyn PhraseCatalog>,
    scenes: Arc<dyn SceneStore>,
    extractor: Arc<dyn SceneExtractor>,
    leases: MovieLeases,
    config: PipelineConfig,
}

impl ScenePipeline {
    pub fn new(
        movies: Arc<dyn MovieCatalog>,
        phrases: Arc<dyn PhraseCatalog>,
        scenes: Arc<dyn SceneStore>,
        extractor: Arc<dyn SceneExtractor>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            movies,
            phrases,
            scenes,
            extractor,
            leases: MovieLeases::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the whole pipeline for one movie.
    ///
    /// Validation failures surface before the movie's status is touched.
    /// Once `processing` is set, any failure rolls the status to `error`,
    /// removes the temp directory and returns a single
    /// [`PipelineError::Failed`]; phrases already created stay behind,
    /// inactive and without scene keys.
    pub async fn run(
        &self,
        movie_id: MovieId,
        movie: FileUpload,
        subtitles: FileUpload,
        shift: SubtitleShift,
    ) -> PipelineResult<()> {
        validate_upload(
            &movie,
            SUPPORTED_VIDEO_EXTENSIONS,
            self.config.max_movie_file_size,
        )?;
        validate_upload(
            &subtitles,
            SUPPORTED_SUBTITLE_EXTENSIONS,
            self.config.max_subtitles_file_size,
        )?;

        let _lease = self
            .leases
            .try_acquire(movie_id)
            .ok_or(PipelineError::AlreadyRunning(movie_id))?;

        let tmp_dir = self
            .config
            .scenes_tmp_path
            .join("movies")
            .join(movie_id.to_string());

        info!(%movie_id, movie_file = %movie.file_name, "starting scene extraction");

        match self
            .run_stages(movie_id, movie, subtitles, shift, &tmp_dir)
            .await
        {
            Ok(()) => {
                info!(%movie_id, "scene extraction finished");
                Ok(())
            }
            Err(cause) => {
                error!(%movie_id, error = %cause, "scene extraction failed, rolling back");
                self.rollback(movie_id, &tmp_dir).await;
                Err(PipelineError::Failed(Box::new(cause)))
            }
        }
    }

    async fn run_stages(
        &self,
        movie_id: MovieId,
        movie: FileUpload,
        subtitles: FileUpload,
        shift: SubtitleShift,
        tmp_dir: &Path,
    ) -> Result<(), StageError> {
        self.movies
            .set_status(movie_id, MovieStatus::Processing)
            .await?;

        let subtitle_bytes = read_to_end(subtitles.into_reader()).await?;
        let entries = parse_subtitles(&subtitle_bytes, &shift, self.config.max_subtitle_entries)?;

        let drafts = entries
            .into_iter()
            .map(|entry| {
                PhraseDraft::new(
                    movie_id,
                    entry.text,
                    entry.normalized_text,
                    entry.start,
                    entry.end,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let created = self.phrases.bulk_create(drafts).await?;
        info!(%movie_id, count = created.len(), "created inactive phrases");

        let extension = movie
            .extension()
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let source_path = tmp_dir.join(&movie.file_name);

        reset_dir(tmp_dir).await?;
        write_chunked(
            movie.into_reader(),
            &source_path,
            self.config.copy_chunk_bytes,
        )
        .await?;

        let cuts: Vec<SceneCut> = created
            .iter()
            .map(|phrase| SceneCut {
                phrase_id: phrase.id,
                start: phrase.start_in_movie,
                end: phrase.end_in_movie,
            })
            .collect();

        self.extractor
            .extract(&source_path, &cuts, tmp_dir)
            .await?;

        for phrase in &created {
            self.upload_and_activate(movie_id, phrase, tmp_dir, &extension)
                .await?;
        }

        tokio::fs::remove_dir_all(tmp_dir).await?;

        self.movies
            .set_status(movie_id, MovieStatus::Processed)
            .await?;

        Ok(())
    }

    /// Upload one phrase's clip, then attach the key and activate. The two
    /// writes are one logical unit; activation only happens after the clip
    /// is durably stored.
    async fn upload_and_activate(
        &self,
        movie_id: MovieId,
        phrase: &Phrase,
        tmp_dir: &Path,
        extension: &str,
    ) -> Result<(), StageError> {
        let file_name = scene_file_name(phrase.id, extension);
        let clip_path = tmp_dir.join(&file_name);

        let data = tokio::fs::read(&clip_path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StageError::MissingScene(clip_path.clone())
            } else {
                StageError::Io(e)
            }
        })?;

        let scene_key = format!(
            "{}/{}/{}",
            self.config.movies_storage_prefix, movie_id, file_name
        );

        self.scenes
            .put(&scene_key, data, video_content_type(extension))
            .await?;
        self.phrases.activate(phrase.id, &scene_key).await?;

        debug!(phrase_id = %phrase.id, %scene_key, "scene stored and phrase activated");
        Ok(())
    }

    /// Best-effort rollback: flip the movie to `error` and drop the temp
    /// directory. Phrases created this run are left in place, inactive.
    async fn rollback(&self, movie_id: MovieId, tmp_dir: &Path) {
        if let Err(e) = self.movies.set_status(movie_id, MovieStatus::Error).await {
            error!(%movie_id, error = %e, "failed to mark movie as errored");
        }

        if let Err(e) = tokio::fs::remove_dir_all(tmp_dir).await {
            if e.kind() != ErrorKind::NotFound {
                warn!(%movie_id, error = %e, "failed to remove temp directory");
            }
        }
    }
}

async fn read_to_end(mut reader: Box<dyn AsyncRead + Send + Unpin>) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).await?;
    Ok(buffer)
}

/// Recreate `path` as an empty directory.
async fn reset_dir(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    tokio::fs::create_dir_all(path).await
}

/// Stream a reader to disk with a bounded buffer.
async fn write_chunked(
    mut reader: Box<dyn AsyncRead + Send + Unpin>,
    path: &Path,
    chunk_bytes: usize,
) -> std::io::Result<()> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let mut buffer = vec![0u8; chunk_bytes.max(1)];

    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read]).await?;
    }

    writer.flush().await
}
