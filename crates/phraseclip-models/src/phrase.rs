//! Phrase records and creation drafts.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::ids::{MovieId, PhraseId};
use crate::offset::offset_string;

pub(crate) fn validate_interval(start: Duration, end: Duration) -> ModelResult<()> {
    if start >= end {
        return Err(ModelError::StartNotBeforeEnd { start, end });
    }
    Ok(())
}

/// A text span tied to a time interval within a movie, optionally backed by
/// a stored scene clip.
///
/// `normalized_text` is derived once at creation and never rewritten.
/// `scene_key` stays `None` and `active` stays `false` until the pipeline
/// has durably stored the clip; the two are then flipped in a single
/// catalog write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: PhraseId,
    pub movie_id: MovieId,
    pub full_text: String,
    pub normalized_text: String,
    #[serde(with = "offset_string")]
    pub start_in_movie: Duration,
    #[serde(with = "offset_string")]
    pub end_in_movie: Duration,
    /// Object-storage key of the scene clip, once produced
    pub scene_key: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Phrase {
    /// Materialize a draft into a stored record with a fresh identifier.
    pub fn from_draft(draft: PhraseDraft) -> Self {
        let now = Utc::now();
        Self {
            id: PhraseId::new(),
            movie_id: draft.movie_id,
            full_text: draft.full_text,
            normalized_text: draft.normalized_text,
            start_in_movie: draft.start_in_movie,
            end_in_movie: draft.end_in_movie,
            scene_key: None,
            active: draft.active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_in_movie - self.start_in_movie
    }

    /// Attach the stored clip and activate the phrase. One logical write.
    pub fn attach_scene(&mut self, scene_key: impl Into<String>) {
        self.scene_key = Some(scene_key.into());
        self.active = true;
        self.updated_at = Utc::now();
    }
}

/// Validated request to create a phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseDraft {
    pub movie_id: MovieId,
    pub full_text: String,
    pub normalized_text: String,
    pub start_in_movie: Duration,
    pub end_in_movie: Duration,
    pub active: bool,
}

impl PhraseDraft {
    /// Build a draft, enforcing `start < end` before anything is persisted.
    ///
    /// Drafts start inactive; the pipeline activates a phrase only after
    /// its clip exists in storage.
    pub fn new(
        movie_id: MovieId,
        full_text: impl Into<String>,
        normalized_text: impl Into<String>,
        start_in_movie: Duration,
        end_in_movie: Duration,
    ) -> ModelResult<Self> {
        validate_interval(start_in_movie, end_in_movie)?;

        Ok(Self {
            movie_id,
            full_text: full_text.into(),
            normalized_text: normalized_text.into(),
            start_in_movie,
            end_in_movie,
            active: false,
        })
    }
}
