//! In-memory catalog and scene store.
//!
//! Reference implementations of the persistence seams, used by the test
//! suite and handy for local development. Not meant for production.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use phraseclip_models::{
    MovieId, MovieStatus, Phrase, PhraseDraft, PhraseId, PhraseTransfer,
};
use phraseclip_storage::StorageResult;

use crate::catalog::{MovieCatalog, PhraseCatalog};
use crate::error::{CatalogError, CatalogResult};
use crate::store::SceneStore;

fn poisoned() -> CatalogError {
    CatalogError::Backend("lock poisoned".to_string())
}

/// Movies and phrases held in memory, insertion-ordered.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    movies: Mutex<HashMap<MovieId, MovieStatus>>,
    status_history: Mutex<Vec<(MovieId, MovieStatus)>>,
    phrases: Mutex<Vec<Phrase>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_movie(&self, movie_id: MovieId, status: MovieStatus) {
        self.movies
            .lock()
            .expect("movie lock")
            .insert(movie_id, status);
    }

    pub fn movie_status(&self, movie_id: MovieId) -> Option<MovieStatus> {
        self.movies.lock().expect("movie lock").get(&movie_id).copied()
    }

    /// Every status write, in order. Lets tests assert the state machine
    /// path, not just its end state.
    pub fn status_history(&self, movie_id: MovieId) -> Vec<MovieStatus> {
        self.status_history
            .lock()
            .expect("history lock")
            .iter()
            .filter(|(id, _)| *id == movie_id)
            .map(|(_, status)| *status)
            .collect()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.lock().expect("phrase lock").len()
    }
}

#[async_trait]
impl MovieCatalog for InMemoryCatalog {
    async fn set_status(&self, movie_id: MovieId, status: MovieStatus) -> CatalogResult<()> {
        self.movies
            .lock()
            .map_err(|_| poisoned())?
            .insert(movie_id, status);
        self.status_history
            .lock()
            .map_err(|_| poisoned())?
            .push((movie_id, status));
        Ok(())
    }
}

#[async_trait]
impl PhraseCatalog for InMemoryCatalog {
    async fn bulk_create(&self, drafts: Vec<PhraseDraft>) -> CatalogResult<Vec<Phrase>> {
        let created: Vec<Phrase> = drafts.into_iter().map(Phrase::from_draft).collect();

        self.phrases
            .lock()
            .map_err(|_| poisoned())?
            .extend(created.iter().cloned());

        Ok(created)
    }

    async fn activate(&self, phrase_id: PhraseId, scene_key: &str) -> CatalogResult<Phrase> {
        let mut phrases = self.phrases.lock().map_err(|_| poisoned())?;

        let phrase = phrases
            .iter_mut()
            .find(|phrase| phrase.id == phrase_id)
            .ok_or(CatalogError::PhraseNotFound(phrase_id))?;

        phrase.attach_scene(scene_key);
        Ok(phrase.clone())
    }

    async fn get_by_movie(&self, movie_id: MovieId) -> CatalogResult<Vec<Phrase>> {
        Ok(self
            .phrases
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|phrase| phrase.movie_id == movie_id)
            .cloned()
            .collect())
    }

    async fn import_transfers(
        &self,
        movie_id: MovieId,
        records: Vec<PhraseTransfer>,
    ) -> CatalogResult<()> {
        let mut phrases = self.phrases.lock().map_err(|_| poisoned())?;

        for record in records {
            let now = chrono::Utc::now();
            phrases.push(Phrase {
                id: record.id.unwrap_or_default(),
                movie_id,
                full_text: record.full_text,
                normalized_text: record.normalized_text,
                start_in_movie: record.start_in_movie,
                end_in_movie: record.end_in_movie,
                active: record.scene_key.is_some(),
                scene_key: record.scene_key,
                created_at: now,
                updated_at: now,
            });
        }

        Ok(())
    }
}

/// Scene clips held in memory, keyed like object storage.
#[derive(Debug, Default)]
pub struct InMemorySceneStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemorySceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().expect("store lock").contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().expect("store lock").keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().expect("store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SceneStore for InMemorySceneStore {
    async fn put(&self, key: &str, data: Vec<u8>, _content_type: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .map_err(|_| phraseclip_storage::StorageError::UploadFailed("lock poisoned".into()))?
            .insert(key.to_string(), data);
        Ok(())
    }
}
