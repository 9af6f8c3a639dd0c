//! Persistence collaborator contracts.
//!
//! Movies and phrases live in a relational catalog owned elsewhere; the
//! pipeline only needs these narrow seams. Real deployments implement
//! them over their database; tests and local development use
//! [`crate::memory::InMemoryCatalog`].

use async_trait::async_trait;

use phraseclip_models::{MovieId, MovieStatus, Phrase, PhraseDraft, PhraseId, PhraseTransfer};

use crate::error::CatalogResult;

/// Writer of the movie processing status.
///
/// `set_status` must be idempotent and touch nothing but the status; the
/// pipeline calls it at most three times per run (processing, then
/// processed or error).
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn set_status(&self, movie_id: MovieId, status: MovieStatus) -> CatalogResult<()>;
}

/// Phrase persistence operations used by the pipeline and by
/// export/import.
#[async_trait]
pub trait PhraseCatalog: Send + Sync {
    /// Create every draft or none; returned records keep the draft order.
    async fn bulk_create(&self, drafts: Vec<PhraseDraft>) -> CatalogResult<Vec<Phrase>>;

    /// Attach a scene key and flip the phrase active, as one write.
    async fn activate(&self, phrase_id: PhraseId, scene_key: &str) -> CatalogResult<Phrase>;

    async fn get_by_movie(&self, movie_id: MovieId) -> CatalogResult<Vec<Phrase>>;

    /// Bulk-insert transfer records. Pure metadata: never re-runs
    /// extraction, tolerates records without ids.
    async fn import_transfers(
        &self,
        movie_id: MovieId,
        records: Vec<PhraseTransfer>,
    ) -> CatalogResult<()>;
}
