//! Phrase metadata export/import.
//!
//! Backup and migration path: a movie's phrases serialize to flat
//! [`PhraseTransfer`] records and bulk-insert back. Import never touches
//! media or storage; it is metadata only.

use phraseclip_models::{MovieId, PhraseTransfer};

use crate::catalog::PhraseCatalog;
use crate::error::CatalogResult;

/// Export every phrase of a movie as transfer records.
pub async fn export_phrases(
    catalog: &dyn PhraseCatalog,
    movie_id: MovieId,
) -> CatalogResult<Vec<PhraseTransfer>> {
    let phrases = catalog.get_by_movie(movie_id).await?;
    Ok(phrases.iter().map(PhraseTransfer::from).collect())
}

/// Bulk-insert transfer records for a movie.
///
/// Records without ids are created fresh. The extraction pipeline is
/// never involved.
pub async fn import_phrases(
    catalog: &dyn PhraseCatalog,
    movie_id: MovieId,
    records: Vec<PhraseTransfer>,
) -> CatalogResult<()> {
    catalog.import_transfers(movie_id, records).await
}
