//! Per-movie extraction leases.
//!
//! The temp directory for a run is keyed by movie id, so two concurrent
//! runs for the same movie would corrupt each other's files. A lease is
//! held for the whole run and released on drop in every exit path.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use phraseclip_models::MovieId;

/// Registry of in-flight extraction runs.
#[derive(Debug, Clone, Default)]
pub struct MovieLeases {
    inner: Arc<Mutex<HashSet<MovieId>>>,
}

impl MovieLeases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the movie for one run. `None` while another run holds it.
    pub fn try_acquire(&self, movie_id: MovieId) -> Option<MovieLease> {
        let mut held = self.inner.lock().ok()?;

        if !held.insert(movie_id) {
            return None;
        }

        Some(MovieLease {
            movie_id,
            inner: Arc::clone(&self.inner),
        })
    }
}

/// Guard for one in-flight run; dropping it releases the movie.
#[derive(Debug)]
pub struct MovieLease {
    movie_id: MovieId,
    inner: Arc<Mutex<HashSet<MovieId>>>,
}

impl Drop for MovieLease {
    fn drop(&mut self) {
        if let Ok(mut held) = self.inner.lock() {
            held.remove(&self.movie_id);
        }
    }
}
