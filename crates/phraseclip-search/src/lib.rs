//! Phrase text normalization and search-hit extraction.
//!
//! This crate provides the two pure text functions shared by the
//! extraction pipeline (which derives searchable text at phrase creation)
//! and the catalog's search path (which normalizes queries for filtering
//! and extracts original-text spans for highlighting):
//! - [`normalize`] — canonical, lower-cased, punctuation-stripped,
//!   word-boundary-padded search form
//! - [`matched_phrase`] — the original-text span satisfying a normalized
//!   query, for display

pub mod matcher;
pub mod normalize;

pub use matcher::matched_phrase;
pub use normalize::normalize;
