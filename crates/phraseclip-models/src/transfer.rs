//! Phrase transfer records for export/import.
//!
//! A movie's phrases can be serialized to a list of these records for
//! backup or migration and bulk-inserted back without re-running
//! extraction. `id` is absent for records that should be created fresh.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ids::PhraseId;
use crate::offset::offset_string;
use crate::phrase::Phrase;

/// Flat, storage-agnostic phrase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseTransfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PhraseId>,
    pub full_text: String,
    pub normalized_text: String,
    #[serde(with = "offset_string")]
    pub start_in_movie: Duration,
    #[serde(with = "offset_string")]
    pub end_in_movie: Duration,
    pub scene_key: Option<String>,
}

impl From<&Phrase> for PhraseTransfer {
    fn from(phrase: &Phrase) -> Self {
        Self {
            id: Some(phrase.id),
            full_text: phrase.full_text.clone(),
            normalized_text: phrase.normalized_text.clone(),
            start_in_movie: phrase.start_in_movie,
            end_in_movie: phrase.end_in_movie,
            scene_key: phrase.scene_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_travel_as_strings() {
        let record = PhraseTransfer {
            id: None,
            full_text: "Hello, there!".to_string(),
            normalized_text: " hello there . ".to_string(),
            start_in_movie: Duration::from_millis(5_500),
            end_in_movie: Duration::from_secs(10),
            scene_key: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["start_in_movie"], "00:00:05.500");
        assert_eq!(json["end_in_movie"], "00:00:10.000");
        assert!(json.get("id").is_none());

        let back: PhraseTransfer = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_import_tolerates_missing_id() {
        let raw = r#"{
            "full_text": "36?!!Last year I had 37",
            "normalized_text": " 36 . last year i had 37 ",
            "start_in_movie": "00:01:00.000",
            "end_in_movie": "00:01:04.250",
            "scene_key": null
        }"#;

        let record: PhraseTransfer = serde_json::from_str(raw).unwrap();
        assert!(record.id.is_none());
        assert_eq!(record.end_in_movie, Duration::from_millis(64_250));
    }
}
