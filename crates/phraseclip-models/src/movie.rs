//! Movie processing status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing status of a movie's scene extraction.
///
/// The pipeline is the only writer of this status while extraction runs:
/// `Pending -> Processing -> {Processed | Error}`. A failed run has no
/// resume path; it is retried from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovieStatus {
    /// No extraction has been attempted yet
    #[default]
    Pending,
    /// An extraction run is in flight
    Processing,
    /// The last run completed and all phrases carry scenes
    Processed,
    /// The last run failed and was rolled back
    Error,
}

impl MovieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Pending => "pending",
            MovieStatus::Processing => "processing",
            MovieStatus::Processed => "processed",
            MovieStatus::Error => "error",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&MovieStatus::Processed).unwrap();
        assert_eq!(json, "\"processed\"");
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(MovieStatus::default(), MovieStatus::Pending);
        assert_eq!(MovieStatus::default().as_str(), "pending");
    }
}
