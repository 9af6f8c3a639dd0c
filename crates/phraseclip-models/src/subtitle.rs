//! Transient subtitle entries produced by the parser and consumed by the
//! pipeline when building phrase drafts.

use std::time::Duration;

use crate::error::ModelResult;
use crate::phrase::validate_interval;

/// One timed subtitle cue with its raw and normalized text.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    pub start: Duration,
    pub end: Duration,
    pub text: String,
    pub normalized_text: String,
}

impl SubtitleEntry {
    /// Build an entry, enforcing the same `start < end` invariant phrases
    /// carry.
    pub fn new(
        start: Duration,
        end: Duration,
        text: impl Into<String>,
        normalized_text: impl Into<String>,
    ) -> ModelResult<Self> {
        validate_interval(start, end)?;

        Ok(Self {
            start,
            end,
            text: text.into(),
            normalized_text: normalized_text.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn test_entry_requires_start_before_end() {
        let ok = SubtitleEntry::new(
            Duration::from_secs(1),
            Duration::from_secs(3),
            "text",
            " text ",
        );
        assert!(ok.is_ok());

        for (start, end) in [(3, 3), (4, 1)] {
            let result = SubtitleEntry::new(
                Duration::from_secs(start),
                Duration::from_secs(end),
                "text",
                " text ",
            );
            assert!(matches!(
                result,
                Err(ModelError::StartNotBeforeEnd { .. })
            ));
        }
    }
}
