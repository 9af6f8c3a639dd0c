//! `.srt` decoding, shifting and truncation.

use std::time::Duration;

use srtlib::{Subtitles, Timestamp};
use tracing::debug;

use phraseclip_models::SubtitleEntry;
use phraseclip_search::normalize;

use crate::error::SubtitleResult;

/// Default cap on entries taken from one subtitle file.
///
/// Extraction runs synchronously inside the triggering request, so the
/// number of scenes cut per run is bounded. Observed deployments keep this
/// in the low tens; override via the pipeline configuration.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Signed global shifts, in seconds, applied to every cue.
///
/// Positive values push a boundary later, negative values pull it
/// earlier. Start and end are shifted independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubtitleShift {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl SubtitleShift {
    pub fn new(start_secs: f64, end_secs: f64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// No shifting.
    pub fn none() -> Self {
        Self::default()
    }
}

fn timestamp_to_duration(timestamp: &Timestamp) -> Duration {
    let (hours, minutes, seconds, milliseconds) = timestamp.get();
    let millis = milliseconds as u64
        + 1000 * (seconds as u64 + 60 * (minutes as u64 + 60 * hours as u64));
    Duration::from_millis(millis)
}

// Subtraction saturates at zero; a cue whose interval collapses fails
// validation in SubtitleEntry::new.
fn apply_shift(offset: Duration, shift_secs: f64) -> Duration {
    if shift_secs > 0.0 {
        offset + Duration::from_secs_f64(shift_secs)
    } else if shift_secs < 0.0 {
        offset.saturating_sub(Duration::from_secs_f64(-shift_secs))
    } else {
        offset
    }
}

/// Decode `.srt` bytes into at most `max_entries` shifted, normalized
/// subtitle entries, in file order.
pub fn parse_subtitles(
    content: &[u8],
    shift: &SubtitleShift,
    max_entries: usize,
) -> SubtitleResult<Vec<SubtitleEntry>> {
    let text = std::str::from_utf8(content)?;
    let cues = Subtitles::parse_from_str(text.to_string())?.to_vec();

    if cues.len() > max_entries {
        debug!(
            total = cues.len(),
            max_entries, "truncating subtitle entries"
        );
    }

    cues.into_iter()
        .take(max_entries)
        .map(|cue| {
            let start = apply_shift(timestamp_to_duration(&cue.start_time), shift.start_secs);
            let end = apply_shift(timestamp_to_duration(&cue.end_time), shift.end_secs);
            let normalized = normalize(&cue.text);

            SubtitleEntry::new(start, end, cue.text, normalized).map_err(Into::into)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubtitleError;

    const THREE_CUES: &str = "\
1
00:00:30,000 --> 00:00:40,000
Hello, there!

2
00:00:45,500 --> 00:00:50,000
I'm afraid so, professor.

3
00:01:00,000 --> 00:01:04,250
36?!!Last year I had 37
";

    #[test]
    fn test_parse_without_shift() {
        let entries =
            parse_subtitles(THREE_CUES.as_bytes(), &SubtitleShift::none(), DEFAULT_MAX_ENTRIES)
                .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].start, Duration::from_secs(30));
        assert_eq!(entries[0].end, Duration::from_secs(40));
        assert_eq!(entries[0].text, "Hello, there!");
        assert_eq!(entries[0].normalized_text, " hello there . ");
        assert_eq!(entries[1].start, Duration::from_millis(45_500));
        assert_eq!(entries[2].end, Duration::from_millis(64_250));
    }

    #[test]
    fn test_negative_shift_moves_both_boundaries() {
        let entries = parse_subtitles(
            THREE_CUES.as_bytes(),
            &SubtitleShift::new(-10.0, -10.0),
            DEFAULT_MAX_ENTRIES,
        )
        .unwrap();

        assert_eq!(entries[0].start, Duration::from_secs(20));
        assert_eq!(entries[0].end, Duration::from_secs(30));
    }

    #[test]
    fn test_positive_start_shift_leaves_end_alone() {
        let entries = parse_subtitles(
            THREE_CUES.as_bytes(),
            &SubtitleShift::new(5.0, 0.0),
            DEFAULT_MAX_ENTRIES,
        )
        .unwrap();

        assert_eq!(entries[0].start, Duration::from_secs(35));
        assert_eq!(entries[0].end, Duration::from_secs(40));
    }

    #[test]
    fn test_entry_cap_keeps_head_of_file() {
        let entries =
            parse_subtitles(THREE_CUES.as_bytes(), &SubtitleShift::none(), 2).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "Hello, there!");
        assert_eq!(entries[1].text, "I'm afraid so, professor.");
    }

    #[test]
    fn test_collapsed_interval_fails_validation() {
        // Pulling starts forward past their ends leaves start >= end.
        let result = parse_subtitles(
            THREE_CUES.as_bytes(),
            &SubtitleShift::new(15.0, -60.0),
            DEFAULT_MAX_ENTRIES,
        );

        assert!(matches!(result, Err(SubtitleError::InvalidCue(_))));
    }

    #[test]
    fn test_malformed_content_is_a_parse_error() {
        let result = parse_subtitles(
            b"not a subtitle file at all",
            &SubtitleShift::none(),
            DEFAULT_MAX_ENTRIES,
        );

        assert!(matches!(result, Err(SubtitleError::Parse(_))));
    }

    #[test]
    fn test_non_utf8_content_is_an_encoding_error() {
        let result = parse_subtitles(&[0xff, 0xfe, 0x00], &SubtitleShift::none(), 10);
        assert!(matches!(result, Err(SubtitleError::Encoding(_))));
    }
}
