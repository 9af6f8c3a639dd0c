//! Original-text span extraction for search hits.

use regex::RegexBuilder;

/// Find the span of `full_text` that satisfies a normalized search query,
/// preserving the original casing and punctuation for display.
///
/// Single-word queries match the word anywhere, case-insensitively.
/// Multi-word queries require the words in order, bridged by short
/// non-greedy gaps, so a phrase that spans a line break or minor
/// punctuation in the original still comes back as one contiguous span.
///
/// Returns an empty string when nothing matches. This is a display
/// helper only; filtering happens on normalized text in the catalog.
pub fn matched_phrase(normalized_search_text: &str, full_text: &str) -> String {
    let words: Vec<&str> = normalized_search_text
        .split_whitespace()
        .filter(|word| *word != ".")
        .collect();

    if words.is_empty() {
        return String::new();
    }

    let pattern = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join(r"[\s\S]*?");

    let Ok(re) = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
    else {
        return String::new();
    };

    re.find(full_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
