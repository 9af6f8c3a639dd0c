//! Canonical search form for phrase text.

use std::sync::OnceLock;

use regex::Regex;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[#$%&()*+,/:;<=>@\[\]^\\_`{|}~"-]"#).expect("valid regex")
    })
}

fn terminator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?!.]+").expect("valid regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn terminator_padding() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\.\s*").expect("valid regex"))
}

/// Normalize raw phrase text into its canonical search form.
///
/// The result is lower-cased, stripped of punctuation, uses a single `.`
/// as sentence terminator, and keeps every word surrounded by spaces,
/// including one leading and one trailing space on the whole string. The
/// padding is what makes word-boundary search by plain substring
/// containment safe: searching `" hat "` cannot hit `" that "`.
///
/// Total, deterministic and idempotent: `normalize(normalize(x)) ==
/// normalize(x)` for any input.
pub fn normalize(text: &str) -> String {
    // Literal "\n" escape sequences become spaces; real newlines are
    // swallowed by the whitespace collapse below.
    let text = text.replace("\\n", " ");

    let text = punctuation().replace_all(&text, " ");
    let text = terminator_runs().replace_all(&text, ". ");
    let text = whitespace_runs().replace_all(&text, " ");
    let text = terminator_padding().replace_all(&text, " . ");

    let text = text.to_lowercase();

    format!(" {} ", text.trim())
}
