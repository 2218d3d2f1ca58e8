//! The violation-detection patterns and per-word occurrence lookups.
//!
//! Both detection patterns run over the padded original string, never over a
//! partially rewritten one. Group 1 is the boundary character, group 2 the
//! word token; the full match (boundary + word) is what later gets replaced.
//! The word token is non-greedy and extends to the next word boundary, so it
//! covers the maximal run of word characters starting at the first letter
//! ("don't" yields "don", "tv4k" yields "tv4k").

use std::sync::LazyLock;

use regex::Regex;

/// A word that starts lowercase right after a space, comma, semicolon, or
/// hyphen. These are candidates for capitalization (or for stop-word and
/// acronym handling).
pub static LOWERCASE_VIOLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([ ,;-])\b([a-z].*?)\b").unwrap());

/// A word that starts uppercase right after a space, apostrophe, comma, or
/// semicolon. These are candidates for lowercasing (stop words, apostrophe
/// tails) or re-capitalization.
///
/// A hyphen is deliberately absent from the boundary class: an uppercase
/// word inside a hyphenated compound ("Search-And-Rescue") is legitimate and
/// must not be flagged.
pub static UPPERCASE_VIOLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([ ',;])\b([A-Z].*?)\b").unwrap());

/// One detected violation: the full matched span (boundary char + word) used
/// as the replacement search key, and the bare word used for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub span: String,
    pub word: String,
}

/// Collect all matches of a violation pattern, left to right.
pub fn scan(pattern: &Regex, text: &str) -> Vec<MatchRecord> {
    pattern
        .captures_iter(text)
        .map(|captures| MatchRecord {
            span: captures[0].to_string(),
            word: captures[2].to_string(),
        })
        .collect()
}

/// Find a standalone occurrence of `word` (exact casing) bounded by a
/// space, comma, or semicolon on both sides. Returns the full bounded span,
/// separators included, so the caller can lowercase it wholesale.
pub fn find_bounded(text: &str, word: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"([ ,;])\b{}\b([ ,;])", regex::escape(word))).ok()?;
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Whether `word` (exact casing) occurs with a hyphen directly in front and
/// a space, comma, or semicolon directly after.
pub fn has_hyphen_prefix(text: &str, word: &str) -> bool {
    Regex::new(&format!(r"-\b{}\b([ ,;])", regex::escape(word)))
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}
