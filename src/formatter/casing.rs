//! Replacement-string generation for matched spans.
//!
//! ASCII-only on purpose: the detection patterns only ever flag ASCII
//! letters, and non-Latin input is passed through untouched.

use super::exceptions::BOUNDARY_SYMBOLS;

/// Capitalize a matched span: lowercase the whole span, then uppercase its
/// first letter. A span usually begins with the boundary character that the
/// detection pattern captured; a leading space is skipped over and a leading
/// boundary symbol (comma, semicolon, hyphen) is kept in place, with the
/// letter right after it taking the capital.
pub fn capitalize_span(span: &str) -> String {
    let mut chars: Vec<char> = span.to_ascii_lowercase().chars().collect();
    let first_is_boundary = chars
        .first()
        .is_some_and(|c| *c == ' ' || BOUNDARY_SYMBOLS.contains(c));
    let letter_index = if first_is_boundary { 1 } else { 0 };
    if let Some(letter) = chars.get_mut(letter_index) {
        *letter = letter.to_ascii_uppercase();
    }
    chars.into_iter().collect()
}

/// Lowercase an entire span (stop words, apostrophe tails).
pub fn lowercase_span(span: &str) -> String {
    span.to_ascii_lowercase()
}

/// Uppercase an entire span (acronyms, state abbreviations).
pub fn uppercase_span(span: &str) -> String {
    span.to_ascii_uppercase()
}
