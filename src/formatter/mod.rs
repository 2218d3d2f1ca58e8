//! The keyword capitalization engine.
//!
//! The engine works in two passes over a space-padded copy of the input.
//! Both violation scans run up front against the padded original; the
//! rewrites then run in scan order, each one a global substring replacement
//! against the string as mutated so far. Padding lets the boundary-based
//! patterns treat the first and last words like any other, and is trimmed
//! off before returning.

mod casing;
mod exceptions;
mod patterns;


pub use exceptions::{BOUNDARY_SYMBOLS, LOWERCASE_WORDS, UPPERCASE_ACRONYMS, US_STATES};
pub use patterns::{LOWERCASE_VIOLATION, MatchRecord, UPPERCASE_VIOLATION};

use crate::Options;
use exceptions::ExceptionSets;
use patterns::scan;

/// Format one keyword string. See [`crate::format`] for the public contract.
pub fn format_keywords(input: &str, options: &Options) -> String {
    if input.is_empty() {
        return String::new();
    }

    let exceptions = ExceptionSets::new(options);
    let padded = format!(" {} ", input);

    let lowercase_violations = scan(&LOWERCASE_VIOLATION, &padded);
    let uppercase_violations = scan(&UPPERCASE_VIOLATION, &padded);

    let mut text = padded;
    text = rewrite_pass(text, &lowercase_violations, &exceptions);
    text = rewrite_pass(text, &uppercase_violations, &exceptions);

    text.trim().to_string()
}

/// Apply one list of detected violations to the working string.
///
/// Classification precedence per record: stop word, then acronym/state, then
/// apostrophe tail, then default capitalization. A stop word with neither a
/// bounded standalone occurrence nor a hyphen-prefixed one is skipped
/// without a rewrite.
fn rewrite_pass(mut text: String, violations: &[MatchRecord], exceptions: &ExceptionSets) -> String {
    for record in violations {
        if exceptions.is_lowercase_word(&record.word) {
            if let Some(bounded) = patterns::find_bounded(&text, &record.word) {
                text = text.replace(&bounded, &casing::lowercase_span(&bounded));
            } else if patterns::has_hyphen_prefix(&text, &record.word) {
                // A hyphenated compound keeps its capital: "-and" -> "-And".
                let prefixed = format!("-{}", record.word);
                text = text.replace(&prefixed, &casing::capitalize_span(&prefixed));
            }
        } else if exceptions.is_acronym(&record.word) || exceptions.is_state(&record.word) {
            text = text.replace(&record.span, &casing::uppercase_span(&record.span));
        } else if record.span.starts_with('\'') {
            // Possessive and contraction tails stay lowercase.
            text = text.replace(&record.span, &casing::lowercase_span(&record.span));
        } else {
            text = text.replace(&record.span, &casing::capitalize_span(&record.span));
        }
    }
    text
}
