//! Exception word lists and the per-call working copy built from them.
//!
//! The lists themselves are fixed process-wide constants. Anything a single
//! call needs to change about them (removing `in` under state-mode, merging
//! caller-supplied extras) happens on an [`ExceptionSets`] value owned by
//! that call, so concurrent calls with different options never observe each
//! other's adjustments.

use indexmap::IndexSet;

use crate::Options;

/// Words that must render lowercase when they appear standalone mid-phrase:
/// articles, prepositions, and conjunctions.
pub const LOWERCASE_WORDS: &[&str] = &[
    "and", "in", "as", "at", "near", "by", "for", "from", "into", "like", "of", "off", "onto",
    "on", "over", "to", "with", "an", "a",
];

/// Tokens that must always render fully uppercase, wherever they appear.
pub const UPPERCASE_ACRONYMS: &[&str] = &[
    "CPA", "MCA", "PC", "CPR", "DJ", "GPS", "TV", "IT", "3D", "RV", "ATV", "UITV", "HVAC", "AC",
];

/// The 50 two-letter U.S. state abbreviations. Only consulted when
/// state-mode is enabled for the call.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Punctuation that can sit directly in front of a word inside a matched
/// span. A replacement keeps such a leading symbol in place and capitalizes
/// the letter after it instead.
pub const BOUNDARY_SYMBOLS: &[char] = &[',', ';', '-'];

/// The exception sets as seen by one formatting call.
///
/// Built fresh from the constants and the call's [`Options`]; dropped when
/// the call returns.
#[derive(Debug)]
pub struct ExceptionSets {
    lowercase_words: IndexSet<String>,
    acronyms: IndexSet<String>,
    with_states: bool,
}

impl ExceptionSets {
    pub fn new(options: &Options) -> Self {
        let mut lowercase_words: IndexSet<String> =
            LOWERCASE_WORDS.iter().map(|w| w.to_string()).collect();
        for word in &options.extra_lowercase_words {
            lowercase_words.insert(word.to_ascii_lowercase());
        }
        // "IN" is Indiana's abbreviation; under state-mode the stop word
        // loses the tie.
        if options.with_states {
            lowercase_words.shift_remove("in");
        }

        let mut acronyms: IndexSet<String> =
            UPPERCASE_ACRONYMS.iter().map(|a| a.to_string()).collect();
        for acronym in &options.extra_acronyms {
            acronyms.insert(acronym.to_ascii_uppercase());
        }

        Self {
            lowercase_words,
            acronyms,
            with_states: options.with_states,
        }
    }

    /// Case-insensitive stop-word membership.
    pub fn is_lowercase_word(&self, word: &str) -> bool {
        self.lowercase_words.contains(&word.to_ascii_lowercase())
    }

    /// Case-insensitive acronym membership.
    pub fn is_acronym(&self, word: &str) -> bool {
        self.acronyms.contains(&word.to_ascii_uppercase())
    }

    /// Case-insensitive state-abbreviation membership; always false unless
    /// the call opted in to state-mode.
    pub fn is_state(&self, word: &str) -> bool {
        self.with_states && US_STATES.contains(&word.to_ascii_uppercase().as_str())
    }
}
