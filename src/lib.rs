//! Kwfmt normalizes capitalization in short keyword/phrase strings, such as
//! advertising keyword lists: title case by default, with lowercase stop
//! words, fixed uppercase acronyms, and optionally U.S. state abbreviations
//! preserved uppercase.
//!
//! # Example
//!
//! ```
//! use kwfmt::{format, Options};
//!
//! let options = Options::default();
//! assert_eq!(format("best tv repair", &options), "Best TV Repair");
//! assert_eq!(format("Widgets And Gadgets", &options), "Widgets and Gadgets");
//! ```

pub mod config;
mod formatter;

pub use formatter::{
    BOUNDARY_SYMBOLS, LOWERCASE_VIOLATION, LOWERCASE_WORDS, UPPERCASE_ACRONYMS,
    UPPERCASE_VIOLATION, US_STATES,
};

/// Formatting options for one call.
///
/// The exception word lists are process-wide constants; these options only
/// adjust the working copy a single call builds from them, so two calls with
/// different options never interfere.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Keep U.S. state abbreviations uppercase. Enabling this also drops
    /// "in" from the stop-word set for the call, since "IN" is Indiana.
    pub with_states: bool,

    /// Extra tokens to treat as always-uppercase acronyms.
    pub extra_acronyms: Vec<String>,

    /// Extra words to treat as lowercase stop words.
    pub extra_lowercase_words: Vec<String>,
}

/// Formats a single keyword string.
///
/// The input is typically a comma/semicolon/hyphen-delimited list of keyword
/// phrases. The result is trimmed of leading and trailing whitespace; an
/// empty input comes back empty. The function is total: no input makes it
/// fail, and text the detection patterns cannot flag (non-ASCII scripts,
/// already-correct casing) passes through unchanged.
pub fn format(input: &str, options: &Options) -> String {
    formatter::format_keywords(input, options)
}

/// Formats every line of `input` as an independent keyword string.
///
/// Line structure is preserved, including a trailing newline if the input
/// had one. This is the operation the CLI applies to files.
pub fn format_lines(input: &str, options: &Options) -> String {
    let mut output = input
        .lines()
        .map(|line| format(line, options))
        .collect::<Vec<_>>()
        .join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_input() {
        assert_eq!(format("", &Options::default()), "");
    }

    #[test]
    fn test_format_trims_whitespace() {
        assert_eq!(format("  plumbing  ", &Options::default()), "Plumbing");
    }

    #[test]
    fn test_format_lines_preserves_structure() {
        let input = "best tv repair\njobs in ohio\n";
        let result = format_lines(input, &Options::default());
        assert_eq!(result, "Best TV Repair\nJobs in Ohio\n");
    }

    #[test]
    fn test_format_lines_no_trailing_newline() {
        let result = format_lines("best tv repair", &Options::default());
        assert_eq!(result, "Best TV Repair");
    }
}
