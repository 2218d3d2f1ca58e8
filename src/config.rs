//! Configuration file support for kwfmt.
//!
//! This module loads and parses configuration files (`.kwfmt.toml`) that
//! control the formatter's behavior and tell the CLI which files to touch.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Options;

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".kwfmt.toml";

/// Configuration for the kwfmt formatter.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Keep U.S. state abbreviations uppercase (default: false).
    pub states: bool,

    /// Extra tokens to treat as always-uppercase acronyms (default: empty).
    pub extra_acronyms: Vec<String>,

    /// Extra words to treat as lowercase stop words (default: empty).
    pub extra_lowercase_words: Vec<String>,

    /// Glob patterns for files to format when none are given on the command
    /// line (default: empty).
    pub include: Vec<String>,

    /// Glob patterns for files to exclude (default: empty).
    pub exclude: Vec<String>,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.kwfmt.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Build the engine [`Options`] this configuration describes.
    pub fn options(&self) -> Options {
        Options {
            with_states: self.states,
            extra_acronyms: self.extra_acronyms.clone(),
            extra_lowercase_words: self.extra_lowercase_words.clone(),
        }
    }

    /// Collect files matching the include patterns, excluding those matching
    /// exclude patterns.
    ///
    /// The `base_dir` is used as the starting point for glob pattern matching.
    /// Returns an empty list if no include patterns are configured.
    pub fn collect_files(&self, base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        use glob::{MatchOptions, glob_with};

        if self.include.is_empty() {
            return Ok(Vec::new());
        }

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        let mut files = Vec::new();

        for pattern in &self.include {
            let full_pattern = base_dir.join(pattern);
            let pattern_str = full_pattern.to_string_lossy();
            let matches = glob_with(&pattern_str, options)
                .map_err(|e| ConfigError::Glob(pattern.clone(), e))?;

            for entry in matches {
                let path = entry.map_err(ConfigError::GlobIo)?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }

        files.sort();
        files.dedup();

        if !self.exclude.is_empty() {
            let exclude_patterns: Vec<glob::Pattern> = self
                .exclude
                .iter()
                .filter_map(|p| {
                    let full_pattern = base_dir.join(p);
                    glob::Pattern::new(&full_pattern.to_string_lossy()).ok()
                })
                .collect();

            files.retain(|path| {
                let path_str = path.to_string_lossy();
                !exclude_patterns
                    .iter()
                    .any(|pattern| pattern.matches(&path_str))
            });
        }

        Ok(files)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
    /// Error parsing a glob pattern.
    Glob(String, glob::PatternError),
    /// I/O error during glob iteration.
    GlobIo(glob::GlobError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
            ConfigError::Glob(pattern, err) => {
                write!(f, "invalid glob pattern '{}': {}", pattern, err)
            }
            ConfigError::GlobIo(err) => {
                write!(f, "error reading file: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
            ConfigError::Glob(_, err) => Some(err),
            ConfigError::GlobIo(err) => Some(err),
        }
    }
}
