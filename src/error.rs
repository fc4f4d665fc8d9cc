//! Error types.
//!
//! The rewrite itself never fails. These errors cover the surrounding
//! plumbing: loading configuration and checking the lexicon tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur outside the rewrite engine.
#[derive(Error, Debug)]
pub enum AolerError {
    /// Gate percentage outside 0..=100.
    #[error("Invalid gate percent: {0} (must be 0-100)")]
    InvalidGatePercent(u8),

    /// Config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A lexicon table breaks one of its invariants.
    #[error("Lexicon entry '{key}' is invalid: {reason}")]
    InvalidLexiconEntry {
        /// Offending key.
        key: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}
