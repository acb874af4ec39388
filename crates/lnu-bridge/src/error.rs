//! Error types for loading language data.
//!
//! Analysis itself never fails; these only surface while building a
//! [`LanguageData`](crate::LanguageData).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur while loading or assembling language data.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Two entries share a headword (compared case-insensitively).
    #[error("duplicate headword: {headword}")]
    DuplicateHeadword { headword: String },

    /// An entry was submitted with a blank headword.
    #[error("lexicon entry has an empty headword")]
    EmptyHeadword,

    /// A record in a data document could not be converted.
    #[error("invalid record #{index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// Data file extension is neither `.json` nor `.toml`.
    #[error("unsupported data format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
