//! Error type for analyzer construction and lookup.
//!
//! Analysis itself never fails: unknown roots and unrecognised forms degrade
//! to bare morphemes. Errors come from resolving a language code and from
//! loading reference data or configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `ttm-analyzers`.
#[derive(Debug, Error)]
pub enum Error {
    /// The code is not in the language catalogue.
    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),

    /// The language is catalogued but has no analyzer.
    #[error("no analyzer registered for language '{0}'")]
    UnsupportedLanguage(String),

    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A root dataset is not valid JSON of the expected shape.
    #[error("invalid root data in {}", path.display())]
    RootData {
        /// Dataset that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file is not valid TOML of the expected shape.
    #[error("invalid analyzer configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for `ttm-analyzers` operations.
pub type Result<T> = std::result::Result<T, Error>;
