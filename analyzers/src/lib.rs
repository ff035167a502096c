//! Per-language morpheme analyzers.
//!
//! Each analyzer reads surface forms of one language and places them in the
//! three-dimensional model of `ttm-core`. Three families cover the
//! supported languages:
//!
//! - **Root-and-pattern** ([`SemiticAnalyzer`]): Arabic and Hebrew. The
//!   consonantal skeleton is the root and the vowel marks are the Height.
//! - **Concatenative** ([`Concatenative`] over [`AffixRules`]): English,
//!   Portuguese, Russian and Sanskrit. Affixes are stripped into Width.
//! - **Tonal** ([`MandarinAnalyzer`]): the pinyin tone is the Height.
//!
//! # Entry Point
//!
//! ```
//! use ttm_analyzers::{AnalyzerConfig, AnalyzerRegistry};
//!
//! let registry = AnalyzerRegistry::with_defaults(&AnalyzerConfig::default());
//! let hebrew = registry.get("he").unwrap();
//! let space = hebrew.analyze_root("מלך");
//!
//! assert_eq!(space.root(), "מ-ל-ך");
//! assert!(!space.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod analyzer;
pub mod concatenative;
pub mod config;
pub mod error;
pub mod language;
pub mod mandarin;
pub mod registry;
pub mod semitic;

pub use analyzer::LanguageAnalyzer;
pub use concatenative::{
    AffixRules, Concatenative, English, EnglishAnalyzer, Portuguese, PortugueseAnalyzer, Russian,
    RussianAnalyzer, Sanskrit, SanskritAnalyzer,
};
pub use config::{AnalyzerConfig, DataPaths};
pub use error::{Error, Result};
pub use language::{Language, LanguageFeatures, MorphologicalType, WritingDirection};
pub use mandarin::MandarinAnalyzer;
pub use registry::AnalyzerRegistry;
pub use semitic::{
    canonical_root, normalize_root, RootData, RootEntry, SemiticAnalyzer, SemiticScript,
};
