//! Language-code lookup of analyzers.
//!
//! The registry holds factories rather than built analyzers so that
//! datasets are only loaded for the languages actually requested.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::analyzer::LanguageAnalyzer;
use crate::concatenative::{EnglishAnalyzer, PortugueseAnalyzer, RussianAnalyzer, SanskritAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::mandarin::MandarinAnalyzer;
use crate::semitic::SemiticScript;

type Factory = Box<dyn Fn() -> Result<Box<dyn LanguageAnalyzer>> + Send + Sync>;

/// Analyzers keyed by ISO 639 code.
///
/// ```
/// use ttm_analyzers::{AnalyzerConfig, AnalyzerRegistry};
///
/// let registry = AnalyzerRegistry::with_defaults(&AnalyzerConfig::default());
/// let english = registry.get("en").unwrap();
/// assert_eq!(english.parse_morpheme("walked").root(), "walk");
/// assert!(registry.get("fr").is_err());
/// ```
#[derive(Default)]
pub struct AnalyzerRegistry {
    factories: BTreeMap<&'static str, Factory>,
}

impl AnalyzerRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in analyzer: `ar`, `he`, `en`, `pt`,
    /// `ru`, `sa` and `zh`.
    #[must_use]
    pub fn with_defaults(config: &AnalyzerConfig) -> Self {
        let mut registry = Self::new();
        for script in [SemiticScript::Arabic, SemiticScript::Hebrew] {
            let config = config.clone();
            registry.register(script.code(), move || {
                Ok(Box::new(config.semitic(script)?) as Box<dyn LanguageAnalyzer>)
            });
        }
        registry.register("en", || Ok(Box::new(EnglishAnalyzer::default())));
        registry.register("pt", || Ok(Box::new(PortugueseAnalyzer::default())));
        registry.register("ru", || Ok(Box::new(RussianAnalyzer::default())));
        registry.register("sa", || Ok(Box::new(SanskritAnalyzer::default())));
        registry.register("zh", || Ok(Box::new(MandarinAnalyzer)));
        registry
    }

    /// Registers a factory under `code`, replacing any previous one.
    pub fn register<F>(&mut self, code: &'static str, factory: F)
    where
        F: Fn() -> Result<Box<dyn LanguageAnalyzer>> + Send + Sync + 'static,
    {
        self.factories.insert(code, Box::new(factory));
    }

    /// Builds the analyzer registered for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] when `code` is not a catalogued
    /// language, [`Error::UnsupportedLanguage`] when it is catalogued but
    /// nothing is registered for it, and any dataset loading error raised
    /// while building.
    pub fn get(&self, code: &str) -> Result<Box<dyn LanguageAnalyzer>> {
        match self.factories.get(code) {
            Some(factory) => {
                debug!(code, "building analyzer");
                factory()
            }
            None if Language::from_code(code).is_some() => {
                Err(Error::UnsupportedLanguage(code.to_owned()))
            }
            None => Err(Error::UnknownLanguage(code.to_owned())),
        }
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// True when `code` has an analyzer.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.factories.contains_key(code)
    }
}

impl fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("codes", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
