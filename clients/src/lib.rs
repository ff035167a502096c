//! Shared setup for the TTM client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ttm_analyzers::{AnalyzerConfig, AnalyzerRegistry, LanguageAnalyzer};
use ttm_core::Morpheme;

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the configuration file when one is given, else the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Builds the analyzer for `code` from the default registry.
///
/// # Errors
///
/// Returns an error for an unknown or unsupported language code, or when
/// the analyzer's dataset cannot be loaded.
pub fn analyzer_for(code: &str, config: &AnalyzerConfig) -> Result<Box<dyn LanguageAnalyzer>> {
    let registry = AnalyzerRegistry::with_defaults(config);
    debug!(code, available = ?registry.codes().collect::<Vec<_>>(), "resolving analyzer");
    registry
        .get(code)
        .with_context(|| format!("No analyzer for --lang {code}"))
}

/// Parses each form, pairing it with the romanization at the same index.
///
/// With no romanizations every form goes through `parse_morpheme`.
///
/// # Errors
///
/// Returns an error when romanizations are given but their count differs
/// from the number of forms.
pub fn parse_forms(
    analyzer: &dyn LanguageAnalyzer,
    forms: &[String],
    romanizations: &[String],
) -> Result<Vec<Morpheme>> {
    if romanizations.is_empty() {
        return Ok(forms.iter().map(|f| analyzer.parse_morpheme(f)).collect());
    }
    if romanizations.len() != forms.len() {
        bail!(
            "--pinyin given {} time(s) for {} form(s); pass one per form",
            romanizations.len(),
            forms.len()
        );
    }
    Ok(forms
        .iter()
        .zip(romanizations)
        .map(|(form, romanization)| analyzer.parse_with_romanization(form, romanization))
        .collect())
}

/// Writes `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
