//! Analyzer configuration.
//!
//! Configuration is a small TOML file. Every key is optional; an empty
//! file selects the built-in datasets.
//!
//! ```toml
//! [data]
//! arabic = "data/arabic_roots.json"
//! hebrew = "/srv/ttm/hebrew_roots.json"
//! ```
//!
//! Relative dataset paths read from a file are resolved against the
//! directory holding that file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::semitic::{RootData, SemiticAnalyzer, SemiticScript};

/// Dataset overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataPaths {
    /// Arabic root dataset replacing the built-in one.
    #[serde(default)]
    pub arabic: Option<PathBuf>,
    /// Hebrew root dataset replacing the built-in one.
    #[serde(default)]
    pub hebrew: Option<PathBuf>,
}

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Dataset overrides.
    #[serde(default)]
    pub data: DataPaths,
}

impl AnalyzerConfig {
    /// Parses configuration from TOML text. Paths are kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the text is not valid TOML or has
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.data.resolve_against(base);
        }
        debug!(path = %path.display(), "loaded analyzer configuration");
        Ok(config)
    }

    /// Arabic dataset: the configured file, else the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::RootData`] for a bad override.
    pub fn arabic_data(&self) -> Result<RootData> {
        match &self.data.arabic {
            Some(path) => RootData::from_path(path),
            None => RootData::builtin_arabic(),
        }
    }

    /// Hebrew dataset: the configured file, else the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::RootData`] for a bad override.
    pub fn hebrew_data(&self) -> Result<RootData> {
        match &self.data.hebrew {
            Some(path) => RootData::from_path(path),
            None => RootData::builtin_hebrew(),
        }
    }

    /// Semitic analyzer for `script` over the configured dataset.
    ///
    /// # Errors
    ///
    /// Propagates dataset loading errors.
    pub fn semitic(&self, script: SemiticScript) -> Result<SemiticAnalyzer> {
        let data = match script {
            SemiticScript::Arabic => self.arabic_data()?,
            SemiticScript::Hebrew => self.hebrew_data()?,
        };
        Ok(SemiticAnalyzer::new(script, data))
    }
}

impl DataPaths {
    fn resolve_against(&mut self, base: &Path) {
        for path in [&mut self.arabic, &mut self.hebrew].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Configured overrides, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (SemiticScript, &Path)> {
        [
            (SemiticScript::Arabic, self.arabic.as_deref()),
            (SemiticScript::Hebrew, self.hebrew.as_deref()),
        ]
        .into_iter()
        .filter_map(|(script, path)| path.map(|p| (script, p)))
    }
}
