//! TTM conformance suite.
//!
//! Checks that the reference data shipped with the analyzers and the
//! morphemes the analyzers produce satisfy the invariants of the model.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Root datasets | Canonical hyphenated keys, glossed examples, radicals present |
//! | Coordinates | `(x, y, z)` equals the Width, Depth and Height positions |
//! | Metric | Zero self distance, symmetry |
//! | Wire form | `to_dict`/`from_dict` keeps identity and coordinates |
//! | RootSpace | Every member carries the space root and analyzer language |
//!
//! # Entry Point
//!
//! ```no_run
//! use ttm_analyzers::AnalyzerConfig;
//! use ttm_conformance::{run_all, SuiteInputs};
//! use std::path::PathBuf;
//!
//! let inputs = SuiteInputs {
//!     data_dir: PathBuf::from("analyzers/data/roots"),
//!     config: AnalyzerConfig::default(),
//! };
//! let report = run_all(&inputs).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use ttm_analyzers::AnalyzerConfig;

pub use report::{ConformanceReport, Severity, TestResult};

/// Inputs required by the conformance runner.
#[derive(Debug, Clone)]
pub struct SuiteInputs {
    /// Directory holding the `arabic_*.json` / `hebrew_*.json` datasets.
    pub data_dir: PathBuf,
    /// Analyzer configuration; its dataset overrides are validated too.
    pub config: AnalyzerConfig,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Reference root data (files in `data_dir`, then configured overrides)
/// 2. Model invariants for every analyzer the configuration registers
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(inputs: &SuiteInputs) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Reference data
    report.extend(validators::data::validate(
        &inputs.data_dir,
        &inputs.config.data,
    )?);

    // 2. Model invariants (operates on live analyzers)
    report.extend(validators::model::validate(&inputs.config));

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn shipped_data_and_analyzers_pass() {
        let inputs = SuiteInputs {
            data_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("../analyzers/data/roots"),
            config: AnalyzerConfig::default(),
        };
        let report = run_all(&inputs).unwrap();
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .collect();
        assert!(
            failures.is_empty(),
            "conformance failures: {:#?}",
            failures
        );
        assert_eq!(report.warning_count(), 0);
        assert!(report.pass_count() > 28);
    }
}
