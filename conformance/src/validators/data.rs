//! Reference root data validator.
//!
//! Every dataset under the data directory, plus any configured override,
//! must satisfy:
//! - Keys are canonical hyphenated roots (`ك-ت-ب`, not `كتب` or `ك - ت - ب`)
//! - Every root has at least one example and every example a gloss
//! - The radicals of the root occur, in order, in each example's consonantal
//!   skeleton (Hebrew final letters fold onto their medial forms)
//!
//! The script of a file under the data directory is taken from its name:
//! `arabic_*.json` or `hebrew_*.json`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use ttm_analyzers::{canonical_root, normalize_root, DataPaths, RootData, SemiticScript};
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "data/roots";

/// Validates every dataset in `data_dir` and every override in `overrides`.
///
/// # Errors
///
/// Returns an error if a dataset file exists but cannot be read.
pub fn validate(data_dir: &Path, overrides: &DataPaths) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !data_dir.is_dir() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("data directory {} not found", data_dir.display()),
        ));
        return Ok(report);
    }

    let mut files = 0usize;
    for entry in WalkDir::new(data_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "json"))
    {
        let path = entry.path();
        match script_from_name(path) {
            Some(script) => {
                report.extend(validate_file(path, script)?);
                files += 1;
            }
            None => report.push(TestResult::warn(
                VALIDATOR,
                format!("{}: no script in file name, skipped", path.display()),
            )),
        }
    }
    for (script, path) in overrides.iter() {
        report.extend(validate_file(path, script)?);
        files += 1;
    }

    if files == 0 {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("no root datasets found in {}", data_dir.display()),
        ));
    }
    Ok(report)
}

fn script_from_name(path: &Path) -> Option<SemiticScript> {
    let name = path.file_stem()?.to_str()?;
    if name.starts_with("arabic") {
        Some(SemiticScript::Arabic)
    } else if name.starts_with("hebrew") {
        Some(SemiticScript::Hebrew)
    } else {
        None
    }
}

/// Validates one dataset file read as `script`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn validate_file(path: &Path, script: SemiticScript) -> Result<ConformanceReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path.display();

    let mut report = ConformanceReport::new();
    let data = match RootData::from_json_str(&text) {
        Ok(data) => data,
        Err(err) => {
            report.push(TestResult::fail(VALIDATOR, format!("{name}: {err}")));
            return Ok(report);
        }
    };
    debug!(path = %name, roots = data.len(), "validating root data");
    check_data(&data, script, &name.to_string(), &mut report);
    Ok(report)
}

/// Runs every dataset check on already-parsed `data`.
pub fn check_data(
    data: &RootData,
    script: SemiticScript,
    name: &str,
    report: &mut ConformanceReport,
) {
    if data.is_empty() {
        report.push(TestResult::warn(VALIDATOR, format!("{name}: dataset is empty")));
        return;
    }

    let mut bad_keys = Vec::new();
    let mut bad_examples = Vec::new();
    let mut bad_radicals = Vec::new();

    for (root, entry) in data.iter() {
        let canonical = canonical_root(root);
        if canonical.is_empty() || canonical != root {
            bad_keys.push(format!("'{root}' should be written '{canonical}'"));
        }

        if entry.examples.is_empty() {
            bad_examples.push(format!("{root}: no examples"));
        }
        let radicals: Vec<char> = normalize_root(root)
            .chars()
            .map(|c| script.radical_form(c))
            .collect();
        for (form, gloss) in &entry.examples {
            if gloss.trim().is_empty() {
                bad_examples.push(format!("{root}: '{form}' has no gloss"));
            }
            let skeleton: Vec<char> = script
                .strip_marks(form)
                .chars()
                .map(|c| script.radical_form(c))
                .collect();
            if !is_subsequence(&radicals, &skeleton) {
                bad_radicals.push(format!("{root}: '{form}' does not contain the radicals"));
            }
        }
    }

    report.push(TestResult::from_failures(
        "data/roots/keys",
        format!("{name}: {} canonical root keys", data.len()),
        bad_keys,
    ));
    report.push(TestResult::from_failures(
        "data/roots/examples",
        format!("{name}: every root has glossed examples"),
        bad_examples,
    ));
    report.push(TestResult::from_failures(
        "data/roots/radicals",
        format!("{name}: every example carries its radicals"),
        bad_radicals,
    ));
}

fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}
