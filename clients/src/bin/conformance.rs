//! `ttm-conformance`: Validates reference data and model invariants.
//!
//! Runs the complete conformance suite across:
//! - Root datasets (canonical keys, glossed examples, radicals present)
//! - Every registered analyzer (coordinates, metric, wire form, RootSpace membership)
//!
//! **Usage:**
//! ```text
//! ttm-conformance [--data-dir <path>] [--config <ttm.toml>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use ttm_clients::{init_tracing, load_config};
use ttm_conformance::{run_all, ConformanceReport, SuiteInputs};

/// Run the TTM conformance suite.
#[derive(Parser)]
#[command(
    name = "ttm-conformance",
    about = "Validate root datasets and morpheme model invariants"
)]
struct Args {
    /// Directory holding the root datasets.
    #[arg(long, default_value = "analyzers/data/roots")]
    data_dir: PathBuf,

    /// Analyzer configuration file; its dataset overrides are validated too.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn print_text(report: &ConformanceReport) {
    println!("TTM Conformance Report");
    println!("======================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {} — {}",
            result.severity.label(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        report.failure_count()
    );
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let inputs = SuiteInputs {
        data_dir: args.data_dir,
        config: load_config(args.config.as_deref())?,
    };
    let report = run_all(&inputs)?;

    if args.json {
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        print_text(&report);
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
