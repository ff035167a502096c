//! `ttm-analyze`: Analyzes surface forms and prints their wire form.
//!
//! Each form is parsed by the analyzer for `--lang` and printed as a JSON
//! array of morpheme objects (`to_dict`). With `--pinyin`, given once per
//! form and in the same order, Mandarin forms take their tone from the
//! romanization; other languages ignore it.
//!
//! **Usage:**
//! ```text
//! ttm-analyze --lang <code> [--config <ttm.toml>] [--pinyin <text>]... [--nearest <k>] <form>...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::{json, Value};
use ttm_clients::{analyzer_for, init_tracing, load_config, parse_forms, print_json};
use ttm_core::MorphemeSpace;

/// Analyze surface forms into three-dimensional morphemes.
#[derive(Parser)]
#[command(name = "ttm-analyze", about = "Analyze surface forms into morphemes")]
struct Args {
    /// ISO 639 language code (ar, he, en, pt, ru, sa, zh).
    #[arg(long)]
    lang: String,

    /// Analyzer configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Romanization of each form, in form order (Mandarin pinyin).
    #[arg(long)]
    pinyin: Vec<String>,

    /// Also list the k nearest other forms of the batch for each form.
    #[arg(long)]
    nearest: Option<usize>,

    /// Surface forms to analyze.
    #[arg(required = true)]
    forms: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let analyzer = analyzer_for(&args.lang, &config)?;

    let space: MorphemeSpace = parse_forms(analyzer.as_ref(), &args.forms, &args.pinyin)?
        .into_iter()
        .collect();

    let output: Vec<Value> = space
        .iter()
        .map(|m| {
            let mut wire = m.to_dict();
            if let (Some(k), Some(object)) = (args.nearest, wire.as_object_mut()) {
                let nearest: Vec<Value> = space
                    .find_nearest(m, k)
                    .into_iter()
                    .map(|(other, distance)| json!({ "form": other.form(), "distance": distance }))
                    .collect();
                object.insert("nearest".to_owned(), Value::Array(nearest));
            }
            wire
        })
        .collect();

    print_json(&Value::Array(output))
}
