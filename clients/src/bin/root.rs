//! `ttm-root`: Builds the RootSpace of a root and prints it.
//!
//! **Outputs** (JSON on stdout):
//! - `root`, `language`: the canonical root and its language
//! - `members`: every member in wire form
//! - `derivation_tree`: member forms grouped by derivation degree
//! - `statistics`: coordinate ranges, languages and roots
//! - `points`: `(x, y, z, form, root, gloss)` records, with `--points`
//!
//! **Usage:**
//! ```text
//! ttm-root --lang <code> [--config <ttm.toml>] [--radius <r>] [--points] <root>
//! ```

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
use serde_json::{json, Map, Value};
use ttm_clients::{analyzer_for, init_tracing, load_config, print_json};

/// Build and print the morpheme space of a root.
#[derive(Parser)]
#[command(name = "ttm-root", about = "Build the morpheme space of a root")]
struct Args {
    /// ISO 639 language code (ar, he, en, pt, ru, sa, zh).
    #[arg(long)]
    lang: String,

    /// Analyzer configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report the density around each member within this radius.
    #[arg(long)]
    radius: Option<f64>,

    /// Include plot points.
    #[arg(long)]
    points: bool,

    /// Root or stem (Semitic roots with or without hyphens).
    root: String,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let analyzer = analyzer_for(&args.lang, &config)?;
    let space = analyzer.analyze_root(&args.root);

    if space.is_empty() {
        eprintln!(
            "No derivations known for root '{}' ({})",
            space.root(),
            space.language()
        );
        process::exit(1);
    }

    let tree: Map<String, Value> = space
        .get_derivation_tree()
        .into_iter()
        .map(|(degree, members)| {
            let forms: Vec<&str> = members.iter().map(|m| m.form()).collect();
            (degree.to_string(), json!(forms))
        })
        .collect();

    let members: Vec<Value> = space
        .iter()
        .map(|m| {
            let mut wire = m.to_dict();
            if let (Some(radius), Some(object)) = (args.radius, wire.as_object_mut()) {
                object.insert(
                    "density".to_owned(),
                    json!(space.compute_density(m, radius)),
                );
            }
            wire
        })
        .collect();

    let statistics =
        serde_json::to_value(space.get_statistics()).context("Failed to serialize statistics")?;
    let mut output = json!({
        "root": space.root(),
        "language": space.language(),
        "members": members,
        "derivation_tree": tree,
        "statistics": statistics,
    });
    if args.points {
        let points = serde_json::to_value(space.points()).context("Failed to serialize points")?;
        if let Some(object) = output.as_object_mut() {
            object.insert("points".to_owned(), points);
        }
    }

    print_json(&output)
}
