//! `ttm-graph`: Exports analyzed roots as graph tuples.
//!
//! Builds one morpheme space from every requested root and prints its
//! root nodes, morpheme nodes, semantic-field links and `DERIVED_FROM` /
//! `BELONGS_TO` edges as JSON. A Semitic language given without roots
//! exports every root of its dataset.
//!
//! **Usage:**
//! ```text
//! ttm-graph [--lang <code>]... [--config <ttm.toml>] [<root>...]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use ttm_analyzers::{AnalyzerConfig, SemiticScript};
use ttm_clients::{analyzer_for, init_tracing, load_config, print_json};
use ttm_core::{GraphExport, MorphemeSpace};

/// Export analyzed roots as graph nodes and edges.
#[derive(Parser)]
#[command(name = "ttm-graph", about = "Export analyzed roots as graph tuples")]
struct Args {
    /// ISO 639 language codes; repeat for several (default: ar and he).
    #[arg(long = "lang", default_values_t = [String::from("ar"), String::from("he")])]
    langs: Vec<String>,

    /// Analyzer configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roots to export; every dataset root when omitted.
    roots: Vec<String>,
}

fn dataset_roots(code: &str, config: &AnalyzerConfig) -> Result<Vec<String>> {
    let script = match code {
        "ar" => SemiticScript::Arabic,
        "he" => SemiticScript::Hebrew,
        _ => bail!("--lang {code} has no dataset; give the roots to export"),
    };
    let analyzer = config.semitic(script)?;
    Ok(analyzer
        .data()
        .iter()
        .map(|(root, _)| root.to_owned())
        .collect())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let mut space = MorphemeSpace::new();
    for code in &args.langs {
        let analyzer = analyzer_for(code, &config)?;
        let roots = if args.roots.is_empty() {
            dataset_roots(code, &config)?
        } else {
            args.roots.clone()
        };
        for root in &roots {
            let root_space = analyzer.analyze_root(root);
            info!(
                code = code.as_str(),
                root = root_space.root(),
                members = root_space.len(),
                "analyzed root"
            );
            space.extend(root_space.into_space().iter().cloned());
        }
    }

    let graph = GraphExport::from_space(&space);
    print_json(&graph.to_json())
}
