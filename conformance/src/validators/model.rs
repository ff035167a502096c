//! Model invariant validator.
//!
//! Runs every registered analyzer over sample roots and checks what it
//! produced against the invariants of the morpheme model:
//! - Coordinates equal the axis positions, with Y on the 1–4 scale
//! - Distance is zero to self and symmetric
//! - `from_dict` restores identity and coordinates, and re-serializes to
//!   the same wire form
//! - Every member of a RootSpace carries the space's root

use ttm_analyzers::{AnalyzerConfig, AnalyzerRegistry, LanguageAnalyzer, RootData};
use ttm_core::{Morpheme, RootSpace};

use crate::report::{ConformanceReport, TestResult};

const EPS: f64 = 1e-9;

/// Stems used for analyzers without a reference dataset.
pub const SAMPLE_STEMS: &[(&str, &[&str])] = &[
    ("en", &["play", "walk", "watch", "make"]),
    ("pt", &["casa", "gato", "flor", "homem"]),
    ("ru", &["читать", "делать", "chitat"]),
    ("sa", &["gam", "bhū", "paṭh"]),
    ("zh", &["好", "妈", "字"]),
];

/// Validates the model invariants for every analyzer `config` registers.
#[must_use]
pub fn validate(config: &AnalyzerConfig) -> ConformanceReport {
    let registry = AnalyzerRegistry::with_defaults(config);
    let mut report = ConformanceReport::new();

    for code in registry.codes() {
        let analyzer = match registry.get(code) {
            Ok(analyzer) => analyzer,
            Err(err) => {
                report.push(TestResult::fail("model/registry", format!("{code}: {err}")));
                continue;
            }
        };
        let roots = match sample_roots(code, config) {
            Ok(roots) => roots,
            Err(err) => {
                report.push(TestResult::fail("model/registry", format!("{code}: {err}")));
                continue;
            }
        };
        if roots.is_empty() {
            report.push(TestResult::warn(
                "model/registry",
                format!("{code}: no sample roots, skipped"),
            ));
            continue;
        }

        let spaces: Vec<RootSpace> = roots.iter().map(|r| analyzer.analyze_root(r)).collect();
        report.extend(check_spaces(code, analyzer.as_ref(), &spaces));
    }
    report
}

fn sample_roots(code: &str, config: &AnalyzerConfig) -> ttm_analyzers::Result<Vec<String>> {
    let from_data =
        |data: RootData| -> Vec<String> { data.iter().map(|(root, _)| root.to_owned()).collect() };
    Ok(match code {
        "ar" => from_data(config.arabic_data()?),
        "he" => from_data(config.hebrew_data()?),
        _ => SAMPLE_STEMS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, stems)| stems.iter().map(|s| (*s).to_owned()).collect())
            .unwrap_or_default(),
    })
}

/// Checks the spaces one analyzer produced.
pub fn check_spaces(
    code: &str,
    analyzer: &dyn LanguageAnalyzer,
    spaces: &[RootSpace],
) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let morphemes: Vec<&Morpheme> = spaces.iter().flat_map(|s| s.iter()).collect();

    let mut coordinates = Vec::new();
    let mut metric = Vec::new();
    let mut round_trip = Vec::new();
    let mut membership = Vec::new();

    for space in spaces {
        if space.is_empty() {
            membership.push(format!("{}: empty space", space.root()));
        }
        for m in space.iter() {
            if m.root() != space.root() {
                membership.push(format!(
                    "{}: root '{}' in space '{}'",
                    m.form(),
                    m.root(),
                    space.root()
                ));
            }
            if m.language() != analyzer.get_language_code() {
                membership.push(format!("{}: language '{}'", m.form(), m.language()));
            }
        }
    }

    for m in &morphemes {
        let c = m.coordinates();
        let expected = (m.width().position(), m.depth().position(), m.height().position());
        if (c.x, c.y, c.z) != expected || !(1..=4).contains(&c.y) {
            coordinates.push(format!("{}: {c}", m.form()));
        }

        if m.distance_to(m) != 0.0 {
            metric.push(format!("{}: non-zero self distance", m.form()));
        }
        for other in &morphemes {
            if (m.distance_to(other) - other.distance_to(m)).abs() > EPS {
                metric.push(format!("{} / {}: asymmetric", m.form(), other.form()));
            }
        }

        let wire = m.to_dict();
        match Morpheme::from_dict(&wire) {
            Ok(back) if same_identity(&back, m) && back.to_dict() == wire => {}
            Ok(_) => round_trip.push(format!("{}: changed by round trip", m.form())),
            Err(err) => round_trip.push(format!("{}: {err}", m.form())),
        }
    }

    let n = morphemes.len();
    report.push(TestResult::from_failures(
        "model/membership",
        format!("{code}: {} spaces, {n} members on their root", spaces.len()),
        membership,
    ));
    report.push(TestResult::from_failures(
        "model/coordinates",
        format!("{code}: {n} coordinate triples consistent"),
        coordinates,
    ));
    report.push(TestResult::from_failures(
        "model/metric",
        format!("{code}: distance symmetric over {n} members"),
        metric,
    ));
    report.push(TestResult::from_failures(
        "model/round-trip",
        format!("{code}: {n} morphemes survive to_dict/from_dict"),
        round_trip,
    ));
    report
}

fn same_identity(a: &Morpheme, b: &Morpheme) -> bool {
    a.form() == b.form()
        && a.root() == b.root()
        && a.language() == b.language()
        && a.gloss() == b.gloss()
        && a.coordinates() == b.coordinates()
}
