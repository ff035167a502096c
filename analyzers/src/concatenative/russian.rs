//! Russian aspect (вид) and stress (ударение).
//!
//! A perfectivizing prefix marks the verb as perfective; its absence as
//! imperfective. The aspect is recorded as a literal semantic layer. Stress
//! is read from a combining acute accent.

use ttm_core::{Depth, Height, Morpheme, SemanticLevel, Width};

use super::AffixRules;

/// Perfective aspect label.
pub const PERFECTIVE: &str = "PERFECTIVE";
/// Imperfective aspect label.
pub const IMPERFECTIVE: &str = "IMPERFECTIVE";

/// Combining acute accent used to mark stress.
pub const STRESS_MARK: char = '\u{0301}';

/// Perfectivizing prefixes, Latin transliteration and Cyrillic, longest first.
const PREFIXES: [&str; 10] = ["pro", "про", "po", "по", "za", "за", "na", "на", "s", "с"];

/// Russian affix rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Russian;

impl Russian {
    fn split_prefix(form: &str) -> Option<(&'static str, &str)> {
        PREFIXES.iter().find_map(|prefix| {
            form.strip_prefix(prefix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| (*prefix, stem))
        })
    }
}

/// Character index of the stress mark, 0 when unmarked.
#[must_use]
pub fn stress_position(form: &str) -> u32 {
    form.chars()
        .position(|c| c == STRESS_MARK)
        .and_then(|i| u32::try_from(i).ok())
        .unwrap_or(0)
}

fn is_cyrillic(stem: &str) -> bool {
    stem.chars()
        .next()
        .is_some_and(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

impl AffixRules for Russian {
    fn language_code(&self) -> &'static str {
        "ru"
    }

    fn inflect(&self, stem: &str) -> Vec<String> {
        let mut forms = vec![stem.to_owned()];
        if !stem.starts_with("pro") && !stem.starts_with("про") {
            let prefix = if is_cyrillic(stem) { "про" } else { "pro" };
            forms.push(format!("{prefix}{stem}"));
        }
        forms
    }

    fn parse(&self, form: &str) -> Morpheme {
        let (width, aspect) = match Self::split_prefix(form) {
            Some((prefix, stem)) => {
                let mut width = Width::new(stem);
                width.add_prefix(prefix);
                (width, PERFECTIVE)
            }
            None => (Width::new(form), IMPERFECTIVE),
        };

        let mut depth = Depth::default();
        depth.add_layer(SemanticLevel::Literal, format!("Aspect: {aspect}"));

        Morpheme::new(form, width.root.as_str())
            .with_language("ru")
            .with_width(width)
            .with_depth(depth)
            .with_height(Height::new(form, stress_position(form)))
    }
}
