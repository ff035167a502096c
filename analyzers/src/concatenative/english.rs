//! English inflection: `-s`/`-es`, `-ing`, `-ed`.

use ttm_core::{Height, Morpheme, Width};

use super::{strip_suffix_nonempty, AffixRules};

/// Progressive participle tag.
pub const PROG: &str = "PROG";
/// Past tense tag.
pub const PAST: &str = "PAST";
/// Plural or third-person singular tag.
pub const PLURAL_3SG: &str = "PLURAL/3SG";

const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

/// English affix rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl English {
    fn split(form: &str) -> Option<(&str, &'static str)> {
        if let Some(stem) = strip_suffix_nonempty(form, "ing") {
            return Some((stem, PROG));
        }
        if let Some(stem) = strip_suffix_nonempty(form, "ed") {
            return Some((stem, PAST));
        }
        if let Some(stem) = strip_suffix_nonempty(form, "es") {
            if SIBILANTS.iter().any(|s| stem.ends_with(s)) {
                return Some((stem, PLURAL_3SG));
            }
        }
        if form.ends_with("ss") {
            return None;
        }
        strip_suffix_nonempty(form, "s").map(|stem| (stem, PLURAL_3SG))
    }
}

impl AffixRules for English {
    fn language_code(&self) -> &'static str {
        "en"
    }

    fn inflect(&self, stem: &str) -> Vec<String> {
        let plural = if SIBILANTS.iter().any(|s| stem.ends_with(s)) {
            format!("{stem}es")
        } else {
            format!("{stem}s")
        };
        let progressive = match stem.strip_suffix('e') {
            Some(base) if !stem.ends_with("ee") => format!("{base}ing"),
            _ => format!("{stem}ing"),
        };
        let past = if stem.ends_with('e') {
            format!("{stem}d")
        } else {
            format!("{stem}ed")
        };
        vec![stem.to_owned(), plural, progressive, past]
    }

    fn parse(&self, form: &str) -> Morpheme {
        let (root, tag) = match Self::split(form) {
            Some((root, tag)) => (root, Some(tag)),
            None => (form, None),
        };
        let mut width = Width::new(root);
        if let Some(tag) = tag {
            width.add_suffix(tag);
        }
        Morpheme::new(form, root)
            .with_language("en")
            .with_width(width)
            .with_height(Height::new(form, 0))
    }
}
