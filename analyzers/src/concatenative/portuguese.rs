//! Portuguese inflection: plural and diminutive endings, lexical stress.
//!
//! The Height configuration id classifies the stressed syllable:
//! 1 oxytone (aguda), 2 paroxytone (grave), 3 proparoxytone (esdrúxula).

use ttm_core::{Height, Morpheme, Width};

use super::{strip_suffix_nonempty, AffixRules};

/// Plural tag.
pub const PLURAL: &str = "PLURAL";
/// Diminutive tag.
pub const DIMINUTIVE: &str = "DIMINUTIVE";

/// Oxytone: stress on the last syllable.
pub const OXYTONE: u32 = 1;
/// Paroxytone: stress on the second-to-last syllable.
pub const PAROXYTONE: u32 = 2;
/// Proparoxytone: stress on the third-to-last syllable.
pub const PROPAROXYTONE: u32 = 3;

const PAROXYTONE_ENDINGS: [&str; 9] = ["a", "e", "o", "am", "em", "ns", "as", "es", "os"];

/// Portuguese affix rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Portuguese;

impl Portuguese {
    /// Undoes a plural ending; `None` when the form is not plural.
    fn singular(form: &str) -> Option<String> {
        if !form.ends_with('s') || form.ends_with("ss") {
            return None;
        }
        if let Some(stem) = strip_suffix_nonempty(form, "ns") {
            return Some(format!("{stem}m"));
        }
        if let Some(stem) = strip_suffix_nonempty(form, "es") {
            if stem.ends_with('r') || stem.ends_with('z') {
                return Some(stem.to_owned());
            }
        }
        if form.ends_with("is") {
            return None;
        }
        strip_suffix_nonempty(form, "s").map(str::to_owned)
    }

    /// Undoes a diminutive ending, restoring the gender vowel.
    fn base_of_diminutive(form: &str) -> Option<String> {
        if let Some(stem) = strip_suffix_nonempty(form, "inha") {
            return Some(format!("{stem}a"));
        }
        strip_suffix_nonempty(form, "inho").map(|stem| format!("{stem}o"))
    }
}

/// Stress class of `word`.
///
/// A graphic accent decides: acute or circumflex first, tilde otherwise,
/// counted in vowel nuclei from the end and capped at 3. Unaccented words
/// follow the ending rule: paroxytone for `a, e, o, am, em, ns, as, es, os`,
/// oxytone for the rest.
#[must_use]
pub fn detect_stress(word: &str) -> u32 {
    let lower = word.to_lowercase();

    let mut nuclei: Vec<(bool, bool)> = Vec::new();
    let mut in_nucleus = false;
    for c in lower.chars() {
        if !is_vowel(c) {
            in_nucleus = false;
            continue;
        }
        if !in_nucleus {
            nuclei.push((false, false));
            in_nucleus = true;
        }
        if let Some(last) = nuclei.last_mut() {
            last.0 |= matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'â' | 'ê' | 'ô');
            last.1 |= matches!(c, 'ã' | 'õ');
        }
    }

    let marked = nuclei
        .iter()
        .rposition(|n| n.0)
        .or_else(|| nuclei.iter().rposition(|n| n.1));
    if let Some(index) = marked {
        let from_end = nuclei.len() - index;
        return u32::try_from(from_end).map_or(PROPAROXYTONE, |n| n.min(PROPAROXYTONE));
    }

    if PAROXYTONE_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        PAROXYTONE
    } else {
        OXYTONE
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u'
            | 'á' | 'é' | 'í' | 'ó' | 'ú'
            | 'â' | 'ê' | 'ô'
            | 'ã' | 'õ'
            | 'à' | 'ü'
    )
}

impl AffixRules for Portuguese {
    fn language_code(&self) -> &'static str {
        "pt"
    }

    fn inflect(&self, stem: &str) -> Vec<String> {
        let mut forms = vec![stem.to_owned()];

        if stem.ends_with(['a', 'e', 'o', 'u', 'i']) {
            forms.push(format!("{stem}s"));
        } else if stem.ends_with(['r', 'z']) {
            forms.push(format!("{stem}es"));
        } else if let Some(base) = strip_suffix_nonempty(stem, "m") {
            forms.push(format!("{base}ns"));
        }

        let diminutive = if let Some(base) = strip_suffix_nonempty(stem, "a") {
            Some(format!("{base}inha"))
        } else {
            strip_suffix_nonempty(stem, "o").map(|base| format!("{base}inho"))
        };
        if let Some(diminutive) = diminutive {
            forms.push(format!("{diminutive}s"));
            forms.insert(forms.len() - 1, diminutive);
        }
        forms
    }

    fn parse(&self, form: &str) -> Morpheme {
        let plural = Self::singular(form);
        let singular = plural.as_deref().unwrap_or(form);
        let diminutive = Self::base_of_diminutive(singular);
        let root = diminutive.as_deref().unwrap_or(singular);

        let mut width = Width::new(root);
        if diminutive.is_some() {
            width.add_suffix(DIMINUTIVE);
        }
        if plural.is_some() {
            width.add_suffix(PLURAL);
        }

        Morpheme::new(form, root)
            .with_language("pt")
            .with_width(width)
            .with_height(Height::new(form, detect_stress(form)))
    }
}
