//! Sanskrit verbal forms from a fixed paradigm table (IAST).
//!
//! Vedic pitch accent written as an acute vowel marks the udātta, which is
//! configuration 1 on the Height axis.

use ttm_core::{Height, Morpheme, Width};

use super::AffixRules;

/// Udātta (raised pitch) configuration id.
pub const UDATTA: u32 = 1;

/// Paradigm rows: root (dhātu) and `(form, tag)` pairs.
pub const PARADIGMS: &[(&str, &[(&str, &str)])] = &[
    (
        "gam",
        &[
            ("gacchati", "PRESENT_3SG"),
            ("agaccham", "IMPERFECT_1SG"),
            ("gamiṣyāmi", "FUTURE_1SG"),
        ],
    ),
    (
        "bhū",
        &[
            ("bhavati", "PRESENT_3SG"),
            ("abhavam", "IMPERFECT_1SG"),
            ("bhaviṣyāmi", "FUTURE_1SG"),
        ],
    ),
    (
        "paṭh",
        &[
            ("paṭhati", "PRESENT_3SG"),
            ("apaṭham", "IMPERFECT_1SG"),
            ("paṭhiṣyāmi", "FUTURE_1SG"),
        ],
    ),
];

/// Sanskrit affix rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanskrit;

/// `form` with acute pitch marks removed.
fn unaccented(form: &str) -> String {
    form.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .filter(|c| *c != '\u{0301}')
        .collect()
}

fn has_udatta(form: &str) -> bool {
    form.chars()
        .any(|c| matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú' | '\u{0301}'))
}

fn lookup(form: &str) -> Option<(&'static str, &'static str)> {
    PARADIGMS.iter().find_map(|(root, forms)| {
        forms
            .iter()
            .find(|(f, _)| *f == form)
            .map(|(_, tag)| (*root, *tag))
    })
}

impl AffixRules for Sanskrit {
    fn language_code(&self) -> &'static str {
        "sa"
    }

    fn inflect(&self, stem: &str) -> Vec<String> {
        let mut forms = vec![stem.to_owned()];
        if let Some((_, paradigm)) = PARADIGMS.iter().find(|(root, _)| *root == stem) {
            forms.extend(paradigm.iter().map(|(form, _)| (*form).to_owned()));
        }
        forms
    }

    fn parse(&self, form: &str) -> Morpheme {
        let plain = unaccented(form);
        let (root, width) = match lookup(&plain) {
            Some((root, tag)) => {
                let mut width = Width::new(root);
                width.add_suffix(tag);
                (root, width)
            }
            None => (form, Width::new(form)),
        };
        let configuration = if has_udatta(form) { UDATTA } else { 0 };

        Morpheme::new(form, root)
            .with_language("sa")
            .with_width(width)
            .with_height(Height::new(form, configuration))
    }
}
