//! Mandarin: isolating and tonal.
//!
//! Width is left as the character itself. The tone of the first syllable of
//! the accompanying pinyin becomes the Height configuration id: 1–4 for the
//! marked tones and 5 (neutral) when the pinyin is unmarked or absent.

use ttm_core::{Height, Morpheme, RootSpace, Width};

use crate::analyzer::{collect_root_space, LanguageAnalyzer};

/// Configuration id of the neutral tone.
pub const NEUTRAL_TONE: u32 = 5;

/// Tone number carried by a pinyin vowel, if it bears a tone mark.
#[must_use]
pub fn tone_of(c: char) -> Option<u32> {
    match c {
        'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ǖ' => Some(1),
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'ǘ' => Some(2),
        'ǎ' | 'ě' | 'ǐ' | 'ǒ' | 'ǔ' | 'ǚ' => Some(3),
        'à' | 'è' | 'ì' | 'ò' | 'ù' | 'ǜ' => Some(4),
        _ => None,
    }
}

/// Tones marked in `pinyin`, in order; a non-empty unmarked string gives
/// the neutral tone once.
#[must_use]
pub fn extract_tones(pinyin: &str) -> Vec<u32> {
    let tones: Vec<u32> = pinyin.chars().filter_map(tone_of).collect();
    if tones.is_empty() && !pinyin.is_empty() {
        return vec![NEUTRAL_TONE];
    }
    tones
}

/// Mandarin analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MandarinAnalyzer;

impl LanguageAnalyzer for MandarinAnalyzer {
    fn get_language_code(&self) -> &'static str {
        "zh"
    }

    fn analyze_root(&self, root: &str) -> RootSpace {
        collect_root_space(root, "zh", [self.parse_morpheme(root)])
    }

    fn parse_morpheme(&self, form: &str) -> Morpheme {
        self.parse_with_romanization(form, "")
    }

    fn vocalize(&self, form: &str) -> Vec<String> {
        vec![form.to_owned()]
    }

    fn parse_with_romanization(&self, form: &str, pinyin: &str) -> Morpheme {
        let tone = extract_tones(pinyin)
            .first()
            .copied()
            .unwrap_or(NEUTRAL_TONE);
        Morpheme::new(form, form)
            .with_language("zh")
            .with_width(Width::new(form))
            .with_height(Height::new(pinyin, tone))
    }
}
