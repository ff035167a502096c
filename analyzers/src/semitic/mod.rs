//! Root-and-pattern analysis for Arabic and Hebrew.
//!
//! A surface form splits into its consonantal skeleton and the marks
//! written around it. The skeleton identifies the root; the marks become
//! the Height of the morpheme. Derivations of a root come from a reference
//! dataset ([`RootData`]), one configuration id per example in file order.
//!
//! ```
//! use ttm_analyzers::{LanguageAnalyzer, SemiticAnalyzer};
//!
//! let arabic = SemiticAnalyzer::arabic().unwrap();
//! let space = arabic.analyze_root("كتب");
//!
//! assert_eq!(space.root(), "ك-ت-ب");
//! assert!(space.iter().all(|m| m.height().has_vocalization()));
//! ```

pub mod data;
pub mod marks;
pub mod patterns;

use ttm_core::{Depth, Height, Morpheme, RootSpace, SemanticLevel, Width};

use crate::analyzer::{collect_root_space, LanguageAnalyzer};
use crate::error::Result;

pub use data::{RootData, RootEntry};
pub use marks::MarkInfo;

/// Script conventions of a root-and-pattern language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemiticScript {
    /// Arabic script with tashkīl.
    Arabic,
    /// Hebrew script with niqqud and teʿamim.
    Hebrew,
}

impl SemiticScript {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Hebrew => "he",
        }
    }

    /// True when `c` is a vocalization or annotation mark of this script.
    #[must_use]
    pub fn is_mark(self, c: char) -> bool {
        match self {
            Self::Arabic => marks::is_arabic_mark(c),
            Self::Hebrew => marks::is_hebrew_mark(c),
        }
    }

    /// Name, placement and role of the mark `c`.
    #[must_use]
    pub fn describe(self, c: char) -> MarkInfo {
        match self {
            Self::Arabic => marks::describe_arabic(c),
            Self::Hebrew => marks::describe_hebrew(c),
        }
    }

    /// `text` with every mark removed.
    #[must_use]
    pub fn strip_marks(self, text: &str) -> String {
        text.chars().filter(|c| !self.is_mark(*c)).collect()
    }

    /// The marks of `text` in order of appearance.
    #[must_use]
    pub fn extract_marks(self, text: &str) -> Vec<char> {
        text.chars().filter(|c| self.is_mark(*c)).collect()
    }

    /// A letter in the form used to compare radicals.
    ///
    /// Hebrew final forms fold onto medial forms; Arabic letters are kept.
    #[must_use]
    pub fn radical_form(self, c: char) -> char {
        match self {
            Self::Arabic => c,
            Self::Hebrew => marks::fold_hebrew_final(c),
        }
    }

    /// Builds a Height from a vocalized form.
    ///
    /// Every mark goes to `vowels` and gets a named diacritic; Hebrew
    /// accents are also copied to `cantillation`.
    #[must_use]
    pub fn height_of(self, form: &str, configuration_id: u32) -> Height {
        let found = self.extract_marks(form);
        let mut height = Height::new(self.strip_marks(form), configuration_id)
            .with_vowels(found.iter().map(char::to_string).collect());
        for c in found {
            let info = self.describe(c);
            height.add_diacritic(c.to_string(), info.name, info.position, info.function);
            if self == Self::Hebrew && marks::is_hebrew_cantillation(c) {
                height.cantillation.push(c.to_string());
            }
        }
        height
    }
}

/// Root letters with separators removed: `ك-ت-ب` and `ك ت ب` give `كتب`.
#[must_use]
pub fn normalize_root(root: &str) -> String {
    root.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Canonical display form: one hyphen between letters, `كتب` gives `ك-ت-ب`.
#[must_use]
pub fn canonical_root(root: &str) -> String {
    let letters: Vec<String> = normalize_root(root).chars().map(String::from).collect();
    letters.join("-")
}

/// Root-and-pattern analyzer over a reference dataset.
#[derive(Debug, Clone)]
pub struct SemiticAnalyzer {
    script: SemiticScript,
    data: RootData,
}

impl SemiticAnalyzer {
    /// Creates an analyzer for `script` over `data`.
    #[must_use]
    pub fn new(script: SemiticScript, data: RootData) -> Self {
        Self { script, data }
    }

    /// Arabic analyzer over the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootData`](crate::Error::RootData) if the embedded
    /// dataset is malformed.
    pub fn arabic() -> Result<Self> {
        Ok(Self::new(SemiticScript::Arabic, RootData::builtin_arabic()?))
    }

    /// Hebrew analyzer over the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootData`](crate::Error::RootData) if the embedded
    /// dataset is malformed.
    pub fn hebrew() -> Result<Self> {
        Ok(Self::new(SemiticScript::Hebrew, RootData::builtin_hebrew()?))
    }

    /// The script this analyzer reads.
    #[must_use]
    pub fn script(&self) -> SemiticScript {
        self.script
    }

    /// The loaded dataset.
    #[must_use]
    pub fn data(&self) -> &RootData {
        &self.data
    }

    /// Dataset entry for `root`, written with or without separators.
    #[must_use]
    pub fn root_info(&self, root: &str) -> Option<&RootEntry> {
        let wanted = canonical_root(root);
        self.data
            .iter()
            .find(|(key, _)| canonical_root(key) == wanted)
            .map(|(_, entry)| entry)
    }

    fn radicals(&self, letters: &str) -> Vec<char> {
        letters.chars().map(|c| self.script.radical_form(c)).collect()
    }

    fn pattern_of(&self, form: &str, radicals: &[char]) -> String {
        match self.script {
            SemiticScript::Arabic => patterns::identify(form, radicals)
                .map(|wazn| wazn.name.to_owned())
                .unwrap_or_default(),
            SemiticScript::Hebrew => String::new(),
        }
    }
}

impl LanguageAnalyzer for SemiticAnalyzer {
    fn get_language_code(&self) -> &'static str {
        self.script.code()
    }

    fn analyze_root(&self, root: &str) -> RootSpace {
        let normalized = normalize_root(root);
        let display = canonical_root(root);
        let radicals = self.radicals(&normalized);
        let Some(entry) = self.root_info(&display) else {
            return RootSpace::new(display, self.script.code());
        };

        let derivations: Vec<String> = entry.examples.iter().map(|(f, _)| f.clone()).collect();
        let members = entry.examples.iter().zip(1u32..).map(|((form, gloss), config)| {
            let height = self.script.height_of(form, config);
            let degree = u32::from(height.base_form != normalized);

            let mut width = Width::new(display.as_str())
                .with_derivation_degree(degree)
                .with_pattern(self.pattern_of(form, &radicals));
            width.possible_derivations = derivations.clone();

            let mut depth = Depth::with_field(entry.semantic_field.as_str());
            depth.add_layer(SemanticLevel::Literal, gloss.as_str());

            Morpheme::new(form.as_str(), display.as_str())
                .with_language(self.script.code())
                .with_gloss(gloss.as_str())
                .with_width(width)
                .with_depth(depth)
                .with_height(height)
        });
        collect_root_space(&display, self.script.code(), members)
    }

    fn parse_morpheme(&self, form: &str) -> Morpheme {
        let marks = self.script.extract_marks(form).len();
        let mut height = self
            .script
            .height_of(form, u32::try_from(marks).unwrap_or(u32::MAX));
        height.alternative_vocalizations = self
            .vocalize(form)
            .into_iter()
            .filter(|v| v != form)
            .collect();

        let stripped = height.base_form.clone();
        let pattern = self.pattern_of(form, &self.radicals(&stripped));
        Morpheme::new(form, stripped.as_str())
            .with_language(self.script.code())
            .with_width(Width::new(stripped.as_str()).with_pattern(pattern))
            .with_height(height)
    }

    fn vocalize(&self, form: &str) -> Vec<String> {
        let stripped = self.script.strip_marks(form);
        self.data
            .iter()
            .flat_map(|(_, entry)| entry.examples.iter())
            .filter(|(example, _)| self.script.strip_marks(example) == stripped)
            .map(|(example, _)| example.clone())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use ttm_core::{MarkFunction, MarkPosition};

    fn ktb_only() -> SemiticAnalyzer {
        let data = RootData::from_json_str(
            r#"{ "ك-ت-ب": { "semantic_field": "writing",
                 "examples": { "كَتَبَ": "he wrote", "كِتَاب": "book" } } }"#,
        )
        .unwrap();
        SemiticAnalyzer::new(SemiticScript::Arabic, data)
    }

    #[test]
    fn root_forms_are_equivalent() {
        assert_eq!(canonical_root("كتب"), "ك-ت-ب");
        assert_eq!(canonical_root("ك-ت-ب"), "ك-ت-ب");
        assert_eq!(canonical_root(" ك - ت ب"), "ك-ت-ب");
        assert_eq!(normalize_root("ك-ت-ب"), "كتب");
    }

    #[test]
    fn analyze_root_from_dataset() {
        let space = ktb_only().analyze_root("ك-ت-ب");
        assert_eq!(space.len(), 2);
        assert_eq!(space.root(), "ك-ت-ب");

        let kataba = &space.morphemes()[0];
        assert_eq!(kataba.width().derivation_degree(), 0);
        assert_eq!(kataba.height().configuration_id, 1);
        assert_eq!(kataba.height().vowels.len(), 3);
        assert_eq!(kataba.depth().literal_meaning(), Some("he wrote"));
        assert_eq!(kataba.depth().semantic_field, "writing");
        assert_eq!(kataba.width().pattern, "فَعَلَ");

        let kitab = &space.morphemes()[1];
        assert_eq!(kitab.width().derivation_degree(), 1);
        assert_eq!(kitab.height().configuration_id, 2);
        assert!(!kitab.height().vowels.is_empty());
        assert_eq!(kitab.width().possible_derivations.len(), 2);
    }

    #[test]
    fn unhyphenated_root_finds_the_same_entry() {
        let space = ktb_only().analyze_root("كتب");
        assert_eq!(space.root(), "ك-ت-ب");
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn unknown_root_gives_empty_space() {
        let space = ktb_only().analyze_root("ز-ز-ز");
        assert!(space.is_empty());
        assert_eq!(space.language(), "ar");
    }

    #[test]
    fn parse_counts_marks() {
        let m = ktb_only().parse_morpheme("كَتَبَ");
        assert_eq!(m.root(), "كتب");
        assert_eq!(m.height().base_form, "كتب");
        assert_eq!(m.coordinates().z, 3);
        assert_eq!(m.height().diacritics[0].name, "fatha");
        assert_eq!(m.height().diacritics[0].position, MarkPosition::Above);
        assert_eq!(m.width().pattern, "فَعَلَ");
    }

    #[test]
    fn parse_unvocalized_lists_alternatives() {
        let m = ktb_only().parse_morpheme("كتب");
        assert_eq!(m.coordinates().z, 0);
        assert!(!m.height().has_vocalization());
        assert_eq!(m.height().alternative_vocalizations, ["كَتَبَ"]);
    }

    #[test]
    fn vocalize_matches_skeleton() {
        let analyzer = ktb_only();
        assert_eq!(analyzer.vocalize("كتب"), ["كَتَبَ"]);
        assert_eq!(analyzer.vocalize("كِتاب"), ["كِتَاب"]);
        assert!(analyzer.vocalize("قلم").is_empty());
    }

    #[test]
    fn hebrew_marks_are_named() {
        let hebrew = SemiticAnalyzer::hebrew().unwrap();
        let m = hebrew.parse_morpheme("שָׁמַר");
        assert_eq!(m.height().base_form, "שמר");
        let shin_dot = m
            .height()
            .diacritics
            .iter()
            .find(|d| d.name == "shin dot")
            .unwrap();
        assert_eq!(shin_dot.function, MarkFunction::Other);
    }

    #[test]
    fn hebrew_cantillation_is_recorded() {
        let hebrew = SemiticAnalyzer::new(SemiticScript::Hebrew, RootData::default());
        let m = hebrew.parse_morpheme("מֶ\u{0596}לֶךְ");
        assert_eq!(m.height().cantillation, ["\u{0596}"]);
        assert_eq!(m.height().base_form, "מלך");
        assert_eq!(m.height().vowels.len(), 4);
    }

    #[test]
    fn root_info_accepts_any_spelling() {
        let hebrew = SemiticAnalyzer::hebrew().unwrap();
        assert_eq!(hebrew.root_info("מלך").map(|e| e.semantic_field.as_str()), Some("kingship"));
        assert!(hebrew.root_info("א-ב-ג").is_none());
    }
}
