//! Concatenative (affixal) analysis.
//!
//! Every language in this family shares one shape: generate a few inflected
//! forms from a stem, then parse each form by stripping a closed set of
//! affixes. [`AffixRules`] holds the per-language rules and [`Concatenative`]
//! turns any rule set into a [`LanguageAnalyzer`].
//!
//! ```
//! use ttm_analyzers::{EnglishAnalyzer, LanguageAnalyzer};
//!
//! let english = EnglishAnalyzer::default();
//! let playing = english.parse_morpheme("playing");
//! assert_eq!(playing.root(), "play");
//! assert_eq!(playing.width().suffixes(), ["PROG"]);
//! ```

pub mod english;
pub mod portuguese;
pub mod russian;
pub mod sanskrit;

use tracing::debug;
use ttm_core::{Height, Morpheme, RootSpace, Width};

use crate::analyzer::{collect_root_space, LanguageAnalyzer};

pub use english::English;
pub use portuguese::Portuguese;
pub use russian::Russian;
pub use sanskrit::Sanskrit;

/// Affix rules of one concatenative language.
///
/// The provided methods are the no-decomposition base: a stem inflects to
/// itself only and every form is its own root.
pub trait AffixRules: Send + Sync {
    /// ISO 639 code of the language.
    fn language_code(&self) -> &'static str;

    /// Surface forms generated from `stem`, the stem itself first.
    fn inflect(&self, stem: &str) -> Vec<String> {
        vec![stem.to_owned()]
    }

    /// Analyzes one form by stripping known affixes.
    fn parse(&self, form: &str) -> Morpheme {
        bare_morpheme(form, self.language_code())
    }
}

/// A form analyzed as its own root, with default dimensions.
#[must_use]
pub fn bare_morpheme(form: &str, language: &str) -> Morpheme {
    Morpheme::new(form, form)
        .with_language(language)
        .with_width(Width::new(form))
        .with_height(Height::new(form, 0))
}

/// Moves a generated morpheme onto `stem` when its parse found another root.
///
/// Affix tags and the derivation degree are kept.
#[must_use]
pub fn reanchor(morpheme: Morpheme, stem: &str) -> Morpheme {
    if morpheme.root() == stem {
        return morpheme;
    }
    debug!(
        form = morpheme.form(),
        parsed_root = morpheme.root(),
        stem,
        "re-anchored generated form"
    );
    let mut width = morpheme.width().clone();
    width.root = stem.to_owned();
    morpheme.with_width(width).with_root(stem)
}

/// A [`LanguageAnalyzer`] driven by an [`AffixRules`] set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concatenative<R> {
    rules: R,
}

impl<R: AffixRules> Concatenative<R> {
    /// Wraps a rule set.
    #[must_use]
    pub const fn new(rules: R) -> Self {
        Self { rules }
    }

    /// The wrapped rule set.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }
}

impl<R: AffixRules> LanguageAnalyzer for Concatenative<R> {
    fn get_language_code(&self) -> &'static str {
        self.rules.language_code()
    }

    fn analyze_root(&self, stem: &str) -> RootSpace {
        let members = self
            .rules
            .inflect(stem)
            .into_iter()
            .map(|form| reanchor(self.rules.parse(&form), stem));
        collect_root_space(stem, self.rules.language_code(), members)
    }

    fn parse_morpheme(&self, form: &str) -> Morpheme {
        self.rules.parse(form)
    }

    fn vocalize(&self, form: &str) -> Vec<String> {
        vec![form.to_owned()]
    }
}

/// English analyzer.
pub type EnglishAnalyzer = Concatenative<English>;
/// Portuguese analyzer.
pub type PortugueseAnalyzer = Concatenative<Portuguese>;
/// Russian analyzer.
pub type RussianAnalyzer = Concatenative<Russian>;
/// Sanskrit analyzer.
pub type SanskritAnalyzer = Concatenative<Sanskrit>;

/// `form` without `suffix`, when something is left.
pub(crate) fn strip_suffix_nonempty<'a>(form: &'a str, suffix: &str) -> Option<&'a str> {
    form.strip_suffix(suffix).filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl AffixRules for Bare {
        fn language_code(&self) -> &'static str {
            "xx"
        }
    }

    #[test]
    fn base_rules_do_not_decompose() {
        let analyzer = Concatenative::new(Bare);
        let m = analyzer.parse_morpheme("walking");
        assert_eq!(m.root(), "walking");
        assert_eq!(m.coordinates().to_array(), [0, 1, 0]);

        let space = analyzer.analyze_root("walk");
        assert_eq!(space.len(), 1);
        assert_eq!(analyzer.vocalize("walk"), ["walk"]);
    }

    #[test]
    fn reanchor_keeps_affixes() {
        let mut width = Width::new("mak");
        width.add_suffix("PROG");
        let parsed = Morpheme::new("making", "mak").with_width(width);
        let anchored = reanchor(parsed, "make");
        assert_eq!(anchored.root(), "make");
        assert_eq!(anchored.width().root, "make");
        assert_eq!(anchored.width().suffixes(), ["PROG"]);
        assert_eq!(anchored.width().derivation_degree(), 1);
        assert_eq!(anchored.form(), "making");
    }

    #[test]
    fn strip_requires_a_remainder() {
        assert_eq!(strip_suffix_nonempty("playing", "ing"), Some("play"));
        assert_eq!(strip_suffix_nonempty("ing", "ing"), None);
        assert_eq!(strip_suffix_nonempty("play", "ing"), None);
    }
}
