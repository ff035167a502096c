//! The capability every language analyzer provides.

use tracing::debug;
use ttm_core::{Morpheme, RootSpace};

/// Per-language morphological analysis.
///
/// Implementations never fail on input: an unknown root gives an empty or
/// single-member space and an unrecognised form comes back as its own
/// root with default dimensions.
pub trait LanguageAnalyzer: Send + Sync {
    /// ISO 639 code of the analyzed language.
    fn get_language_code(&self) -> &'static str;

    /// Builds the space of known or derivable forms of `root`.
    fn analyze_root(&self, root: &str) -> RootSpace;

    /// Analyzes a single surface form.
    fn parse_morpheme(&self, form: &str) -> Morpheme;

    /// Known surface variants of `form`, possibly empty and never exhaustive.
    fn vocalize(&self, form: &str) -> Vec<String>;

    /// Analyzes a form with an accompanying romanization.
    ///
    /// Only tonal analyzers read the romanization; the default ignores it.
    fn parse_with_romanization(&self, form: &str, _romanization: &str) -> Morpheme {
        self.parse_morpheme(form)
    }
}

/// Collects `members` into a fresh RootSpace.
///
/// Members are expected to carry `root`; any that do not are logged by the
/// space and skipped.
pub(crate) fn collect_root_space<I>(root: &str, language: &str, members: I) -> RootSpace
where
    I: IntoIterator<Item = Morpheme>,
{
    let mut space = RootSpace::new(root, language);
    for morpheme in members {
        if let Err(err) = space.add_morpheme(morpheme) {
            debug!(%err, "skipped generated form");
        }
    }
    space
}
