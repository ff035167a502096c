//! The three analytical axes of the morpheme model.
//!
//! - [`Width`] (X): combinatorial-derivational state. Root, affixes, pattern.
//! - [`Depth`] (Y): hermeneutic-semantic state. Stratified meanings.
//! - [`Height`] (Z): suprasegmental-graphical state. Vowels, diacritics, tone.
//!
//! Each axis is a plain value type with no references to the others. Its
//! position on the axis is always computed from its own fields and never
//! cached.
//!
//! # Examples
//!
//! ```
//! use ttm_core::dimensions::{Depth, Height, SemanticLevel, Width};
//!
//! let mut width = Width::new("walk");
//! width.add_suffix("ing");
//! assert_eq!(width.position(), 1);
//! assert_eq!(width.full_form(), "walking");
//!
//! let depth = Depth::default();
//! assert_eq!(depth.position(), 1);
//!
//! let height = Height::default();
//! assert_eq!(height.position(), 0);
//! assert_eq!(SemanticLevel::Mystical.value(), 4);
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// A stratum of meaning on the Depth axis.
///
/// The scale follows the four-level PaRDeS reading (literal, allusive,
/// homiletic, mystical), which also covers the apparent/hidden split of
/// the Ẓāhir/Bāṭin tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SemanticLevel {
    /// Peshat / Ẓāhir: the plain sense.
    Literal = 1,
    /// Remez: the allusive sense.
    Allusive = 2,
    /// Derash: the homiletic sense.
    Homiletic = 3,
    /// Sod / Bāṭin: the mystical sense.
    Mystical = 4,
}

impl SemanticLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [
        Self::Literal,
        Self::Allusive,
        Self::Homiletic,
        Self::Mystical,
    ];

    /// Numeric value of the level (1–4).
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Upper-case level name used in the wire form (e.g. `"LITERAL"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Literal => "LITERAL",
            Self::Allusive => "ALLUSIVE",
            Self::Homiletic => "HOMILETIC",
            Self::Mystical => "MYSTICAL",
        }
    }

    /// Looks up a level by its numeric value. Returns `None` outside 1–4.
    ///
    /// ```
    /// use ttm_core::dimensions::SemanticLevel;
    ///
    /// assert_eq!(SemanticLevel::from_value(2), Some(SemanticLevel::Allusive));
    /// assert_eq!(SemanticLevel::from_value(0), None);
    /// ```
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Literal),
            2 => Some(Self::Allusive),
            3 => Some(Self::Homiletic),
            4 => Some(Self::Mystical),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One layer of meaning attached to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticLayer {
    /// Level on the four-step scale.
    pub level: SemanticLevel,
    /// The meaning at this level.
    pub meaning: String,
    /// Interpretive tradition (e.g. `"rabbinic"`, `"sufi"`).
    pub tradition: String,
    /// Reference or source text.
    pub source: String,
}

impl SemanticLayer {
    /// Creates a layer with empty tradition and source.
    #[must_use]
    pub fn new(level: SemanticLevel, meaning: impl Into<String>) -> Self {
        Self {
            level,
            meaning: meaning.into(),
            tradition: String::new(),
            source: String::new(),
        }
    }

    /// Sets the interpretive tradition.
    #[must_use]
    pub fn with_tradition(mut self, tradition: impl Into<String>) -> Self {
        self.tradition = tradition.into();
        self
    }

    /// Sets the source reference.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Placement of a diacritic relative to its base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkPosition {
    /// Written above the letter (fatḥa, ḥolam, shadda).
    #[default]
    Above,
    /// Written below the letter (kasra, ḥiriq, segol).
    Below,
    /// Written inside or beside the letter (dagesh).
    Inline,
}

impl MarkPosition {
    /// Lower-case name used in the wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::Inline => "inline",
        }
    }
}

/// Linguistic role of a diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkFunction {
    /// Marks a vowel.
    #[default]
    Vowel,
    /// Doubles a consonant (shadda, dagesh ḥazaq).
    Gemination,
    /// Liturgical chant mark (taʿamei ha-miqra).
    Cantillation,
    /// Anything else (sukūn, shin/sin dots).
    Other,
}

/// A diacritical mark on the Height axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diacritic {
    /// The mark itself, usually one combining code point.
    pub symbol: String,
    /// Human-readable name (e.g. `"fatha"`, `"hiriq"`).
    pub name: String,
    /// Where the mark sits.
    pub position: MarkPosition,
    /// What the mark does.
    pub function: MarkFunction,
}

/// Combinatorial-derivational axis (X).
///
/// The position on X is the derivation degree. Appending an affix through
/// [`add_prefix`](Self::add_prefix) or [`add_suffix`](Self::add_suffix)
/// raises the degree by exactly one; nothing lowers it. The degree can be
/// set freely at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Width {
    /// Nuclear root or stem.
    pub root: String,
    /// Derivational pattern (wazn / mishqal), empty when unknown.
    pub pattern: String,
    /// Free-text phrasal context.
    pub syntagmatic_context: String,
    /// Known derivations from this root.
    pub possible_derivations: Vec<String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    derivation_degree: u32,
}

impl Width {
    /// Creates a Width at derivation degree 0 with no affixes.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Sets the derivational pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the derivation degree directly.
    #[must_use]
    pub fn with_derivation_degree(mut self, degree: u32) -> Self {
        self.derivation_degree = degree;
        self
    }

    /// Replaces the affix lists without touching the derivation degree.
    #[must_use]
    pub fn with_affixes(mut self, prefixes: Vec<String>, suffixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self.suffixes = suffixes;
        self
    }

    /// Sets the syntagmatic context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.syntagmatic_context = context.into();
        self
    }

    /// Prefixes in insertion order.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Suffixes in insertion order.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Number of affixation steps separating this form from its root.
    #[inline]
    #[must_use]
    pub fn derivation_degree(&self) -> u32 {
        self.derivation_degree
    }

    /// Position on the X axis.
    #[inline]
    #[must_use]
    pub fn position(&self) -> i64 {
        i64::from(self.derivation_degree)
    }

    /// `prefixes + root + suffixes`, each list concatenated in insertion order.
    #[must_use]
    pub fn full_form(&self) -> String {
        let mut form = self.prefixes.concat();
        form.push_str(&self.root);
        for suffix in &self.suffixes {
            form.push_str(suffix);
        }
        form
    }

    /// Appends a prefix and raises the derivation degree by one, saturating.
    pub fn add_prefix(&mut self, prefix: impl Into<String>) {
        self.prefixes.push(prefix.into());
        self.derivation_degree = self.derivation_degree.saturating_add(1);
    }

    /// Appends a suffix and raises the derivation degree by one, saturating.
    pub fn add_suffix(&mut self, suffix: impl Into<String>) {
        self.suffixes.push(suffix.into());
        self.derivation_degree = self.derivation_degree.saturating_add(1);
    }
}

/// Hermeneutic-semantic axis (Y).
///
/// Layers are kept in insertion order; levels may repeat or be missing.
/// The position on Y is `current_level`, which defaults to 1 (literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Depth {
    /// Semantic layers in insertion order.
    pub levels: Vec<SemanticLayer>,
    /// Level currently in focus (1–4).
    pub current_level: u8,
    /// Semantic field label (e.g. `"writing"`).
    pub semantic_field: String,
    /// Polysemy classification: `"regular"`, `"irregular"` or `"homonymy"`.
    pub polysemy_type: String,
}

impl Default for Depth {
    fn default() -> Self {
        Self {
            levels: Vec::new(),
            current_level: SemanticLevel::Literal.value(),
            semantic_field: String::new(),
            polysemy_type: "regular".to_owned(),
        }
    }
}

impl Depth {
    /// Creates an empty Depth within a semantic field.
    #[must_use]
    pub fn with_field(semantic_field: impl Into<String>) -> Self {
        Self {
            semantic_field: semantic_field.into(),
            ..Self::default()
        }
    }

    /// Position on the Y axis.
    #[inline]
    #[must_use]
    pub fn position(&self) -> i64 {
        i64::from(self.current_level)
    }

    /// Appends a layer and returns a reference to it.
    pub fn add_layer(&mut self, level: SemanticLevel, meaning: impl Into<String>) -> &SemanticLayer {
        self.push_layer(SemanticLayer::new(level, meaning))
    }

    /// Appends a fully built layer and returns a reference to it.
    pub fn push_layer(&mut self, layer: SemanticLayer) -> &SemanticLayer {
        self.levels.push(layer);
        &self.levels[self.levels.len() - 1]
    }

    /// First layer at `level`, if any.
    #[must_use]
    pub fn get_layer(&self, level: SemanticLevel) -> Option<&SemanticLayer> {
        self.levels.iter().find(|layer| layer.level == level)
    }

    /// Meaning of the first literal layer.
    #[must_use]
    pub fn literal_meaning(&self) -> Option<&str> {
        self.get_layer(SemanticLevel::Literal)
            .map(|layer| layer.meaning.as_str())
    }

    /// Meaning of the first mystical layer.
    #[must_use]
    pub fn mystical_meaning(&self) -> Option<&str> {
        self.get_layer(SemanticLevel::Mystical)
            .map(|layer| layer.meaning.as_str())
    }
}

/// Suprasegmental-graphical axis (Z).
///
/// The position on Z is the configuration id: which vocalic or tonal
/// realization of the base form this is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Height {
    /// Undecorated (consonantal) form.
    pub base_form: String,
    /// Diacritical marks in order of appearance.
    pub diacritics: Vec<Diacritic>,
    /// Vowel symbols in order of appearance.
    pub vowels: Vec<String>,
    /// Cantillation marks in order of appearance.
    pub cantillation: Vec<String>,
    /// Vocalic or tonal configuration id.
    pub configuration_id: u32,
    /// Other known vocalizations of the same base form.
    pub alternative_vocalizations: Vec<String>,
}

impl Height {
    /// Creates a Height for `base_form` at the given configuration.
    #[must_use]
    pub fn new(base_form: impl Into<String>, configuration_id: u32) -> Self {
        Self {
            base_form: base_form.into(),
            configuration_id,
            ..Self::default()
        }
    }

    /// Sets the vowel sequence.
    #[must_use]
    pub fn with_vowels(mut self, vowels: Vec<String>) -> Self {
        self.vowels = vowels;
        self
    }

    /// Position on the Z axis.
    #[inline]
    #[must_use]
    pub fn position(&self) -> i64 {
        i64::from(self.configuration_id)
    }

    /// True iff any diacritic or vowel is recorded.
    #[must_use]
    pub fn has_vocalization(&self) -> bool {
        !self.diacritics.is_empty() || !self.vowels.is_empty()
    }

    /// Vowels joined by `-`; empty when there are none.
    #[must_use]
    pub fn vowel_pattern(&self) -> String {
        self.vowels.join("-")
    }

    /// Appends a diacritic and returns a reference to it.
    pub fn add_diacritic(
        &mut self,
        symbol: impl Into<String>,
        name: impl Into<String>,
        position: MarkPosition,
        function: MarkFunction,
    ) -> &Diacritic {
        self.diacritics.push(Diacritic {
            symbol: symbol.into(),
            name: name.into(),
            position,
            function,
        });
        &self.diacritics[self.diacritics.len() - 1]
    }

    /// Diacritics placed at `position`, in order.
    #[must_use]
    pub fn get_diacritics_by_position(&self, position: MarkPosition) -> Vec<&Diacritic> {
        self.diacritics
            .iter()
            .filter(|d| d.position == position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_raise_degree_independently() {
        let mut width = Width::new("R");
        width.add_prefix("p");
        width.add_suffix("s");
        assert_eq!(width.derivation_degree(), 2);
        assert_eq!(width.full_form(), "pRs");
    }

    #[test]
    fn full_form_keeps_insertion_order() {
        let mut width = Width::new("stem");
        width.add_prefix("a");
        width.add_prefix("b");
        width.add_suffix("x");
        width.add_suffix("y");
        assert_eq!(width.full_form(), "abstemxy");
        assert_eq!(width.position(), 4);
    }

    #[test]
    fn degree_set_at_construction_is_kept() {
        let width = Width::new("ك-ت-ب")
            .with_pattern("فَاعِل")
            .with_derivation_degree(3)
            .with_affixes(vec!["m".into()], Vec::new());
        assert_eq!(width.derivation_degree(), 3);
        assert_eq!(width.full_form(), "mك-ت-ب");
    }

    #[test]
    fn degree_saturates_at_maximum() {
        let mut width = Width::new("r").with_derivation_degree(u32::MAX);
        width.add_prefix("p");
        width.add_suffix("s");
        assert_eq!(width.derivation_degree(), u32::MAX);
        assert_eq!(width.full_form(), "prs");
    }

    #[test]
    fn zero_values_per_axis() {
        assert_eq!(Width::default().position(), 0);
        assert_eq!(Depth::default().position(), 1);
        assert_eq!(Height::default().position(), 0);
        assert_eq!(Depth::default().polysemy_type, "regular");
    }

    #[test]
    fn get_layer_returns_first_match() {
        let mut depth = Depth::with_field("writing");
        depth.add_layer(SemanticLevel::Literal, "to write");
        depth.add_layer(SemanticLevel::Literal, "to inscribe");
        depth.add_layer(SemanticLevel::Mystical, "decree");
        assert_eq!(depth.literal_meaning(), Some("to write"));
        assert_eq!(depth.mystical_meaning(), Some("decree"));
        assert!(depth.get_layer(SemanticLevel::Homiletic).is_none());
        assert_eq!(depth.levels.len(), 3);
    }

    #[test]
    fn layer_builders() {
        let mut depth = Depth::default();
        let layer = depth.push_layer(
            SemanticLayer::new(SemanticLevel::Allusive, "scripture")
                .with_tradition("sufi")
                .with_source("Q 2:2"),
        );
        assert_eq!(layer.tradition, "sufi");
        assert_eq!(layer.source, "Q 2:2");
    }

    #[test]
    fn semantic_level_lookup() {
        for level in SemanticLevel::ALL {
            assert_eq!(SemanticLevel::from_value(i64::from(level.value())), Some(level));
        }
        assert_eq!(SemanticLevel::from_value(5), None);
        assert!(SemanticLevel::Literal < SemanticLevel::Mystical);
        assert_eq!(SemanticLevel::Homiletic.to_string(), "HOMILETIC");
    }

    #[test]
    fn vocalization_flags() {
        let mut height = Height::new("كتب", 1);
        assert!(!height.has_vocalization());
        assert_eq!(height.vowel_pattern(), "");

        height.add_diacritic("\u{064E}", "fatha", MarkPosition::Above, MarkFunction::Vowel);
        assert!(height.has_vocalization());

        let height = Height::new("كتب", 1).with_vowels(vec!["a".into(), "i".into()]);
        assert!(height.has_vocalization());
        assert_eq!(height.vowel_pattern(), "a-i");
    }

    #[test]
    fn diacritics_filtered_by_position() {
        let mut height = Height::default();
        height.add_diacritic("\u{064E}", "fatha", MarkPosition::Above, MarkFunction::Vowel);
        height.add_diacritic("\u{0650}", "kasra", MarkPosition::Below, MarkFunction::Vowel);
        height.add_diacritic("\u{0651}", "shadda", MarkPosition::Above, MarkFunction::Gemination);

        let above = height.get_diacritics_by_position(MarkPosition::Above);
        assert_eq!(above.len(), 2);
        assert_eq!(above[1].name, "shadda");
        assert!(height.get_diacritics_by_position(MarkPosition::Inline).is_empty());
    }
}
