//! The morpheme: a point in three-dimensional morphemic space.
//!
//! A [`Morpheme`] owns one [`Width`], one [`Depth`] and one [`Height`].
//! Its [`Coordinates`] are read off those three axes on every call and are
//! never stored. The `translate_along_*` operations build a new morpheme
//! and leave the original untouched.
//!
//! # Examples
//!
//! ```
//! use ttm_core::{Morpheme, Width};
//!
//! let root = Morpheme::new("write", "write")
//!     .with_language("en")
//!     .with_width(Width::new("write"));
//! let derived = root.translate_along_x(Some("re"), None);
//!
//! assert_eq!(derived.form(), "rewrite");
//! assert_eq!(derived.coordinates().x, 1);
//! assert_eq!(root.distance_to(&derived), 1.0);
//! ```

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::dimensions::{Depth, Height, SemanticLevel, Width};
use crate::error::Result;
use crate::serializer::dict;

/// Integer position of a morpheme in `(X, Y, Z)` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coordinates {
    /// Derivation degree.
    pub x: i64,
    /// Semantic level in focus.
    pub y: i64,
    /// Vocalic / tonal configuration id.
    pub z: i64,
}

impl Coordinates {
    /// Creates a coordinate triple.
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance `sqrt(Σ Δi²)`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The triple as an array `[x, y, z]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(i64, i64, i64)> for Coordinates {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self { x, y, z }
    }
}

impl From<&Morpheme> for Coordinates {
    fn from(morpheme: &Morpheme) -> Self {
        morpheme.coordinates()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A morpheme with its three analytical dimensions.
///
/// Identity fields (form, root, language, gloss) are fixed once built.
/// Derivations go through the `translate_along_*` methods, which return a
/// fresh value with deep copies of every dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    form: String,
    root: String,
    language: String,
    gloss: String,
    width: Width,
    depth: Depth,
    height: Height,
    metadata: Map<String, Value>,
}

impl Morpheme {
    /// Creates a morpheme with default dimensions.
    #[must_use]
    pub fn new(form: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            root: root.into(),
            language: String::new(),
            gloss: String::new(),
            width: Width::default(),
            depth: Depth::default(),
            height: Height::default(),
            metadata: Map::new(),
        }
    }

    /// Sets the language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the gloss.
    #[must_use]
    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = gloss.into();
        self
    }

    /// Re-roots the morpheme, keeping every other field.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the Width dimension.
    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Sets the Depth dimension.
    #[must_use]
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the Height dimension.
    #[must_use]
    pub fn with_height(mut self, height: Height) -> Self {
        self.height = height;
        self
    }

    /// Replaces the metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Surface form.
    #[must_use]
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Root or stem.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Language code (e.g. `"ar"`).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translation or gloss.
    #[must_use]
    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    /// X dimension.
    #[must_use]
    pub fn width(&self) -> &Width {
        &self.width
    }

    /// Y dimension.
    #[must_use]
    pub fn depth(&self) -> &Depth {
        &self.depth
    }

    /// Z dimension.
    #[must_use]
    pub fn height(&self) -> &Height {
        &self.height
    }

    /// Free-form annotations.
    #[must_use]
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Mutable access to annotations.
    pub fn metadata_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.metadata
    }

    /// Current position, read from the three dimensions.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            x: self.width.position(),
            y: self.depth.position(),
            z: self.height.position(),
        }
    }

    /// Euclidean distance between the two coordinate triples.
    ///
    /// Zero whenever the coordinates coincide, even for unrelated forms.
    #[must_use]
    pub fn distance_to(&self, other: &Morpheme) -> f64 {
        self.coordinates().distance_to(other.coordinates())
    }

    /// Derives a new morpheme by affixation (a step along X).
    ///
    /// Root, affixes, pattern and degree are copied into a fresh Width and
    /// each given affix is appended, so passing both raises the degree by
    /// two. The new form is the resulting `full_form`. Depth and Height are
    /// carried over as independent copies. Empty affixes are ignored.
    #[must_use]
    pub fn translate_along_x(&self, prefix: Option<&str>, suffix: Option<&str>) -> Morpheme {
        let root = if self.width.root.is_empty() {
            self.root.clone()
        } else {
            self.width.root.clone()
        };
        let mut width = Width::new(root)
            .with_pattern(self.width.pattern.clone())
            .with_derivation_degree(self.width.derivation_degree())
            .with_affixes(self.width.prefixes().to_vec(), self.width.suffixes().to_vec());
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            width.add_prefix(prefix);
        }
        if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
            width.add_suffix(suffix);
        }

        Morpheme {
            form: width.full_form(),
            root: self.root.clone(),
            language: self.language.clone(),
            gloss: self.gloss.clone(),
            width,
            depth: self.depth.clone(),
            height: self.height.clone(),
            metadata: Map::new(),
        }
    }

    /// Moves the morpheme to another semantic level (a step along Y).
    ///
    /// Layers and field are copied; only `current_level` changes.
    #[must_use]
    pub fn translate_along_y(&self, level: SemanticLevel) -> Morpheme {
        let depth = Depth {
            current_level: level.value(),
            ..self.depth.clone()
        };
        Morpheme {
            form: self.form.clone(),
            root: self.root.clone(),
            language: self.language.clone(),
            gloss: self.gloss.clone(),
            width: self.width.clone(),
            depth,
            height: self.height.clone(),
            metadata: Map::new(),
        }
    }

    /// Re-vocalizes the morpheme (a step along Z).
    ///
    /// The new Height keeps only the base form (falling back to the old
    /// surface form) and takes `configuration_id`; vowels and diacritics of
    /// the previous vocalization are dropped.
    #[must_use]
    pub fn translate_along_z(&self, vocalized: impl Into<String>, configuration_id: u32) -> Morpheme {
        let base_form = if self.height.base_form.is_empty() {
            self.form.clone()
        } else {
            self.height.base_form.clone()
        };
        Morpheme {
            form: vocalized.into(),
            root: self.root.clone(),
            language: self.language.clone(),
            gloss: self.gloss.clone(),
            width: self.width.clone(),
            depth: self.depth.clone(),
            height: Height::new(base_form, configuration_id),
            metadata: Map::new(),
        }
    }

    /// Wire form of the morpheme as a JSON object.
    #[must_use]
    pub fn to_dict(&self) -> Value {
        dict::to_dict(self)
    }

    /// Rebuilds a morpheme from its wire form.
    ///
    /// Only `form` and `root` are required; every other field falls back to
    /// its zero value. Stored coordinates are ignored and recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`](crate::Error::MissingField) when
    /// `form` or `root` is absent, [`Error::InvalidLevel`](crate::Error::InvalidLevel)
    /// for a layer level outside 1–4, and [`Error::Json`](crate::Error::Json)
    /// when a field has the wrong type.
    pub fn from_dict(value: &Value) -> Result<Morpheme> {
        dict::from_dict(value)
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.form, self.root, self.coordinates())
    }
}

impl Serialize for Morpheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Morpheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Morpheme::from_dict(&value).map_err(serde::de::Error::custom)
    }
}

/// Optional parts accepted by [`create_semitic_morpheme`].
#[derive(Debug, Clone, Default)]
pub struct SemiticOptions {
    /// Derivational pattern (wazn / mishqal).
    pub pattern: String,
    /// Degree of derivation from the root.
    pub derivation_degree: u32,
    /// Semantic field.
    pub semantic_field: String,
    /// `(level, meaning)` pairs added in order.
    pub semantic_layers: Vec<(SemanticLevel, String)>,
    /// Vocalic configuration id.
    pub configuration_id: u32,
    /// Vowel sequence.
    pub vowels: Vec<String>,
}

/// Builds a root-and-pattern morpheme from flat parts.
///
/// The Height base form is the root itself; each semantic layer is added
/// through [`Depth::add_layer`] in the given order.
///
/// ```
/// use ttm_core::dimensions::SemanticLevel;
/// use ttm_core::morpheme::{create_semitic_morpheme, SemiticOptions};
///
/// let kitab = create_semitic_morpheme("كِتَاب", "ك-ت-ب", "ar", "book", SemiticOptions {
///     pattern: "فِعَال".into(),
///     derivation_degree: 1,
///     semantic_layers: vec![(SemanticLevel::Literal, "book".into())],
///     configuration_id: 3,
///     ..SemiticOptions::default()
/// });
/// assert_eq!(kitab.coordinates().to_array(), [1, 1, 3]);
/// ```
#[must_use]
pub fn create_semitic_morpheme(
    form: &str,
    root: &str,
    language: &str,
    gloss: &str,
    options: SemiticOptions,
) -> Morpheme {
    let width = Width::new(root)
        .with_pattern(options.pattern)
        .with_derivation_degree(options.derivation_degree);

    let mut depth = Depth::with_field(options.semantic_field);
    for (level, meaning) in options.semantic_layers {
        depth.add_layer(level, meaning);
    }

    let height = Height::new(root, options.configuration_id).with_vowels(options.vowels);

    Morpheme::new(form, root)
        .with_language(language)
        .with_gloss(gloss)
        .with_width(width)
        .with_depth(depth)
        .with_height(height)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::dimensions::{MarkFunction, MarkPosition};

    fn kataba() -> Morpheme {
        let mut depth = Depth::with_field("writing");
        depth.add_layer(SemanticLevel::Literal, "to write");
        depth.add_layer(SemanticLevel::Mystical, "divine decree");
        let mut height = Height::new("كتب", 1).with_vowels(vec!["a".into(); 3]);
        height.add_diacritic("\u{064E}", "fatha", MarkPosition::Above, MarkFunction::Vowel);
        Morpheme::new("كَتَبَ", "ك-ت-ب")
            .with_language("ar")
            .with_gloss("he wrote")
            .with_width(Width::new("ك-ت-ب").with_pattern("فَعَلَ"))
            .with_depth(depth)
            .with_height(height)
    }

    #[test]
    fn coordinates_follow_dimensions() {
        assert_eq!(kataba().coordinates(), Coordinates::new(0, 1, 1));
        assert_eq!(Morpheme::new("x", "x").coordinates().to_array(), [0, 1, 0]);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Morpheme::new("a", "r").with_width(Width::new("r").with_derivation_degree(3));
        let b = Morpheme::new("b", "r").with_height(Height::new("b", 4));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn homonyms_at_same_point_have_zero_distance() {
        let a = Morpheme::new("bank", "bank").with_gloss("river side");
        let b = Morpheme::new("bank", "bank").with_gloss("money house");
        assert_ne!(a, b);
        assert_eq!(a.distance_to(&b), 0.0);
    }

    #[test]
    fn translate_x_with_both_affixes_adds_two() {
        let base = kataba();
        let derived = base.translate_along_x(Some("مَ"), Some("ة"));
        assert_eq!(derived.width().derivation_degree(), 2);
        assert_eq!(derived.form(), "مَك-ت-بة");
        assert_eq!(derived.root(), "ك-ت-ب");
        assert_eq!(derived.width().pattern, "فَعَلَ");
        assert_eq!(derived.depth(), base.depth());
        assert_eq!(derived.height(), base.height());
        assert_eq!(base.width().derivation_degree(), 0);
    }

    #[test]
    fn translate_x_falls_back_to_morpheme_root() {
        let bare = Morpheme::new("walk", "walk");
        let derived = bare.translate_along_x(None, Some("ed"));
        assert_eq!(derived.form(), "walked");
        assert_eq!(derived.width().root, "walk");
        assert_eq!(derived.coordinates().x, 1);
    }

    #[test]
    fn translate_x_copies_are_independent() {
        let base = kataba();
        let mut derived = base.translate_along_x(Some("x"), None);
        derived.metadata_mut().insert("k".into(), Value::Bool(true));
        assert!(base.metadata().is_empty());
        assert_eq!(base.depth().levels.len(), 2);
    }

    #[test]
    fn translate_y_moves_only_the_level() {
        let base = kataba();
        let mystical = base.translate_along_y(SemanticLevel::Mystical);
        assert_eq!(mystical.coordinates(), Coordinates::new(0, 4, 1));
        assert_eq!(mystical.depth().levels, base.depth().levels);
        assert_eq!(mystical.form(), base.form());
        assert_eq!(mystical.width(), base.width());
        assert_eq!(base.depth().current_level, 1);
    }

    #[test]
    fn translate_z_resets_vocalization() {
        let base = kataba();
        let revocalized = base.translate_along_z("كُتِبَ", 9);
        assert_eq!(revocalized.form(), "كُتِبَ");
        assert_eq!(revocalized.height().base_form, "كتب");
        assert_eq!(revocalized.height().configuration_id, 9);
        assert!(!revocalized.height().has_vocalization());
        assert_eq!(revocalized.width(), base.width());
    }

    #[test]
    fn translate_z_uses_form_without_base() {
        let bare = Morpheme::new("mā", "ma");
        let moved = bare.translate_along_z("má", 2);
        assert_eq!(moved.height().base_form, "mā");
        assert_eq!(moved.coordinates().z, 2);
    }

    #[test]
    fn factory_applies_layers_in_order() {
        let maktub = create_semitic_morpheme(
            "مَكْتُوب",
            "ك-ت-ب",
            "ar",
            "written / destiny",
            SemiticOptions {
                pattern: "مَفْعُول".into(),
                derivation_degree: 1,
                semantic_field: "writing".into(),
                semantic_layers: vec![
                    (SemanticLevel::Literal, "written".into()),
                    (SemanticLevel::Allusive, "letter".into()),
                    (SemanticLevel::Mystical, "destiny".into()),
                ],
                configuration_id: 4,
                vowels: vec!["a".into(), "uu".into()],
            },
        );
        let levels: Vec<_> = maktub.depth().levels.iter().map(|l| l.level).collect();
        assert_eq!(
            levels,
            [SemanticLevel::Literal, SemanticLevel::Allusive, SemanticLevel::Mystical]
        );
        assert_eq!(maktub.height().base_form, "ك-ت-ب");
        assert_eq!(maktub.height().vowel_pattern(), "a-uu");
        assert_eq!(maktub.coordinates(), Coordinates::new(1, 1, 4));
    }

    #[test]
    fn serde_goes_through_wire_form() {
        let original = kataba();
        let text = serde_json::to_string(&original).expect("serialize");
        let back: Morpheme = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, original);
    }

    #[test]
    fn display_shows_point() {
        assert_eq!(kataba().to_string(), "كَتَبَ [ك-ت-ب] (0, 1, 1)");
    }
}
