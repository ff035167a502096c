//! Wire form of a [`Morpheme`].
//!
//! The object carries the identity fields, the derived coordinates as an
//! `[x, y, z]` array, one block per dimension and the metadata map.
//! Coordinates are informational: [`from_dict`] ignores them and the loaded
//! morpheme recomputes its position from the dimension blocks.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::dimensions::{
    Depth, Diacritic, Height, MarkFunction, MarkPosition, SemanticLayer, SemanticLevel, Width,
};
use crate::error::{Error, Result};
use crate::morpheme::Morpheme;

/// Serializes a morpheme to its wire form.
#[must_use]
pub fn to_dict(morpheme: &Morpheme) -> Value {
    let coords = morpheme.coordinates();
    let width = morpheme.width();
    let depth = morpheme.depth();
    let height = morpheme.height();

    let levels: Vec<Value> = depth
        .levels
        .iter()
        .map(|layer| {
            json!({
                "level": layer.level.value(),
                "level_name": layer.level.name(),
                "meaning": layer.meaning,
                "tradition": layer.tradition,
                "source": layer.source
            })
        })
        .collect();

    let diacritics: Vec<Value> = height
        .diacritics
        .iter()
        .map(|d| {
            json!({
                "symbol": d.symbol,
                "name": d.name,
                "position": d.position.as_str(),
                "function": d.function
            })
        })
        .collect();

    json!({
        "form": morpheme.form(),
        "root": morpheme.root(),
        "language": morpheme.language(),
        "gloss": morpheme.gloss(),
        "coordinates": coords.to_array(),
        "width": {
            "root": width.root,
            "prefixes": width.prefixes(),
            "suffixes": width.suffixes(),
            "pattern": width.pattern,
            "derivation_degree": width.derivation_degree()
        },
        "depth": {
            "current_level": depth.current_level,
            "semantic_field": depth.semantic_field,
            "levels": levels
        },
        "height": {
            "base_form": height.base_form,
            "configuration_id": height.configuration_id,
            "vowels": height.vowels,
            "cantillation": height.cantillation,
            "diacritics": diacritics
        },
        "metadata": Value::Object(morpheme.metadata().clone())
    })
}

/// Rebuilds a morpheme from its wire form.
///
/// # Errors
///
/// Returns [`Error::MissingField`] when `form` or `root` is absent,
/// [`Error::InvalidLevel`] for a layer level outside 1–4 and
/// [`Error::Json`] when any present field has the wrong type.
pub fn from_dict(value: &Value) -> Result<Morpheme> {
    let record = MorphemeRecord::deserialize(value)?;
    let form = record.form.ok_or(Error::MissingField("form"))?;
    let root = record.root.ok_or(Error::MissingField("root"))?;

    let width = Width::new(record.width.root)
        .with_pattern(record.width.pattern)
        .with_derivation_degree(record.width.derivation_degree)
        .with_affixes(record.width.prefixes, record.width.suffixes);

    let mut depth = Depth::with_field(record.depth.semantic_field);
    depth.current_level = record.depth.current_level;
    for layer in record.depth.levels {
        let level =
            SemanticLevel::from_value(layer.level).ok_or(Error::InvalidLevel(layer.level))?;
        depth.push_layer(
            SemanticLayer::new(level, layer.meaning)
                .with_tradition(layer.tradition)
                .with_source(layer.source),
        );
    }

    let mut height = Height::new(record.height.base_form, record.height.configuration_id)
        .with_vowels(record.height.vowels);
    height.cantillation = record.height.cantillation;
    height.diacritics = record
        .height
        .diacritics
        .into_iter()
        .map(|d| Diacritic {
            symbol: d.symbol,
            name: d.name,
            position: d.position,
            function: d.function,
        })
        .collect();

    Ok(Morpheme::new(form, root)
        .with_language(record.language)
        .with_gloss(record.gloss)
        .with_width(width)
        .with_depth(depth)
        .with_height(height)
        .with_metadata(record.metadata))
}

#[derive(Deserialize)]
struct MorphemeRecord {
    #[serde(default)]
    form: Option<String>,
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    language: String,
    #[serde(default)]
    gloss: String,
    #[serde(default)]
    width: WidthRecord,
    #[serde(default)]
    depth: DepthRecord,
    #[serde(default)]
    height: HeightRecord,
    #[serde(default)]
    metadata: Map<String, Value>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct WidthRecord {
    root: String,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    pattern: String,
    derivation_degree: u32,
}

#[derive(Deserialize)]
#[serde(default)]
struct DepthRecord {
    current_level: u8,
    semantic_field: String,
    levels: Vec<LayerRecord>,
}

impl Default for DepthRecord {
    fn default() -> Self {
        Self {
            current_level: SemanticLevel::Literal.value(),
            semantic_field: String::new(),
            levels: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct LayerRecord {
    level: i64,
    meaning: String,
    #[serde(default)]
    tradition: String,
    #[serde(default)]
    source: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct HeightRecord {
    base_form: String,
    configuration_id: u32,
    vowels: Vec<String>,
    cantillation: Vec<String>,
    diacritics: Vec<DiacriticRecord>,
}

#[derive(Deserialize)]
struct DiacriticRecord {
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    position: MarkPosition,
    #[serde(default)]
    function: MarkFunction,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn minimal_input_defaults_every_axis() {
        let m = from_dict(&json!({ "form": "book", "root": "book" })).expect("parse");
        assert_eq!(m.form(), "book");
        assert_eq!(m.language(), "");
        assert_eq!(m.coordinates().to_array(), [0, 1, 0]);
        assert!(m.depth().levels.is_empty());
        assert!(m.metadata().is_empty());
    }

    #[test]
    fn missing_identity_is_an_error() {
        let err = from_dict(&json!({ "root": "r" })).unwrap_err();
        assert!(matches!(err, Error::MissingField("form")));
        let err = from_dict(&json!({ "form": "f" })).unwrap_err();
        assert!(matches!(err, Error::MissingField("root")));
    }

    #[test]
    fn out_of_scale_level_is_rejected() {
        let value = json!({
            "form": "f",
            "root": "r",
            "depth": { "levels": [{ "level": 7, "meaning": "?" }] }
        });
        assert!(matches!(from_dict(&value), Err(Error::InvalidLevel(7))));
    }

    #[test]
    fn wrong_field_type_is_a_json_error() {
        let value = json!({ "form": "f", "root": "r", "width": { "derivation_degree": "two" } });
        assert!(matches!(from_dict(&value), Err(Error::Json(_))));
    }

    #[test]
    fn stored_coordinates_are_ignored() {
        let value = json!({
            "form": "f",
            "root": "r",
            "coordinates": [9, 9, 9],
            "height": { "configuration_id": 2 }
        });
        let m = from_dict(&value).expect("parse");
        assert_eq!(m.coordinates().to_array(), [0, 1, 2]);
    }

    #[test]
    fn wire_form_shape() {
        let mut height = Height::new("ktb", 1);
        height.add_diacritic("\u{0651}", "shadda", MarkPosition::Above, MarkFunction::Gemination);
        let mut depth = Depth::with_field("writing");
        depth.add_layer(SemanticLevel::Allusive, "scripture");
        let m = Morpheme::new("kattaba", "k-t-b")
            .with_width(Width::new("k-t-b").with_derivation_degree(2))
            .with_depth(depth)
            .with_height(height);

        let value = to_dict(&m);
        assert_eq!(value["coordinates"], json!([2, 1, 1]));
        assert_eq!(value["depth"]["levels"][0]["level_name"], "ALLUSIVE");
        assert_eq!(value["depth"]["levels"][0]["level"], 2);
        assert_eq!(value["height"]["diacritics"][0]["position"], "above");
        assert_eq!(value["height"]["diacritics"][0]["function"], "gemination");
        assert_eq!(from_dict(&value).expect("parse"), m);
    }
}
