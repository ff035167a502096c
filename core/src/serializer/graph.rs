//! Graph tuples for a graph-persistence adapter.
//!
//! A [`GraphExport`] flattens a [`MorphemeSpace`] into three node sets
//! and the two edge kinds an adapter upserts:
//!
//! - `(:Morpheme)-[:DERIVED_FROM]->(:Root)`
//! - `(:Root)-[:BELONGS_TO]->(:SemanticField)`
//!
//! Roots are unique by `(language, root)` and identified as
//! `"{language}_{root}"`. Morphemes are unique by form and fields by name;
//! the first occurrence wins.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::morpheme::Morpheme;
use crate::space::MorphemeSpace;

/// Edge label from a morpheme to its root.
pub const DERIVED_FROM: &str = "DERIVED_FROM";
/// Edge label from a root to its semantic field.
pub const BELONGS_TO: &str = "BELONGS_TO";

/// Identifier of a root node.
#[must_use]
pub fn root_id(language: &str, root: &str) -> String {
    format!("{language}_{root}")
}

/// A `(root, language, meaning)` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootNode {
    /// Node identifier, `"{language}_{root}"`.
    pub id: String,
    /// Root text.
    pub root: String,
    /// Language code.
    pub language: String,
    /// Literal meaning of the first member with this root, else its gloss.
    pub meaning: String,
}

/// A `(form, root, language, attributes)` tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphemeNode {
    /// Surface form, unique across the export.
    pub form: String,
    /// Root the morpheme derives from.
    pub root: String,
    /// Language code.
    pub language: String,
    /// Flat properties set on the node: gloss, coordinates, pattern.
    pub attributes: Map<String, Value>,
}

/// A `(root, language, field)` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLink {
    /// Root text.
    pub root: String,
    /// Language code.
    pub language: String,
    /// Semantic field name.
    pub field: String,
}

/// A labelled edge between node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node identifier.
    pub from: String,
    /// Edge label.
    pub label: &'static str,
    /// Target node identifier.
    pub to: String,
}

/// Deduplicated node and link sets extracted from a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphExport {
    /// Root nodes in first-seen order.
    pub roots: Vec<RootNode>,
    /// Morpheme nodes in first-seen order.
    pub morphemes: Vec<MorphemeNode>,
    /// Root-to-field links in first-seen order.
    pub fields: Vec<FieldLink>,
}

impl GraphExport {
    /// Extracts graph tuples from every member of `space`.
    #[must_use]
    pub fn from_space(space: &MorphemeSpace) -> Self {
        let mut export = Self::default();
        let mut seen_roots = HashSet::new();
        let mut seen_forms = HashSet::new();
        let mut seen_fields = HashSet::new();

        for m in space {
            let id = root_id(m.language(), m.root());
            if seen_roots.insert(id.clone()) {
                let meaning = m
                    .depth()
                    .literal_meaning()
                    .unwrap_or(m.gloss())
                    .to_owned();
                export.roots.push(RootNode {
                    id: id.clone(),
                    root: m.root().to_owned(),
                    language: m.language().to_owned(),
                    meaning,
                });
            }

            if seen_forms.insert(m.form().to_owned()) {
                export.morphemes.push(MorphemeNode {
                    form: m.form().to_owned(),
                    root: m.root().to_owned(),
                    language: m.language().to_owned(),
                    attributes: attributes(m),
                });
            }

            let field = &m.depth().semantic_field;
            if !field.is_empty() && seen_fields.insert((id, field.clone())) {
                export.fields.push(FieldLink {
                    root: m.root().to_owned(),
                    language: m.language().to_owned(),
                    field: field.clone(),
                });
            }
        }
        export
    }

    /// `DERIVED_FROM` edges followed by `BELONGS_TO` edges.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let derived = self.morphemes.iter().map(|m| Edge {
            from: m.form.clone(),
            label: DERIVED_FROM,
            to: root_id(&m.language, &m.root),
        });
        let belongs = self.fields.iter().map(|f| Edge {
            from: root_id(&f.language, &f.root),
            label: BELONGS_TO,
            to: f.field.clone(),
        });
        derived.chain(belongs).collect()
    }

    /// The export with its edges as one JSON document.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "roots": self.roots,
            "morphemes": self.morphemes,
            "fields": self.fields,
            "edges": self.edges()
        })
    }
}

fn attributes(m: &Morpheme) -> Map<String, Value> {
    let c = m.coordinates();
    let mut attrs = Map::new();
    attrs.insert("gloss".to_owned(), json!(m.gloss()));
    attrs.insert("x".to_owned(), json!(c.x));
    attrs.insert("y".to_owned(), json!(c.y));
    attrs.insert("z".to_owned(), json!(c.z));
    if !m.width().pattern.is_empty() {
        attrs.insert("pattern".to_owned(), json!(m.width().pattern));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{Depth, SemanticLevel};

    fn member(form: &str, root: &str, language: &str, field: &str) -> Morpheme {
        let mut depth = Depth::with_field(field);
        depth.add_layer(SemanticLevel::Literal, format!("{form} meaning"));
        Morpheme::new(form, root)
            .with_language(language)
            .with_gloss(format!("{form} gloss"))
            .with_depth(depth)
    }

    #[test]
    fn roots_are_keyed_by_language_and_root() {
        let space: MorphemeSpace = vec![
            member("kataba", "k-t-b", "ar", "writing"),
            member("kitab", "k-t-b", "ar", "writing"),
            member("katav", "k-t-b", "he", "writing"),
        ]
        .into_iter()
        .collect();
        let export = GraphExport::from_space(&space);
        let ids: Vec<_> = export.roots.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ar_k-t-b", "he_k-t-b"]);
        assert_eq!(export.roots[0].meaning, "kataba meaning");
        assert_eq!(export.fields.len(), 2);
    }

    #[test]
    fn morphemes_are_unique_by_form() {
        let space: MorphemeSpace = vec![
            member("bank", "bank", "en", ""),
            member("bank", "bank", "en", "finance"),
        ]
        .into_iter()
        .collect();
        let export = GraphExport::from_space(&space);
        assert_eq!(export.morphemes.len(), 1);
        assert_eq!(export.morphemes[0].attributes["gloss"], "bank gloss");
        assert_eq!(export.fields.len(), 1);
    }

    #[test]
    fn edges_connect_tuples() {
        let space: MorphemeSpace = vec![member("kataba", "k-t-b", "ar", "writing")]
            .into_iter()
            .collect();
        let edges = GraphExport::from_space(&space).edges();
        assert_eq!(
            edges,
            [
                Edge {
                    from: "kataba".into(),
                    label: DERIVED_FROM,
                    to: "ar_k-t-b".into()
                },
                Edge {
                    from: "ar_k-t-b".into(),
                    label: BELONGS_TO,
                    to: "writing".into()
                },
            ]
        );
    }

    #[test]
    fn root_meaning_falls_back_to_gloss() {
        let space: MorphemeSpace = vec![Morpheme::new("f", "r").with_gloss("g")].into_iter().collect();
        assert_eq!(GraphExport::from_space(&space).roots[0].meaning, "g");
    }
}
