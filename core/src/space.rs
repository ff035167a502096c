//! Morpheme spaces: collections of morphemes answering geometric queries.
//!
//! [`MorphemeSpace`] is an insertion-ordered bag. Every query is a linear
//! scan, so results come back in insertion order unless a query states
//! otherwise. [`RootSpace`] pins the space to a single root and is the one
//! place where adding a morpheme can fail.
//!
//! # Examples
//!
//! ```
//! use ttm_core::{Morpheme, MorphemeSpace, Width};
//!
//! let mut space = MorphemeSpace::new();
//! let base = Morpheme::new("play", "play").with_width(Width::new("play"));
//! space.add_morpheme(base.translate_along_x(None, Some("ing")));
//! space.add_morpheme(base.clone());
//!
//! let nearest = space.find_nearest(&base, 1);
//! assert_eq!(nearest[0].0.form(), "playing");
//! assert_eq!(nearest[0].1, 1.0);
//! ```

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::ops::Deref;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::morpheme::{Coordinates, Morpheme};

/// Default advisory extent of the X axis.
pub const DEFAULT_MAX_X: i64 = 10;
/// Default advisory extent of the Y axis.
pub const DEFAULT_MAX_Y: i64 = 4;
/// Default advisory extent of the Z axis.
pub const DEFAULT_MAX_Z: i64 = 20;

/// An unordered bag of morphemes with spatial queries.
///
/// The `max_*` extents are hints for renderers and are never enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeSpace {
    morphemes: Vec<Morpheme>,
    /// Advisory extent of the X axis.
    pub max_x: i64,
    /// Advisory extent of the Y axis.
    pub max_y: i64,
    /// Advisory extent of the Z axis.
    pub max_z: i64,
}

impl Default for MorphemeSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphemeSpace {
    /// Creates an empty space with the default extents.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extents(DEFAULT_MAX_X, DEFAULT_MAX_Y, DEFAULT_MAX_Z)
    }

    /// Creates an empty space with explicit extents.
    #[must_use]
    pub fn with_extents(max_x: i64, max_y: i64, max_z: i64) -> Self {
        Self {
            morphemes: Vec::new(),
            max_x,
            max_y,
            max_z,
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// True when the space has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Members in insertion order.
    #[must_use]
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Morpheme> {
        self.morphemes.iter()
    }

    /// Adds a member. Duplicates are kept.
    pub fn add_morpheme(&mut self, morpheme: Morpheme) {
        self.morphemes.push(morpheme);
    }

    /// Removes the first member equal to `morpheme`.
    ///
    /// Returns whether anything was removed; absence is not an error.
    pub fn remove_morpheme(&mut self, morpheme: &Morpheme) -> bool {
        match self.morphemes.iter().position(|m| m == morpheme) {
            Some(index) => {
                self.morphemes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Members whose root equals `root`.
    #[must_use]
    pub fn get_morphemes_by_root(&self, root: &str) -> Vec<&Morpheme> {
        self.filter_morphemes(|m| m.root() == root)
    }

    /// Members located exactly at `(x, y, z)`.
    #[must_use]
    pub fn get_morphemes_at_coordinates(&self, x: i64, y: i64, z: i64) -> Vec<&Morpheme> {
        let target = Coordinates::new(x, y, z);
        self.filter_morphemes(|m| m.coordinates() == target)
    }

    /// Members within `radius` of the point `center`, boundary included.
    ///
    /// `center` is any point: a [`Coordinates`], an `(x, y, z)` tuple or a
    /// morpheme's position.
    #[must_use]
    pub fn get_morphemes_in_range(
        &self,
        center: impl Into<Coordinates>,
        radius: f64,
    ) -> Vec<&Morpheme> {
        let origin = center.into();
        self.filter_morphemes(|m| m.coordinates().distance_to(origin) <= radius)
    }

    /// Up to `k` other members ordered by ascending distance to `morpheme`.
    ///
    /// The query itself is excluded: by identity when it is a member of this
    /// space, otherwise the first member equal to it. Other members sharing
    /// its coordinates are kept at distance zero. Ties keep insertion order.
    #[must_use]
    pub fn find_nearest(&self, morpheme: &Morpheme, k: usize) -> Vec<(&Morpheme, f64)> {
        let excluded = self
            .morphemes
            .iter()
            .position(|m| core::ptr::eq(m, morpheme))
            .or_else(|| self.morphemes.iter().position(|m| m == morpheme));

        let origin = morpheme.coordinates();
        let mut ranked: Vec<(&Morpheme, f64)> = self
            .morphemes
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != excluded)
            .map(|(_, m)| (m, m.coordinates().distance_to(origin)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(k);
        ranked
    }

    /// Members matching `predicate`, in insertion order.
    pub fn filter_morphemes<F>(&self, predicate: F) -> Vec<&Morpheme>
    where
        F: Fn(&Morpheme) -> bool,
    {
        self.morphemes.iter().filter(|m| predicate(m)).collect()
    }

    /// Members per unit volume of the sphere of `radius` around `center`.
    ///
    /// A non-positive or NaN radius has no volume and yields `0.0`.
    #[must_use]
    pub fn compute_density(&self, center: impl Into<Coordinates>, radius: f64) -> f64 {
        if !(radius > 0.0) {
            return 0.0;
        }
        let count = self.get_morphemes_in_range(center, radius).len() as f64;
        let volume = 4.0 / 3.0 * PI * radius.powi(3);
        count / volume
    }

    /// Aggregate statistics: extents, language and root histograms.
    #[must_use]
    pub fn get_statistics(&self) -> SpaceStatistics {
        let mut members = self.morphemes.iter();
        let Some(first) = members.next() else {
            return SpaceStatistics {
                count: 0,
                summary: None,
            };
        };

        let start = first.coordinates();
        let mut x_range = [start.x, start.x];
        let mut y_range = [start.y, start.y];
        let mut z_range = [start.z, start.z];
        let mut languages = BTreeMap::new();
        let mut roots = BTreeMap::new();

        for m in core::iter::once(first).chain(members) {
            let c = m.coordinates();
            widen(&mut x_range, c.x);
            widen(&mut y_range, c.y);
            widen(&mut z_range, c.z);
            *languages.entry(m.language().to_owned()).or_insert(0) += 1;
            *roots.entry(m.root().to_owned()).or_insert(0) += 1;
        }

        SpaceStatistics {
            count: self.morphemes.len(),
            summary: Some(SpaceSummary {
                x_range,
                y_range,
                z_range,
                unique_roots: roots.len(),
                languages,
                roots,
            }),
        }
    }

    /// One plot record per member, in insertion order.
    #[must_use]
    pub fn points(&self) -> Vec<PlotPoint> {
        self.morphemes
            .iter()
            .map(|m| {
                let c = m.coordinates();
                PlotPoint {
                    x: c.x,
                    y: c.y,
                    z: c.z,
                    form: m.form().to_owned(),
                    root: m.root().to_owned(),
                    gloss: m.gloss().to_owned(),
                }
            })
            .collect()
    }
}

fn widen(range: &mut [i64; 2], value: i64) {
    range[0] = range[0].min(value);
    range[1] = range[1].max(value);
}

impl<'a> IntoIterator for &'a MorphemeSpace {
    type Item = &'a Morpheme;
    type IntoIter = std::slice::Iter<'a, Morpheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.morphemes.iter()
    }
}

impl Extend<Morpheme> for MorphemeSpace {
    fn extend<I: IntoIterator<Item = Morpheme>>(&mut self, iter: I) {
        self.morphemes.extend(iter);
    }
}

impl FromIterator<Morpheme> for MorphemeSpace {
    fn from_iter<I: IntoIterator<Item = Morpheme>>(iter: I) -> Self {
        let mut space = Self::new();
        space.extend(iter);
        space
    }
}

/// Result of [`MorphemeSpace::get_statistics`].
///
/// Serializes flat: an empty space gives `{"count": 0}`, any other space
/// adds the summary keys next to `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceStatistics {
    /// Number of members.
    pub count: usize,
    /// Extents and histograms; `None` for an empty space.
    #[serde(flatten)]
    pub summary: Option<SpaceSummary>,
}

impl SpaceStatistics {
    /// Number of distinct roots, zero for an empty space.
    #[must_use]
    pub fn unique_roots(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.unique_roots)
    }
}

/// Extents and histograms of a non-empty space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceSummary {
    /// Inclusive `[min, max]` on X.
    pub x_range: [i64; 2],
    /// Inclusive `[min, max]` on Y.
    pub y_range: [i64; 2],
    /// Inclusive `[min, max]` on Z.
    pub z_range: [i64; 2],
    /// Member count per language code.
    pub languages: BTreeMap<String, usize>,
    /// Member count per root.
    pub roots: BTreeMap<String, usize>,
    /// Number of distinct roots.
    pub unique_roots: usize,
}

/// A member projected for plotting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotPoint {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
    /// Surface form, used as the label.
    pub form: String,
    /// Root, used for grouping.
    pub root: String,
    /// Gloss, used for hover text.
    pub gloss: String,
}

/// A space whose members all share one root.
///
/// Read-only queries come from the inner [`MorphemeSpace`] through `Deref`.
/// Mutation goes through [`RootSpace::add_morpheme`], which checks the root.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSpace {
    root: String,
    language: String,
    space: MorphemeSpace,
}

impl RootSpace {
    /// Creates an empty space for `root` in `language`.
    #[must_use]
    pub fn new(root: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            language: language.into(),
            space: MorphemeSpace::new(),
        }
    }

    /// The fixed root.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Language code of the space.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Adds a member sharing this space's root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootMismatch`] when the morpheme's root differs from
    /// the space root. The space is left unchanged.
    pub fn add_morpheme(&mut self, morpheme: Morpheme) -> Result<()> {
        if morpheme.root() != self.root {
            warn!(
                morpheme_root = morpheme.root(),
                space_root = %self.root,
                form = morpheme.form(),
                "root space rejected morpheme"
            );
            return Err(Error::RootMismatch {
                morpheme_root: morpheme.root().to_owned(),
                space_root: self.root.clone(),
            });
        }
        self.space.add_morpheme(morpheme);
        Ok(())
    }

    /// Removes the first member equal to `morpheme`.
    pub fn remove_morpheme(&mut self, morpheme: &Morpheme) -> bool {
        self.space.remove_morpheme(morpheme)
    }

    /// Members at derivation degree `degree`.
    #[must_use]
    pub fn get_by_derivation_degree(&self, degree: u32) -> Vec<&Morpheme> {
        self.space
            .filter_morphemes(|m| m.width().derivation_degree() == degree)
    }

    /// Members grouped by derivation degree, insertion order kept per group.
    #[must_use]
    pub fn get_derivation_tree(&self) -> BTreeMap<u32, Vec<&Morpheme>> {
        let mut tree: BTreeMap<u32, Vec<&Morpheme>> = BTreeMap::new();
        for m in &self.space {
            tree.entry(m.width().derivation_degree()).or_default().push(m);
        }
        tree
    }

    /// The underlying unconstrained space.
    #[must_use]
    pub fn as_space(&self) -> &MorphemeSpace {
        &self.space
    }

    /// Releases the members as an unconstrained space.
    #[must_use]
    pub fn into_space(self) -> MorphemeSpace {
        self.space
    }
}

impl Deref for RootSpace {
    type Target = MorphemeSpace;

    fn deref(&self) -> &MorphemeSpace {
        &self.space
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::dimensions::{Height, Width};

    fn at(form: &str, root: &str, x: u32, z: u32) -> Morpheme {
        Morpheme::new(form, root)
            .with_language("ar")
            .with_width(Width::new(root).with_derivation_degree(x))
            .with_height(Height::new(form, z))
    }

    #[test]
    fn remove_reports_presence() {
        let mut space = MorphemeSpace::new();
        let m = at("a", "r", 0, 0);
        space.add_morpheme(m.clone());
        assert!(space.remove_morpheme(&m));
        assert!(!space.remove_morpheme(&m));
        assert!(space.is_empty());
    }

    #[test]
    fn exact_filters() {
        let space: MorphemeSpace = vec![at("a", "r", 1, 2), at("b", "s", 1, 2), at("c", "r", 0, 0)]
            .into_iter()
            .collect();
        assert_eq!(space.get_morphemes_by_root("r").len(), 2);
        let here = space.get_morphemes_at_coordinates(1, 1, 2);
        assert_eq!(here.iter().map(|m| m.form()).collect::<Vec<_>>(), ["a", "b"]);
        assert!(space.get_morphemes_at_coordinates(5, 5, 5).is_empty());
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let center = at("o", "r", 0, 0);
        let space: MorphemeSpace = vec![at("edge", "r", 0, 3), at("out", "r", 0, 4)]
            .into_iter()
            .collect();
        let hits = space.get_morphemes_in_range(&center, 3.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].form(), "edge");
    }

    #[test]
    fn range_around_unoccupied_point() {
        let space: MorphemeSpace = vec![at("a", "r", 0, 0), at("b", "r", 2, 0)]
            .into_iter()
            .collect();
        assert!(space.get_morphemes_at_coordinates(1, 1, 0).is_empty());
        let hits = space.get_morphemes_in_range((1, 1, 0), 1.0);
        assert_eq!(hits.iter().map(|m| m.form()).collect::<Vec<_>>(), ["a", "b"]);

        let far = Coordinates::new(-50, i64::MAX / 4, 0);
        assert!(space.get_morphemes_in_range(far, 10.0).is_empty());
        assert_eq!(space.compute_density(far, 10.0), 0.0);
        let density = space.compute_density(Coordinates::new(1, 1, 0), 1.0);
        assert!((density - 2.0 / (4.0 / 3.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn nearest_on_empty_space_and_zero_k() {
        let empty = MorphemeSpace::new();
        let query = at("q", "r", 0, 0);
        assert!(empty.find_nearest(&query, 0).is_empty());
        assert!(empty.find_nearest(&query, 5).is_empty());

        let space: MorphemeSpace = vec![at("q", "r", 0, 0), at("p", "r", 1, 0)]
            .into_iter()
            .collect();
        assert!(space.find_nearest(&space.morphemes()[0], 0).is_empty());
        assert_eq!(space.find_nearest(&space.morphemes()[0], 100).len(), 1);
    }

    #[test]
    fn nearest_excludes_member_query_by_identity() {
        let mut space = MorphemeSpace::new();
        space.add_morpheme(at("q", "r", 0, 0));
        space.add_morpheme(at("q", "r", 0, 0));
        space.add_morpheme(at("far", "r", 4, 0));
        let query = &space.morphemes()[0];
        let nearest = space.find_nearest(query, 5);
        assert_eq!(nearest.len(), 2);
        assert!(core::ptr::eq(nearest[0].0, &space.morphemes()[1]));
        assert_eq!(nearest[0].1, 0.0);
        assert_eq!(nearest[1].0.form(), "far");
    }

    #[test]
    fn nearest_excludes_equal_outsider_once() {
        let space: MorphemeSpace = vec![at("q", "r", 0, 0), at("q", "r", 0, 0), at("p", "r", 1, 0)]
            .into_iter()
            .collect();
        let outsider = at("q", "r", 0, 0);
        let nearest = space.find_nearest(&outsider, 10);
        assert_eq!(nearest.len(), 2);
        assert_eq!(nearest[0].1, 0.0);
        assert_eq!(nearest[1].0.form(), "p");
    }

    #[test]
    fn nearest_ties_keep_insertion_order() {
        let space: MorphemeSpace = vec![
            at("q", "r", 0, 0),
            at("first", "r", 1, 0),
            at("second", "r", 0, 1),
            at("third", "r", 1, 0),
        ]
        .into_iter()
        .collect();
        let nearest = space.find_nearest(&space.morphemes()[0], 3);
        let forms: Vec<_> = nearest.iter().map(|(m, _)| m.form()).collect();
        assert_eq!(forms, ["first", "second", "third"]);
    }

    #[test]
    fn density_of_degenerate_radius_is_zero() {
        let space: MorphemeSpace = vec![at("a", "r", 0, 0)].into_iter().collect();
        let center = at("a", "r", 0, 0);
        assert_eq!(space.compute_density(&center, 0.0), 0.0);
        assert_eq!(space.compute_density(&center, -1.0), 0.0);
        assert_eq!(space.compute_density(&center, f64::NAN), 0.0);
        let density = space.compute_density(&center, 1.0);
        assert!((density - 3.0 / (4.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn statistics_of_empty_space() {
        let stats = MorphemeSpace::new().get_statistics();
        assert_eq!(stats.count, 0);
        assert!(stats.summary.is_none());
        assert_eq!(serde_json::to_value(&stats).expect("json"), serde_json::json!({ "count": 0 }));
    }

    #[test]
    fn statistics_of_shared_root() {
        let space: MorphemeSpace = vec![at("a", "k-t-b", 0, 1), at("b", "k-t-b", 1, 2), at("c", "k-t-b", 2, 3)]
            .into_iter()
            .collect();
        let stats = space.get_statistics();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.unique_roots(), 1);
        let summary = stats.summary.expect("summary");
        assert_eq!(summary.x_range, [0, 2]);
        assert_eq!(summary.y_range, [1, 1]);
        assert_eq!(summary.z_range, [1, 3]);
        assert_eq!(summary.languages.get("ar"), Some(&3));
    }

    #[test]
    fn root_space_rejects_foreign_root() {
        let mut space = RootSpace::new("R", "ar");
        let err = space.add_morpheme(at("x", "other", 0, 0)).unwrap_err();
        assert!(matches!(err, Error::RootMismatch { .. }));
        assert_eq!(space.len(), 0);
        space.add_morpheme(at("x", "R", 0, 0)).expect("same root");
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn derivation_tree_groups_in_order() {
        let mut space = RootSpace::new("R", "ar");
        for (form, degree) in [("a", 1), ("b", 0), ("c", 1), ("d", 2)] {
            space.add_morpheme(at(form, "R", degree, 0)).expect("add");
        }
        let tree = space.get_derivation_tree();
        let ones: Vec<_> = tree[&1].iter().map(|m| m.form()).collect();
        assert_eq!(ones, ["a", "c"]);
        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(space.get_by_derivation_degree(2).len(), 1);
    }

    #[test]
    fn points_follow_members() {
        let space: MorphemeSpace = vec![at("a", "r", 2, 3).with_gloss("g")].into_iter().collect();
        let points = space.points();
        assert_eq!((points[0].x, points[0].y, points[0].z), (2, 1, 3));
        assert_eq!(points[0].gloss, "g");
    }
}
