//! Integration tests for space queries over derived morphemes.

use ttm_core::{
    create_semitic_morpheme, Error, GraphExport, Morpheme, MorphemeSpace, RootSpace,
    SemanticLevel, SemiticOptions, Width,
};

fn ktb_family() -> Vec<Morpheme> {
    let entries = [
        ("كَتَبَ", "he wrote", "فَعَلَ", 0, 1),
        ("كِتَاب", "book", "فِعَال", 1, 2),
        ("كَاتِب", "writer", "فَاعِل", 1, 3),
        ("مَكْتُوب", "written", "مَفْعُول", 1, 4),
        ("مَكْتَبَة", "library", "مَفْعَلَة", 2, 5),
    ];
    entries
        .into_iter()
        .map(|(form, gloss, pattern, degree, config)| {
            create_semitic_morpheme(form, "ك-ت-ب", "ar", gloss, SemiticOptions {
                pattern: pattern.into(),
                derivation_degree: degree,
                semantic_field: "writing".into(),
                semantic_layers: vec![(SemanticLevel::Literal, gloss.into())],
                configuration_id: config,
                ..SemiticOptions::default()
            })
        })
        .collect()
}

#[test]
fn find_nearest_returns_exactly_k_sorted() {
    let space: MorphemeSpace = ktb_family().into_iter().collect();
    let query = &space.morphemes()[0];
    for k in 1..space.len() {
        let nearest = space.find_nearest(query, k);
        assert_eq!(nearest.len(), k);
        assert!(nearest.iter().all(|(m, _)| !std::ptr::eq(*m, query)));
        assert!(nearest.windows(2).all(|w| w[0].1 <= w[1].1));
    }
    assert_eq!(space.find_nearest(query, 100).len(), space.len() - 1);
}

#[test]
fn statistics_for_three_members_of_one_root() {
    let space: MorphemeSpace = ktb_family().into_iter().take(3).collect();
    let stats = space.get_statistics();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.unique_roots(), 1);

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["unique_roots"], 1);
    assert_eq!(value["languages"]["ar"], 3);
    assert_eq!(value["x_range"], serde_json::json!([0, 1]));
}

#[test]
fn root_space_membership() {
    let mut space = RootSpace::new("R", "xx");
    let err = space
        .add_morpheme(Morpheme::new("f", "other"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "morpheme root 'other' doesn't match space root 'R'"
    );
    assert!(matches!(err, Error::RootMismatch { .. }));

    space.add_morpheme(Morpheme::new("f", "R")).unwrap();
    assert_eq!(space.len(), 1);
}

#[test]
fn root_space_queries_through_deref() {
    let mut space = RootSpace::new("ك-ت-ب", "ar");
    for m in ktb_family() {
        space.add_morpheme(m).unwrap();
    }
    let center = &space.morphemes()[1];
    assert!(space.compute_density(center, 0.0) == 0.0);
    assert!(space.get_morphemes_in_range(center, 1.5).len() >= 2);
    assert_eq!(space.get_by_derivation_degree(1).len(), 3);

    let tree = space.get_derivation_tree();
    assert_eq!(tree[&0].len(), 1);
    assert_eq!(tree[&2][0].gloss(), "library");
}

#[test]
fn derivation_chain_walks_the_x_axis() {
    let base = Morpheme::new("act", "act")
        .with_language("en")
        .with_width(Width::new("act"));
    let active = base.translate_along_x(None, Some("ive"));
    let reactivate = active
        .translate_along_x(Some("re"), Some("ate"));
    assert_eq!(reactivate.form(), "reactiveate");
    assert_eq!(reactivate.coordinates().x, 3);

    let mut space = RootSpace::new("act", "en");
    for m in [base, active, reactivate] {
        space.add_morpheme(m).unwrap();
    }
    let degrees: Vec<_> = space.get_derivation_tree().into_keys().collect();
    assert_eq!(degrees, [0, 1, 3]);
}

#[test]
fn graph_export_of_a_root_family() {
    let space: MorphemeSpace = ktb_family().into_iter().collect();
    let export = GraphExport::from_space(&space);
    assert_eq!(export.roots.len(), 1);
    assert_eq!(export.roots[0].id, "ar_ك-ت-ب");
    assert_eq!(export.roots[0].meaning, "he wrote");
    assert_eq!(export.morphemes.len(), 5);
    assert_eq!(export.fields.len(), 1);
    assert_eq!(export.edges().len(), 6);
}
