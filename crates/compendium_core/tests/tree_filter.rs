use compendium_core::{filter_forest, Forest, TopicRecord};

fn forest(records: Vec<TopicRecord>) -> Forest {
    Forest::from_records(records).unwrap()
}

fn record(id: i64, parent_id: Option<i64>, name: &str, description: &str) -> TopicRecord {
    TopicRecord::new(id, parent_id, name, description)
}

/// Three roots, one of them two levels deep.
fn sample_forest() -> Forest {
    forest(vec![
        record(1, None, "Terminology", ""),
        record(2, Some(1), "Directions", ""),
        record(3, Some(2), "Medial", "Closer to the median plane."),
        record(4, Some(2), "Lateral", "Farther from the median plane."),
        record(5, Some(1), "Quadrants", ""),
        record(6, None, "Cellular Biology", ""),
        record(7, Some(6), "Mitochondria", ""),
        record(8, None, "Clinical Skills", ""),
    ])
}

#[test]
fn blank_query_shows_every_topic_in_order() {
    let forest = sample_forest();

    for query in ["", "   "] {
        let visible = filter_forest(&forest, query);
        assert_eq!(visible.len(), forest.len());
        assert_eq!(visible.iter().collect::<Vec<_>>(), forest.preorder());
        assert!(!visible.is_match(3));
    }
}

#[test]
fn match_keeps_ancestor_chain_visible() {
    let forest = forest(vec![
        record(1, None, "Anatomy", ""),
        record(2, Some(1), "Anatomical Position", "The standard reference position."),
    ]);

    let visible = filter_forest(&forest, "position");
    assert_eq!(visible.len(), 2);
    assert!(visible.contains(1));
    assert!(visible.contains(2));
    assert!(visible.is_match(2));
    // The ancestor is shown for context only, not as a hit.
    assert!(!visible.is_match(1));
}

#[test]
fn no_hit_query_yields_empty_visible_set() {
    let forest = forest(vec![
        record(1, None, "Anatomy", ""),
        record(2, Some(1), "Anatomical Position", "The standard reference position."),
    ]);

    let visible = filter_forest(&forest, "xyz");
    assert!(visible.is_empty());
    assert_eq!(visible.iter().count(), 0);
}

#[test]
fn descriptions_are_not_searched() {
    let forest = sample_forest();

    // "median" appears only in descriptions.
    let visible = filter_forest(&forest, "median");
    assert!(visible.is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let forest = sample_forest();

    let lower = filter_forest(&forest, "medial");
    let upper = filter_forest(&forest, "MEDIAL");
    assert_eq!(
        lower.iter().collect::<Vec<_>>(),
        upper.iter().collect::<Vec<_>>()
    );
    assert!(lower.contains(3));
    assert!(lower.is_match(3));
}

#[test]
fn filtering_is_idempotent_for_the_same_query() {
    let forest = sample_forest();

    let first = filter_forest(&forest, "dir");
    let second = filter_forest(&forest, "dir");
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
}

#[test]
fn every_visible_topic_matches_or_shelters_a_match() {
    let forest = sample_forest();

    for query in ["medial", "l", "cell", "q", "skills"] {
        let visible = filter_forest(&forest, query);
        for id in visible.iter() {
            let matches_or_shelters = visible.is_match(id) || has_matching_descendant(&forest, id, &visible);
            assert!(
                matches_or_shelters,
                "visible topic {id} neither matches `{query}` nor shelters a match"
            );
        }
    }
}

fn has_matching_descendant(
    forest: &Forest,
    id: i64,
    visible: &compendium_core::VisibleSet,
) -> bool {
    let Some(node) = forest.get(id) else {
        return false;
    };
    node.children.iter().any(|&child| {
        (visible.contains(child) && visible.is_match(child))
            || has_matching_descendant(forest, child, visible)
    })
}

#[test]
fn filtering_never_reorders_siblings() {
    let forest = sample_forest();

    let visible = filter_forest(&forest, "l");
    let order: Vec<_> = visible.iter().collect();
    let preorder = forest.preorder();
    let expected: Vec<_> = preorder
        .into_iter()
        .filter(|&id| visible.contains(id))
        .collect();
    assert_eq!(order, expected);
}

#[test]
fn filter_does_not_mutate_the_forest() {
    let forest = sample_forest();
    let before = forest.preorder();

    let _ = filter_forest(&forest, "medial");
    let _ = filter_forest(&forest, "");

    assert_eq!(forest.preorder(), before);
    assert_eq!(forest.len(), 8);
}
