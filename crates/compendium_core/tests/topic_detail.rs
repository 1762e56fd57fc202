use compendium_core::{topic_detail, DetailError, Forest, TopicRecord};

fn forest(records: Vec<TopicRecord>) -> Forest {
    Forest::from_records(records).unwrap()
}

#[test]
fn detail_returns_name_and_single_paragraph() {
    let forest = forest(vec![
        TopicRecord::new(1, None, "Anatomy", ""),
        TopicRecord::new(
            2,
            Some(1),
            "Anatomical Position",
            "The standard reference position.",
        ),
    ]);

    let view = topic_detail(&forest, 2).unwrap();
    assert_eq!(view.topic_id, 2);
    assert_eq!(view.name, "Anatomical Position");
    assert_eq!(view.paragraphs, vec!["The standard reference position."]);
    assert!(view.has_content());
}

#[test]
fn stale_selection_maps_to_not_found() {
    let forest = forest(vec![TopicRecord::new(1, None, "Anatomy", "")]);

    let err = topic_detail(&forest, 999).unwrap_err();
    assert_eq!(err, DetailError::TopicNotFound(999));
}

#[test]
fn markup_significant_characters_are_escaped() {
    let forest = forest(vec![TopicRecord::new(
        1,
        None,
        "Injection",
        "Beware <script>alert('x')</script> & friends",
    )]);

    let view = topic_detail(&forest, 1).unwrap();
    assert_eq!(view.paragraphs.len(), 1);
    let paragraph = &view.paragraphs[0];
    assert!(paragraph.contains("&lt;script&gt;"));
    assert!(paragraph.contains("&amp; friends"));
    assert!(!paragraph.contains("<script>"));

    let html = view.to_html();
    assert!(html.starts_with("<p>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn description_splits_into_trimmed_paragraphs_on_newlines() {
    let forest = forest(vec![TopicRecord::new(
        1,
        None,
        "Cell Cycle",
        "  First paragraph. \n\nSecond paragraph.\r\n   \nThird paragraph.",
    )]);

    let view = topic_detail(&forest, 1).unwrap();
    assert_eq!(
        view.paragraphs,
        vec!["First paragraph.", "Second paragraph.", "Third paragraph."]
    );
    assert_eq!(
        view.to_html(),
        "<p>First paragraph.</p><p>Second paragraph.</p><p>Third paragraph.</p>"
    );
}

#[test]
fn empty_description_renders_placeholder_html() {
    let forest = forest(vec![TopicRecord::new(1, None, "Stub", "   \n  ")]);

    let view = topic_detail(&forest, 1).unwrap();
    assert!(!view.has_content());
    assert!(view.paragraphs.is_empty());
    assert_eq!(view.to_html(), "<p>No description available.</p>");
}

#[test]
fn detail_view_serializes_as_plain_data() {
    let forest = forest(vec![TopicRecord::new(1, None, "Medial", "Closer to the midline.")]);

    let view = topic_detail(&forest, 1).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["topic_id"], 1);
    assert_eq!(json["name"], "Medial");
    assert_eq!(json["paragraphs"][0], "Closer to the midline.");
}
