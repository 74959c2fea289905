use serde_json::json;

use graph_cluster_filter::data::{EmbeddedAttributes, InterestsFile, Snapshot};
use graph_cluster_filter::filter::FilterState;
use graph_cluster_filter::interaction::{CollectingSink, CursorStyle, InteractionController};
use graph_cluster_filter::{FilterEngine, FilterError};

const SNAPSHOT: &str = r#"{
    "nodes": [
        {"key": "t1", "label": "Ivanova A.", "cluster": "edu",
         "professionalInterests": {"Machine learning": "10 years", "Robotics": "hobby"}},
        {"key": "t2", "label": "Sidorov B.", "cluster": "edu"},
        {"key": "p1", "label": "Smart campus", "cluster": "iot"},
        {"key": "t3", "label": "Orlov C.", "cluster": "iot", "professionalInterests": {}}
    ],
    "edges": [["t1", "p1"], ["t2", "p1"], ["t3", "p1"]],
    "clusters": [{"key": "edu"}, {"key": "iot"}]
}"#;

fn engine() -> FilterEngine {
    let snapshot = Snapshot::from_json_str(SNAPSHOT, &[]).unwrap();
    let filter = FilterState::all(&snapshot.catalog);
    FilterEngine::from_snapshot(snapshot, filter)
}

#[test]
fn hover_tracks_node_neighbors_and_cursor() {
    let engine = engine();
    let mut controller = InteractionController::new();

    assert_eq!(controller.hover_enter(engine.graph(), "p1"), Ok(true));
    assert_eq!(controller.hovered(), Some("p1"));
    assert_eq!(controller.cursor(), CursorStyle::Pointer);
    let neighbors: Vec<&str> = controller.hover_state().neighbors.iter().map(String::as_str).collect();
    assert_eq!(neighbors, vec!["t1", "t2", "t3"]);

    controller.hover_leave();
    assert_eq!(controller.hovered(), None);
    assert_eq!(controller.cursor(), CursorStyle::Default);
    assert!(controller.hover_state().neighbors.is_empty());
}

#[test]
fn hover_ignores_hidden_nodes_and_skips_hidden_neighbors() {
    let mut engine = engine();
    engine.toggle("edu").unwrap();
    engine.on_frame();

    let mut controller = InteractionController::new();
    assert_eq!(controller.hover_enter(engine.graph(), "t1"), Ok(false));
    assert_eq!(controller.hovered(), None);
    assert_eq!(controller.cursor(), CursorStyle::Default);

    controller.hover_enter(engine.graph(), "p1").unwrap();
    let neighbors: Vec<&str> = controller.hover_state().neighbors.iter().map(String::as_str).collect();
    assert_eq!(neighbors, vec!["t3"]);
}

#[test]
fn hover_is_dropped_when_node_gets_hidden() {
    let mut engine = engine();
    let mut controller = InteractionController::new();
    controller.hover_enter(engine.graph(), "t2").unwrap();

    controller.drop_hidden(engine.graph());
    assert_eq!(controller.hovered(), Some("t2"));

    engine.toggle("edu").unwrap();
    engine.on_frame();
    controller.drop_hidden(engine.graph());
    assert_eq!(controller.hovered(), None);
    assert_eq!(controller.cursor(), CursorStyle::Default);
}

#[test]
fn unknown_node_is_invalid_reference() {
    let engine = engine();
    let mut controller = InteractionController::new();
    let mut sink = CollectingSink::default();

    assert_eq!(
        controller.hover_enter(engine.graph(), "nobody"),
        Err(FilterError::UnknownNode("nobody".to_string()))
    );
    assert_eq!(
        controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "nobody"),
        Err(FilterError::UnknownNode("nobody".to_string()))
    );
    assert!(sink.views.is_empty());
}

#[test]
fn click_presents_embedded_profile() {
    let engine = engine();
    let controller = InteractionController::new();
    let mut sink = CollectingSink::default();

    assert_eq!(controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "t1"), Ok(true));
    assert_eq!(sink.views.len(), 1);
    let view = &sink.views[0];
    assert_eq!(view.title, "Ivanova A.");
    assert_eq!(view.attributes.get("Robotics").map(String::as_str), Some("hobby"));
}

#[test]
fn click_without_data_or_on_hidden_node_is_noop() {
    let mut engine = engine();
    let controller = InteractionController::new();
    let mut sink = CollectingSink::default();

    // No interests at all, and an empty interests map
    assert_eq!(controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "t2"), Ok(false));
    assert_eq!(controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "t3"), Ok(false));

    engine.toggle("edu").unwrap();
    engine.on_frame();
    assert_eq!(controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "t1"), Ok(false));
    assert!(sink.views.is_empty());
}

#[test]
fn click_reads_from_interests_file() {
    let engine = engine();
    let controller = InteractionController::new();
    let mut sink = CollectingSink::default();
    let source = InterestsFile::from_value(&json!({
        "t2": {"Databases": "ClickHouse"},
        "p1": "broken record",
    }));

    assert_eq!(controller.click(engine.graph(), &source, &mut sink, "t2"), Ok(true));
    assert_eq!(controller.click(engine.graph(), &source, &mut sink, "p1"), Ok(false));
    // Embedded data is not consulted by the file source
    assert_eq!(controller.click(engine.graph(), &source, &mut sink, "t1"), Ok(false));

    assert_eq!(sink.views.len(), 1);
    assert_eq!(sink.views[0].title, "Sidorov B.");
}

#[test]
fn interactions_never_touch_visibility() {
    let engine = engine();
    let mut controller = InteractionController::new();
    let mut sink = CollectingSink::default();
    let counts = engine.visible_counts().clone();

    controller.hover_enter(engine.graph(), "t1").unwrap();
    controller.click(engine.graph(), &EmbeddedAttributes, &mut sink, "t1").unwrap();
    controller.hover_leave();

    assert_eq!(engine.visible_counts(), &counts);
    assert!(!engine.is_stale());
}
