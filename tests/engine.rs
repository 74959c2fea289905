use graph_cluster_filter::cluster::CountIndex;
use graph_cluster_filter::data::Snapshot;
use graph_cluster_filter::filter::FilterState;
use graph_cluster_filter::graph::GraphStore;
use graph_cluster_filter::{FilterEngine, FilterError};

/// Catalog {A: 3 nodes, B: 2 nodes, C: no nodes}
const SNAPSHOT: &str = r#"{
    "nodes": [
        {"key": "a1", "label": "Alpha 1", "cluster": "A", "tag": "Person"},
        {"key": "a2", "label": "Alpha 2", "cluster": "A", "tag": "Person"},
        {"key": "a3", "label": "Alpha 3", "cluster": "A", "tag": "Tool"},
        {"key": "b1", "label": "Beta 1", "cluster": "B", "tag": "Person"},
        {"key": "b2", "label": "Beta 2", "cluster": "B", "tag": "Tool"}
    ],
    "edges": [["a1", "a3"], ["a2", "a3"], ["b1", "b2"], ["a1", "b1"]],
    "clusters": [
        {"key": "A", "clusterLabel": "Alpha"},
        {"key": "B", "clusterLabel": "Beta"},
        {"key": "C", "clusterLabel": "Empty"}
    ],
    "tags": [{"key": "Person"}, {"key": "Tool"}]
}"#;

fn snapshot() -> Snapshot {
    Snapshot::from_json_str(SNAPSHOT, &[]).expect("snapshot should load")
}

fn engine_with(keys: &[&str]) -> FilterEngine {
    let snapshot = snapshot();
    let filter = FilterState::with_enabled(&snapshot.catalog, keys.iter().copied()).unwrap();
    FilterEngine::from_snapshot(snapshot, filter)
}

fn hidden_flags(engine: &FilterEngine) -> Vec<bool> {
    let graph = engine.graph();
    (0..graph.node_count() as u32).map(|i| graph.is_hidden(i)).collect()
}

fn assert_consistent(engine: &FilterEngine) {
    let visible: &CountIndex = engine.visible_counts();
    assert_eq!(visible.sum(), engine.graph().visible_node_count());
    for (cluster, count) in visible.iter() {
        assert!(count <= engine.totals().count(cluster.as_str()));
    }
}

#[test]
fn initial_selection_scenario() {
    let engine = engine_with(&["A"]);

    assert_eq!(engine.visible_counts().count("A"), 3);
    assert_eq!(engine.visible_counts().count("B"), 0);
    assert_eq!(engine.totals().get("A"), Some(3));
    assert_eq!(engine.totals().get("B"), Some(2));
    assert_eq!(engine.max_total(), 3);
    assert!(!engine.is_stale());
    assert_consistent(&engine);
}

#[test]
fn empty_cluster_is_absent_from_totals() {
    let engine = engine_with(&["A"]);
    assert_eq!(engine.totals().get("C"), None);
    assert_eq!(engine.totals().len(), 2);
    assert!(engine.catalog().contains("C"));
}

#[test]
fn toggle_applies_on_next_frame() {
    let mut engine = engine_with(&["A"]);

    assert_eq!(engine.toggle("B"), Ok(true));
    // Same tick: still the old counts
    assert!(engine.is_stale());
    assert_eq!(engine.visible_counts().count("B"), 0);

    let report = engine.on_frame().expect("recompute should run");
    assert!(!engine.is_stale());
    assert_eq!(engine.visible_counts().count("A"), 3);
    assert_eq!(engine.visible_counts().count("B"), 2);
    assert_eq!(report.visible_nodes, 5);
    assert_eq!(report.visible_edges, 4);
    assert_eq!(report.changed, 2);
    assert_consistent(&engine);
}

#[test]
fn frame_without_changes_does_nothing() {
    let mut engine = engine_with(&["A"]);
    let revision = engine.revision();
    assert!(engine.on_frame().is_none());
    assert_eq!(engine.revision(), revision);
}

#[test]
fn toggles_within_one_frame_coalesce() {
    let mut engine = engine_with(&["A"]);
    let revision = engine.revision();

    engine.toggle("B").unwrap();
    engine.toggle("A").unwrap();
    engine.toggle("B").unwrap();
    engine.toggle("B").unwrap();

    let report = engine.on_frame().unwrap();
    assert_eq!(report.revision, revision + 1);
    assert!(engine.on_frame().is_none());

    // Latest state is {B}
    assert_eq!(engine.visible_counts().count("A"), 0);
    assert_eq!(engine.visible_counts().count("B"), 2);
}

#[test]
fn double_toggle_converges_to_original() {
    let mut engine = engine_with(&["A"]);
    let filter = engine.filter().clone();
    let counts = engine.visible_counts().clone();
    let flags = hidden_flags(&engine);

    engine.toggle("A").unwrap();
    engine.on_frame();
    assert_eq!(engine.visible_counts().count("A"), 0);
    engine.toggle("A").unwrap();
    engine.on_frame();

    assert_eq!(engine.filter(), &filter);
    assert_eq!(engine.visible_counts(), &counts);
    assert_eq!(hidden_flags(&engine), flags);

    // Toggle and toggle back inside one frame
    engine.toggle("B").unwrap();
    engine.toggle("B").unwrap();
    engine.on_frame();
    assert_eq!(engine.visible_counts(), &counts);
    assert_eq!(hidden_flags(&engine), flags);
}

#[test]
fn unknown_cluster_changes_nothing() {
    let mut engine = engine_with(&["A"]);
    let filter = engine.filter().clone();
    let totals = engine.totals().clone();
    let counts = engine.visible_counts().clone();

    assert_eq!(engine.toggle("Z"), Err(FilterError::UnknownCluster("Z".to_string())));
    assert!(!engine.is_stale());
    assert!(engine.on_frame().is_none());

    assert_eq!(engine.filter(), &filter);
    assert_eq!(engine.totals(), &totals);
    assert_eq!(engine.visible_counts(), &counts);
}

#[test]
fn select_all_shows_everything() {
    let mut engine = engine_with(&[]);
    assert_eq!(engine.graph().visible_node_count(), 0);

    engine.select_all();
    engine.on_frame();

    assert_eq!(engine.visible_counts(), engine.totals());
    assert!(hidden_flags(&engine).iter().all(|hidden| !hidden));
    assert_eq!(engine.graph().visible_edge_count(), engine.graph().edge_count());
    assert_consistent(&engine);
}

#[test]
fn clear_all_hides_everything() {
    let mut engine = engine_with(&["A", "B", "C"]);
    engine.clear_all();
    engine.on_frame();

    for cluster in engine.catalog().ids() {
        assert_eq!(engine.visible_counts().count(cluster.as_str()), 0);
    }
    assert!(engine.visible_counts().is_empty());
    assert!(hidden_flags(&engine).iter().all(|hidden| *hidden));
    assert_eq!(engine.graph().visible_edge_count(), 0);
    assert_consistent(&engine);
}

#[test]
fn tag_filter_cuts_across_clusters() {
    let mut engine = engine_with(&["A", "B"]);

    assert_eq!(engine.toggle_tag("Tool"), Ok(false));
    engine.on_frame();
    assert_eq!(engine.visible_counts().count("A"), 2);
    assert_eq!(engine.visible_counts().count("B"), 1);
    assert_consistent(&engine);

    assert_eq!(
        engine.toggle_tag("Robot"),
        Err(FilterError::UnknownTag("Robot".to_string()))
    );

    engine.toggle_tag("Tool").unwrap();
    engine.on_frame();
    assert_eq!(engine.visible_counts(), engine.totals());
}

#[test]
fn cluster_rows_follow_counts() {
    let mut engine = engine_with(&["A", "B"]);
    engine.toggle("B").unwrap();
    engine.on_frame();

    let rows = engine.cluster_rows();
    // C has no nodes and is not drawn
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id.as_str(), "A");
    assert_eq!(rows[0].bar_width, 100.0);
    assert_eq!(rows[0].visible_share, 100.0);
    assert_eq!(rows[0].caption, "3 pages");
    assert!(rows[0].enabled);

    assert_eq!(rows[1].label, "Beta");
    assert!((rows[1].bar_width - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(rows[1].visible_share, 0.0);
    assert_eq!(rows[1].caption, "2 pages (only 0 visible)");
    assert!(!rows[1].enabled);

    let header = engine.panel_header();
    assert_eq!((header.enabled, header.total), (1, 3));
    assert!(header.show_counter());
}

#[test]
fn degenerate_snapshot_yields_empty_indices() {
    let snapshot = Snapshot::from_json_str("{}", &[]).unwrap();
    let filter = FilterState::all(&snapshot.catalog);
    let mut engine = FilterEngine::from_snapshot(snapshot, filter);

    assert_eq!(engine.max_total(), 0);
    assert!(engine.totals().is_empty());
    assert!(engine.visible_counts().is_empty());
    assert!(engine.cluster_rows().is_empty());

    engine.select_all();
    let report = engine.on_frame().unwrap();
    assert_eq!(report.visible_nodes, 0);
}

#[test]
fn single_cluster_max_is_its_count() {
    let snapshot = Snapshot::from_json_str(
        r#"{"nodes": [{"key": "x", "cluster": "only"}, {"key": "y", "cluster": "only"}],
            "clusters": [{"key": "only"}]}"#,
        &[],
    )
    .unwrap();
    let filter = FilterState::all(&snapshot.catalog);
    let engine = FilterEngine::from_snapshot(snapshot, filter);

    assert_eq!(engine.max_total(), 2);
    assert_eq!(engine.cluster_rows()[0].bar_width, 100.0);
}
