//! View summary export

use anyhow::Result;
use serde_json::{json, to_string_pretty, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::engine::FilterEngine;
use crate::graph::GraphStore;

/// Build a JSON summary of what the engine currently shows
pub fn view_summary<G: GraphStore>(engine: &FilterEngine<G>) -> Value {
    let graph = engine.graph();
    let header = engine.panel_header();

    json!({
        "revision": engine.revision(),
        "stale": engine.is_stale(),
        "graph_stats": {
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "visible_node_count": graph.visible_node_count(),
            "visible_edge_count": graph.visible_edge_count(),
        },
        "cluster_stats": {
            "cluster_count": header.total,
            "enabled_cluster_count": header.enabled,
            "max_total": engine.max_total(),
            "totals": engine.totals(),
            "visible": engine.visible_counts(),
        },
        "clusters": engine.cluster_rows(),
    })
}

/// Save the view summary to `path`, creating parent directories
pub fn save_view_summary<G: GraphStore>(engine: &FilterEngine<G>, path: &Path) -> Result<()> {
    log::info!("Saving view summary to {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&view_summary(engine))?.as_bytes())?;

    Ok(())
}
