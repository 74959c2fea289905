//! Cluster panel metrics: bar widths, ordering and captions

use itertools::Itertools;
use serde::Serialize;

use crate::cluster::{Cluster, ClusterCatalog, ClusterId, ClusterIndex, CountIndex};
use crate::filter::FilterState;

/// Everything the cluster panel needs to draw one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRow {
    pub id: ClusterId,
    pub label: String,
    pub color: String,

    /// Total nodes in the cluster
    pub total: usize,

    /// Nodes currently visible
    pub visible: usize,

    /// Whether the checkbox is ticked
    pub enabled: bool,

    /// Outer bar width in percent of the largest cluster
    pub bar_width: f64,

    /// Inner bar width in percent of this cluster's total
    pub visible_share: f64,

    /// Tooltip text, e.g. "12 pages (only 4 visible)"
    pub caption: String,
}

/// "enabled / total" counter shown in the panel title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelHeader {
    pub enabled: usize,
    pub total: usize,
}

impl PanelHeader {
    /// The counter is only displayed while some clusters are filtered out
    pub fn show_counter(&self) -> bool {
        self.enabled < self.total
    }
}

/// Width of a cluster's bar relative to the largest cluster
pub fn bar_width_percent(index: &ClusterIndex, cluster: &str) -> f64 {
    match index.total(cluster) {
        Some(total) if index.max_total() > 0 => 100.0 * total as f64 / index.max_total() as f64,
        _ => 0.0,
    }
}

/// Share of a cluster's nodes that are currently visible
pub fn visible_share_percent(index: &ClusterIndex, visible: &CountIndex, cluster: &str) -> f64 {
    match index.total(cluster) {
        Some(total) if total > 0 => 100.0 * visible.count(cluster) as f64 / total as f64,
        _ => 0.0,
    }
}

/// Tooltip caption for a cluster row
pub fn caption(total: usize, visible: usize) -> String {
    let plural = if total > 1 { "s" } else { "" };
    if visible != total {
        format!("{} page{} (only {} visible)", total, plural, visible)
    } else {
        format!("{} page{}", total, plural)
    }
}

/// Catalog clusters sorted by descending total; ties keep catalog order
pub fn sorted_clusters<'a>(catalog: &'a ClusterCatalog, index: &ClusterIndex) -> Vec<&'a Cluster> {
    catalog
        .iter()
        .sorted_by_key(|cluster| std::cmp::Reverse(index.totals().count(cluster.id.as_str())))
        .collect()
}

/// Build the rows of the cluster panel.
///
/// Clusters with no nodes are absent from the totals index and produce no row.
pub fn cluster_rows(
    catalog: &ClusterCatalog,
    index: &ClusterIndex,
    visible: &CountIndex,
    filter: &FilterState,
) -> Vec<ClusterRow> {
    sorted_clusters(catalog, index)
        .into_iter()
        .filter_map(|cluster| {
            let key = cluster.id.as_str();
            let total = index.total(key)?;
            let shown = visible.count(key);
            Some(ClusterRow {
                id: cluster.id.clone(),
                label: cluster.label.clone(),
                color: cluster.color.clone(),
                total,
                visible: shown,
                enabled: filter.is_enabled(key),
                bar_width: bar_width_percent(index, key),
                visible_share: visible_share_percent(index, visible, key),
                caption: caption(total, shown),
            })
        })
        .collect()
}

/// Panel title counter for the current filter
pub fn panel_header(catalog: &ClusterCatalog, filter: &FilterState) -> PanelHeader {
    PanelHeader {
        enabled: filter.enabled_count(),
        total: catalog.len(),
    }
}
