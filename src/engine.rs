//! Filter engine: the owned context tying catalog, index, filter and
//! synchronizer together

use crate::cluster::metrics::{self, ClusterRow, PanelHeader};
use crate::cluster::{ClusterCatalog, ClusterIndex, CountIndex, TagCatalog};
use crate::data::Snapshot;
use crate::error::FilterError;
use crate::filter::FilterState;
use crate::graph::{GraphStore, SnapshotGraph};
use crate::sync::{SyncReport, VisibilitySynchronizer};

/// Cluster filter engine for one graph snapshot.
///
/// Mutators update the filter state and queue a recomputation; the
/// recomputation itself runs on the next [`FilterEngine::on_frame`] call, once
/// the renderer has reconciled its own state. Until then
/// [`FilterEngine::visible_counts`] returns the previous values.
#[derive(Debug)]
pub struct FilterEngine<G: GraphStore = SnapshotGraph> {
    catalog: ClusterCatalog,
    tags: TagCatalog,
    index: ClusterIndex,
    filter: FilterState,
    sync: VisibilitySynchronizer<G>,
}

impl FilterEngine<SnapshotGraph> {
    /// Engine over a loaded snapshot
    pub fn from_snapshot(snapshot: Snapshot, filter: FilterState) -> Self {
        Self::new(snapshot.graph, snapshot.catalog, snapshot.tags, filter)
    }
}

impl<G: GraphStore> FilterEngine<G> {
    /// Build the engine and bring the store in line with `filter` right away.
    ///
    /// Keys in `filter` must come from `catalog`; [`FilterState`] constructors
    /// enforce that.
    pub fn new(graph: G, catalog: ClusterCatalog, tags: TagCatalog, filter: FilterState) -> Self {
        let index = ClusterIndex::build(&graph);
        let mut sync = VisibilitySynchronizer::new(graph);
        let report = sync.recompute(&filter);

        log::info!(
            "Filter engine ready: {} clusters, {} of {} nodes visible",
            catalog.len(),
            report.visible_nodes,
            sync.graph().node_count()
        );

        Self {
            catalog,
            tags,
            index,
            filter,
            sync,
        }
    }

    /// Flip one cluster. Unknown clusters are reported and change nothing.
    pub fn toggle(&mut self, cluster: &str) -> Result<bool, FilterError> {
        let enabled = self.filter.toggle(&self.catalog, cluster)?;
        log::debug!("Cluster {} {}", cluster, if enabled { "enabled" } else { "disabled" });
        self.sync.schedule();
        Ok(enabled)
    }

    /// Enable every cluster in the catalog
    pub fn select_all(&mut self) {
        self.filter.select_all(&self.catalog);
        log::debug!("All {} clusters enabled", self.catalog.len());
        self.sync.schedule();
    }

    /// Disable every cluster
    pub fn clear_all(&mut self) {
        self.filter.clear_all();
        log::debug!("All clusters disabled");
        self.sync.schedule();
    }

    /// Flip one tag. Unknown tags are reported and change nothing.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<bool, FilterError> {
        let enabled = self.filter.toggle_tag(&self.tags, tag)?;
        log::debug!("Tag {} {}", tag, if enabled { "enabled" } else { "disabled" });
        self.sync.schedule();
        Ok(enabled)
    }

    /// Render tick: apply the pending recomputation, if any.
    ///
    /// Reads the filter as it is now, so every mutation since the previous
    /// frame is folded into a single pass.
    pub fn on_frame(&mut self) -> Option<SyncReport> {
        let report = self.sync.run_pending(&self.filter)?;
        log::info!(
            "Applied filter revision {}: {} nodes, {} edges visible",
            report.revision,
            report.visible_nodes,
            report.visible_edges
        );
        Some(report)
    }

    /// True between a mutation and the frame that applies it
    pub fn is_stale(&self) -> bool {
        self.sync.is_pending()
    }

    pub fn graph(&self) -> &G {
        self.sync.graph()
    }

    pub fn catalog(&self) -> &ClusterCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Total nodes per cluster, fixed for the snapshot
    pub fn totals(&self) -> &CountIndex {
        self.index.totals()
    }

    pub fn max_total(&self) -> usize {
        self.index.max_total()
    }

    /// Visible nodes per cluster as of the last applied frame
    pub fn visible_counts(&self) -> &CountIndex {
        self.sync.visible_counts()
    }

    pub fn revision(&self) -> u64 {
        self.sync.revision()
    }

    /// Rows for the cluster panel, largest cluster first
    pub fn cluster_rows(&self) -> Vec<ClusterRow> {
        metrics::cluster_rows(&self.catalog, &self.index, self.visible_counts(), &self.filter)
    }

    pub fn panel_header(&self) -> PanelHeader {
        metrics::panel_header(&self.catalog, &self.filter)
    }
}
