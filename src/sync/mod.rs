//! Visibility synchronization between the filter state and the graph store

pub mod schedule;

use serde::Serialize;

use crate::cluster::CountIndex;
use crate::filter::FilterState;
use crate::graph::{GraphStore, NodeIndex};

pub use schedule::RecomputeSlot;

/// Outcome of one applied recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Monotonic counter, bumped on every recomputation
    pub revision: u64,

    /// Nodes left visible
    pub visible_nodes: usize,

    /// Edges whose endpoints are both visible
    pub visible_edges: usize,

    /// Nodes whose hidden flag flipped
    pub changed: usize,
}

/// Owns the graph store and derives hidden flags and visible counts from a
/// filter state.
///
/// Holding the store by value makes this the only writer of hidden flags;
/// everything else reads through [`VisibilitySynchronizer::graph`].
#[derive(Debug)]
pub struct VisibilitySynchronizer<G> {
    graph: G,
    visible: CountIndex,
    slot: RecomputeSlot,
    revision: u64,
}

impl<G: GraphStore> VisibilitySynchronizer<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            visible: CountIndex::new(),
            slot: RecomputeSlot::new(),
            revision: 0,
        }
    }

    /// Read-only view of the store
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Visible nodes per cluster as of the last applied recomputation
    pub fn visible_counts(&self) -> &CountIndex {
        &self.visible
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Queue a recomputation for the next frame. Returns false when one was
    /// already queued, in which case the two coalesce.
    pub fn schedule(&mut self) -> bool {
        self.slot.request()
    }

    /// Whether a queued recomputation has not run yet
    pub fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }

    /// Run the queued recomputation, if any, against the filter as it is now
    pub fn run_pending(&mut self, filter: &FilterState) -> Option<SyncReport> {
        if !self.slot.take() {
            return None;
        }
        Some(self.recompute(filter))
    }

    /// Rewrite every hidden flag from `filter` and rebuild visible counts.
    ///
    /// Runs to completion before returning, so two recomputations can never
    /// interleave and the flags always match a single filter state.
    pub fn recompute(&mut self, filter: &FilterState) -> SyncReport {
        let mut changed = 0;

        for index in 0..self.graph.node_count() as NodeIndex {
            let Some(record) = self.graph.node(index) else {
                continue;
            };
            let hidden = !filter.admits(record.cluster.as_str(), record.attributes.tag.as_deref());
            if self.graph.is_hidden(index) != hidden {
                self.graph.set_hidden(index, hidden);
                changed += 1;
            }
        }

        // Counts are read back from the store, not from the filter
        let mut visible = CountIndex::new();
        self.graph.for_each_node(&mut |_, record, hidden| {
            if !hidden {
                visible.increment(&record.cluster);
            }
        });

        self.visible = visible;
        self.revision += 1;

        let report = SyncReport {
            revision: self.revision,
            visible_nodes: self.visible.sum(),
            visible_edges: self.graph.visible_edge_count(),
            changed,
        };

        log::debug!(
            "Visibility revision {}: {} nodes / {} edges visible, {} flags changed",
            report.revision,
            report.visible_nodes,
            report.visible_edges,
            report.changed
        );

        report
    }
}
