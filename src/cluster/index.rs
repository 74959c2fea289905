//! Per-cluster node counts

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cluster::ClusterId;
use crate::graph::GraphStore;

/// Mapping from cluster to node count.
///
/// Clusters without nodes have no entry; `count` reads them as zero while
/// `get` keeps absence visible to callers that need to tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountIndex {
    counts: BTreeMap<ClusterId, usize>,
}

impl CountIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one node to a cluster's count
    pub fn increment(&mut self, cluster: &ClusterId) {
        *self.counts.entry(cluster.clone()).or_insert(0) += 1;
    }

    /// Count for a cluster, or `None` when the cluster has no entry
    pub fn get(&self, cluster: &str) -> Option<usize> {
        self.counts.get(cluster).copied()
    }

    /// Count for a cluster, zero when absent
    pub fn count(&self, cluster: &str) -> usize {
        self.get(cluster).unwrap_or(0)
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.counts.contains_key(cluster)
    }

    /// Largest count in the index (zero when empty)
    pub fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn sum(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClusterId, usize)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }
}

/// Total node count per cluster, computed once per snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterIndex {
    totals: CountIndex,
    max_total: usize,
}

impl ClusterIndex {
    /// Count every node of the store by cluster, ignoring hidden flags
    pub fn build<G: GraphStore + ?Sized>(graph: &G) -> Self {
        let mut totals = CountIndex::new();
        graph.for_each_node(&mut |_, record, _| totals.increment(&record.cluster));

        let max_total = totals.max();
        log::debug!("Indexed {} clusters, largest has {} nodes", totals.len(), max_total);

        Self { totals, max_total }
    }

    pub fn totals(&self) -> &CountIndex {
        &self.totals
    }

    /// Largest total across clusters, the 100% reference for bar widths
    pub fn max_total(&self) -> usize {
        self.max_total
    }

    pub fn total(&self, cluster: &str) -> Option<usize> {
        self.totals.get(cluster)
    }
}
