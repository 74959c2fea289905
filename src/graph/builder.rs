//! Snapshot graph construction

use std::collections::HashMap;

use crate::graph::{CompressedGraph, NodeIndex, NodeRecord, SnapshotGraph};

/// Builder for incrementally constructing a SnapshotGraph
pub struct GraphBuilder {
    /// Mapping from string keys to node indices
    key_to_index: HashMap<String, NodeIndex>,

    /// Node records in insertion order
    nodes: Vec<NodeRecord>,

    /// Outgoing adjacency lists for each node
    outgoing: Vec<Vec<NodeIndex>>,

    /// Incoming adjacency lists for each node
    incoming: Vec<Vec<NodeIndex>>,

    /// Edges dropped because an endpoint was unknown
    skipped_edges: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            key_to_index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            outgoing: Vec::with_capacity(capacity),
            incoming: Vec::with_capacity(capacity),
            skipped_edges: 0,
        }
    }

    /// Add a node, returning its index.
    ///
    /// A key that is already present is handed back as the error.
    pub fn add_node(&mut self, record: NodeRecord) -> Result<NodeIndex, String> {
        if self.key_to_index.contains_key(&record.key) {
            return Err(record.key);
        }

        let idx = self.nodes.len() as NodeIndex;
        self.key_to_index.insert(record.key.clone(), idx);
        self.nodes.push(record);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());

        Ok(idx)
    }

    /// Add an edge between two known nodes.
    ///
    /// Returns false, and records the skip, if either endpoint is missing.
    pub fn add_edge(&mut self, src_key: &str, dst_key: &str) -> bool {
        let (Some(&src), Some(&dst)) = (self.key_to_index.get(src_key), self.key_to_index.get(dst_key)) else {
            log::warn!("Skipping edge {} -> {}: unknown endpoint", src_key, dst_key);
            self.skipped_edges += 1;
            return false;
        };

        self.outgoing[src as usize].push(dst);
        self.incoming[dst as usize].push(src);
        true
    }

    /// Number of edges rejected so far
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    /// Build the snapshot graph; every node starts visible
    pub fn build(self) -> SnapshotGraph {
        let outgoing = CompressedGraph::from_adjacency(self.outgoing);
        let incoming = CompressedGraph::from_adjacency(self.incoming);

        log::debug!(
            "Built snapshot graph with {} nodes and {} edges ({} skipped)",
            self.nodes.len(),
            outgoing.edge_count(),
            self.skipped_edges
        );

        SnapshotGraph::from_parts(self.nodes, self.key_to_index, outgoing, incoming)
    }
}
