//! In-memory graph store backed by compressed adjacency

use std::collections::HashMap;

use crate::graph::{CompressedGraph, GraphStore, NodeIndex, NodeRecord};

/// Immutable-shape graph loaded from a snapshot, with mutable hidden flags
#[derive(Debug, Clone)]
pub struct SnapshotGraph {
    nodes: Vec<NodeRecord>,
    key_to_index: HashMap<String, NodeIndex>,
    hidden: Vec<bool>,
    outgoing: CompressedGraph,
    incoming: CompressedGraph,
}

impl SnapshotGraph {
    pub(crate) fn from_parts(
        nodes: Vec<NodeRecord>,
        key_to_index: HashMap<String, NodeIndex>,
        outgoing: CompressedGraph,
        incoming: CompressedGraph,
    ) -> Self {
        let hidden = vec![false; nodes.len()];
        Self {
            nodes,
            key_to_index,
            hidden,
            outgoing,
            incoming,
        }
    }

    /// All node records in index order
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }
}

impl GraphStore for SnapshotGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.edge_count()
    }

    fn node(&self, index: NodeIndex) -> Option<&NodeRecord> {
        self.nodes.get(index as usize)
    }

    fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.key_to_index.get(key).copied()
    }

    fn is_hidden(&self, index: NodeIndex) -> bool {
        self.hidden.get(index as usize).copied().unwrap_or(true)
    }

    fn set_hidden(&mut self, index: NodeIndex, hidden: bool) {
        if let Some(flag) = self.hidden.get_mut(index as usize) {
            *flag = hidden;
        }
    }

    fn neighbors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self
            .outgoing
            .targets(index)
            .iter()
            .chain(self.incoming.targets(index))
            .copied()
            .filter(|&other| other != index)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    fn for_each_edge(&self, f: &mut dyn FnMut(NodeIndex, NodeIndex)) {
        for src in 0..self.outgoing.node_count as NodeIndex {
            for &dst in self.outgoing.targets(src) {
                f(src, dst);
            }
        }
    }
}
