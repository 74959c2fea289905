//! Compressed sparse adjacency used by the snapshot store

use serde::{Deserialize, Serialize};

use super::NodeIndex;

/// Compressed sparse representation of one direction of a graph's edges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's edges begin
    /// offsets[i] to offsets[i+1] defines the edge range for node i
    pub offsets: Vec<u32>,

    /// Edge array: concatenated lists of target nodes
    pub edges: Vec<NodeIndex>,
}

impl CompressedGraph {
    /// Create a new graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            offsets: Vec::with_capacity(node_count + 1),
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Flatten per-node adjacency lists into the compressed layout
    pub fn from_adjacency(mut lists: Vec<Vec<NodeIndex>>) -> Self {
        let edge_count = lists.iter().map(|list| list.len()).sum();
        let mut graph = Self::with_capacity(lists.len(), edge_count);

        graph.offsets.push(0);
        let mut offset = 0;
        for list in &mut lists {
            // Sorted so neighbor lists come out ordered
            list.sort_unstable();
            offset += list.len() as u32;
            graph.edges.extend_from_slice(list);
            graph.offsets.push(offset);
        }

        graph
    }

    /// Get the edge targets of a node
    pub fn targets(&self, node: NodeIndex) -> &[NodeIndex] {
        let node = node as usize;
        if node >= self.node_count {
            return &[];
        }
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Total number of stored edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_flattened_and_sorted() {
        let graph = CompressedGraph::from_adjacency(vec![vec![2, 1], vec![], vec![0]]);
        assert_eq!(graph.offsets, vec![0, 2, 2, 3]);
        assert_eq!(graph.targets(0), &[1, 2]);
        assert!(graph.targets(1).is_empty());
        assert_eq!(graph.targets(2), &[0]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn out_of_range_node_has_no_targets() {
        let graph = CompressedGraph::from_adjacency(vec![vec![0]]);
        assert!(graph.targets(7).is_empty());
    }
}
