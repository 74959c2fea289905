//! Graph store contract and the in-memory snapshot store

pub mod builder;
pub mod compressed;
pub mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterId;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;
pub use store::SnapshotGraph;

/// Dense index of a node inside a store
pub type NodeIndex = u32;

/// Typed optional node attributes, validated when the snapshot is loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Tag key (e.g. `Person` or `Tool`)
    pub tag: Option<String>,

    /// External link for the node
    pub url: Option<String>,

    /// Precomputed layout position
    pub x: Option<f64>,
    pub y: Option<f64>,

    /// Size score used by the renderer
    pub score: Option<f64>,

    /// Embedded auxiliary data (interest name -> description)
    pub interests: Option<BTreeMap<String, String>>,
}

/// A node as held by the graph store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique key from the snapshot
    pub key: String,

    /// Display label
    pub label: String,

    /// The single cluster this node belongs to
    pub cluster: ClusterId,

    pub attributes: NodeAttributes,
}

/// Graph structure plus the per-node hidden flag.
///
/// The store owns the authoritative hidden flags. Inside this crate only the
/// visibility synchronizer holds the store mutably, so `set_hidden` has a
/// single writer.
pub trait GraphStore {
    /// Number of nodes in the store
    fn node_count(&self) -> usize;

    /// Number of edges in the store
    fn edge_count(&self) -> usize;

    /// Look up a node record by index
    fn node(&self, index: NodeIndex) -> Option<&NodeRecord>;

    /// Resolve a node key to its index
    fn index_of(&self, key: &str) -> Option<NodeIndex>;

    /// Current hidden flag of a node (unknown indices read as hidden)
    fn is_hidden(&self, index: NodeIndex) -> bool;

    /// Overwrite the hidden flag of a node
    fn set_hidden(&mut self, index: NodeIndex, hidden: bool);

    /// Nodes adjacent to `index` in either direction
    fn neighbors(&self, index: NodeIndex) -> Vec<NodeIndex>;

    /// Visit every edge as a `(source, target)` pair
    fn for_each_edge(&self, f: &mut dyn FnMut(NodeIndex, NodeIndex));

    /// Visit every node with its record and hidden flag
    fn for_each_node(&self, f: &mut dyn FnMut(NodeIndex, &NodeRecord, bool)) {
        for index in 0..self.node_count() as NodeIndex {
            if let Some(record) = self.node(index) {
                f(index, record, self.is_hidden(index));
            }
        }
    }

    /// Count of nodes whose hidden flag is false
    fn visible_node_count(&self) -> usize {
        let mut count = 0;
        self.for_each_node(&mut |_, _, hidden| {
            if !hidden {
                count += 1;
            }
        });
        count
    }

    /// Edges are visible when both endpoints are visible
    fn visible_edge_count(&self) -> usize {
        let mut count = 0;
        self.for_each_edge(&mut |src, dst| {
            if !self.is_hidden(src) && !self.is_hidden(dst) {
                count += 1;
            }
        });
        count
    }
}
