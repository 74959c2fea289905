//! Error types for the cluster filter engine

use thiserror::Error;

/// Invalid-reference conditions raised by filter and interaction operations.
///
/// None of these are fatal: the operation that reports one leaves all state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Cluster identifier is not part of the catalog
    #[error("unknown cluster `{0}`")]
    UnknownCluster(String),

    /// Tag key is not part of the tag catalog
    #[error("unknown tag `{0}`")]
    UnknownTag(String),

    /// Node key is not present in the graph store
    #[error("unknown node `{0}`")]
    UnknownNode(String),
}

/// Problems found while validating a graph snapshot at load time
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot text is not valid JSON for the expected layout
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two clusters share the same key
    #[error("duplicate cluster key `{0}`")]
    DuplicateCluster(String),

    /// Two tags share the same key
    #[error("duplicate tag key `{0}`")]
    DuplicateTag(String),

    /// Two nodes share the same key
    #[error("duplicate node key `{0}`")]
    DuplicateNode(String),

    /// A node points at a cluster the catalog does not define
    #[error("node `{node}` references unknown cluster `{cluster}`")]
    UnknownCluster { node: String, cluster: String },
}
