//! Cluster catalog and cluster-level indices

pub mod index;
pub mod metrics;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use index::{ClusterIndex, CountIndex};

/// Default color palette, assigned by catalog position to clusters without a color
pub const PALETTE: &[&str] = &[
    "#001219", "#005f73", "#0a9396", "#94d2bd", "#e9d8a6", "#ee9b00", "#ca6702", "#bb3e03",
    "#ae2012", "#9b2226",
];

/// Identifier of a cluster in the catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClusterId {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ClusterId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for ClusterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named category partitioning the nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Unique identifier for this cluster
    pub id: ClusterId,

    /// Human-readable label shown next to the checkbox
    pub label: String,

    /// Display color (CSS hex string)
    pub color: String,
}

/// Pick a palette color for the n-th cluster, wrapping around the palette
pub fn palette_color(n: usize, palette: &[String]) -> String {
    if palette.is_empty() {
        return PALETTE[n % PALETTE.len()].to_string();
    }
    palette[n % palette.len()].clone()
}

/// Closed set of clusters supplied with a snapshot.
///
/// The filter engine only ever reads it; clusters are never created or
/// removed after load.
#[derive(Debug, Clone, Default)]
pub struct ClusterCatalog {
    clusters: Vec<Cluster>,
    positions: HashMap<ClusterId, usize>,
}

impl ClusterCatalog {
    /// Build a catalog, rejecting duplicate keys.
    ///
    /// On a duplicate, the offending key is returned.
    pub fn new(clusters: Vec<Cluster>) -> Result<Self, ClusterId> {
        let mut positions = HashMap::with_capacity(clusters.len());
        for (pos, cluster) in clusters.iter().enumerate() {
            if positions.insert(cluster.id.clone(), pos).is_some() {
                return Err(cluster.id.clone());
            }
        }
        Ok(Self { clusters, positions })
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Cluster> {
        self.positions.get(id).map(|&pos| &self.clusters[pos])
    }

    /// Resolve a raw key to the catalog's own identifier
    pub fn resolve(&self, id: &str) -> Option<&ClusterId> {
        self.get(id).map(|cluster| &cluster.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ClusterId> {
        self.clusters.iter().map(|cluster| &cluster.id)
    }
}

/// Node category (e.g. person or project) with its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub image: Option<String>,
}

/// Closed set of tags supplied with a snapshot
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Build a tag catalog, returning the first duplicate key on conflict
    pub fn new(tags: Vec<Tag>) -> Result<Self, String> {
        for (i, tag) in tags.iter().enumerate() {
            if tags[..i].iter().any(|other| other.key == tag.key) {
                return Err(tag.key.clone());
            }
        }
        Ok(Self { tags })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
