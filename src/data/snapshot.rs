//! Graph snapshot loading and load-time validation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::cluster::{palette_color, Cluster, ClusterCatalog, ClusterId, Tag, TagCatalog};
use crate::data::auxiliary::interests_from_value;
use crate::error::SnapshotError;
use crate::graph::{GraphBuilder, NodeAttributes, NodeRecord, SnapshotGraph};

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<(RawKey, RawKey)>,
    #[serde(default)]
    clusters: Vec<RawCluster>,
    #[serde(default)]
    tags: Vec<RawTag>,
}

/// Node keys show up both as strings and as integers in exported files
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Number(i64),
}

impl RawKey {
    fn into_key(self) -> String {
        match self {
            Self::Text(key) => key,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    key: RawKey,
    #[serde(default)]
    label: Option<String>,
    cluster: RawKey,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default, rename = "URL")]
    url: Option<String>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default, rename = "professionalInterests")]
    interests: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawCluster {
    key: RawKey,
    #[serde(default, rename = "clusterLabel")]
    label: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    key: String,
    #[serde(default)]
    image: Option<String>,
}

/// A validated snapshot: graph store plus its cluster and tag catalogs
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub graph: SnapshotGraph,
    pub catalog: ClusterCatalog,
    pub tags: TagCatalog,
}

impl Snapshot {
    /// Parse and validate a snapshot from JSON text
    pub fn from_json_str(raw: &str, palette: &[String]) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(raw)?;
        Self::from_raw(raw, palette)
    }

    fn from_raw(raw: RawSnapshot, palette: &[String]) -> Result<Self, SnapshotError> {
        let clusters = raw
            .clusters
            .into_iter()
            .enumerate()
            .map(|(n, cluster)| {
                let key = cluster.key.into_key();
                Cluster {
                    label: cluster.label.unwrap_or_else(|| key.clone()),
                    color: cluster.color.unwrap_or_else(|| palette_color(n, palette)),
                    id: ClusterId::new(key),
                }
            })
            .collect();
        let catalog = ClusterCatalog::new(clusters)
            .map_err(|id| SnapshotError::DuplicateCluster(id.to_string()))?;

        let tags = TagCatalog::new(
            raw.tags
                .into_iter()
                .map(|tag| Tag { key: tag.key, image: tag.image })
                .collect(),
        )
        .map_err(SnapshotError::DuplicateTag)?;

        let mut builder = GraphBuilder::with_capacity(raw.nodes.len());
        for node in raw.nodes {
            let key = node.key.into_key();
            let cluster_key = node.cluster.into_key();
            let cluster = catalog
                .resolve(&cluster_key)
                .cloned()
                .ok_or_else(|| SnapshotError::UnknownCluster {
                    node: key.clone(),
                    cluster: cluster_key.clone(),
                })?;

            if let Some(tag) = node.tag.as_deref() {
                if !tags.is_empty() && !tags.contains(tag) {
                    log::warn!("Node {} has tag {} missing from the tag catalog", key, tag);
                }
            }

            let interests = node
                .interests
                .and_then(|value| interests_from_value(&key, &value));

            let record = NodeRecord {
                label: node.label.unwrap_or_else(|| key.clone()),
                cluster,
                attributes: NodeAttributes {
                    tag: node.tag,
                    url: node.url.filter(|url| !url.is_empty()),
                    x: node.x,
                    y: node.y,
                    score: node.score,
                    interests,
                },
                key,
            };
            builder.add_node(record).map_err(SnapshotError::DuplicateNode)?;
        }

        for (src, dst) in raw.edges {
            builder.add_edge(&src.into_key(), &dst.into_key());
        }

        if builder.skipped_edges() > 0 {
            log::warn!("Dropped {} edges with unknown endpoints", builder.skipped_edges());
        }

        Ok(Self {
            graph: builder.build(),
            catalog,
            tags,
        })
    }
}

/// Load a snapshot file from disk
pub fn load_snapshot(path: &Path, palette: &[String]) -> Result<Snapshot> {
    log::info!("Reading snapshot file: {}", path.display());

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json_str(&raw, palette)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;

    log::info!(
        "Loaded snapshot with {} nodes, {} edges and {} clusters",
        snapshot.graph.nodes().len(),
        crate::graph::GraphStore::edge_count(&snapshot.graph),
        snapshot.catalog.len()
    );

    Ok(snapshot)
}
