//! Filter state: which clusters (and tags) are enabled for display

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cluster::{ClusterCatalog, ClusterId, TagCatalog};
use crate::error::FilterError;

/// User-controlled set of enabled clusters, plus the orthogonal tag filter.
///
/// Every enabled cluster is a catalog key. An empty set means nothing is
/// selected. Tags are tracked the other way round: only disabled tags are
/// stored, so a fresh state lets every tag through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    clusters: BTreeSet<ClusterId>,
    disabled_tags: BTreeSet<String>,
}

impl FilterState {
    /// Nothing selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every catalog cluster selected
    pub fn all(catalog: &ClusterCatalog) -> Self {
        let mut state = Self::empty();
        state.select_all(catalog);
        state
    }

    /// Build a state from explicit keys, validating each against the catalog
    pub fn with_enabled<'a>(
        catalog: &ClusterCatalog,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, FilterError> {
        let mut state = Self::empty();
        for key in keys {
            let id = catalog
                .resolve(key)
                .ok_or_else(|| FilterError::UnknownCluster(key.to_string()))?;
            state.clusters.insert(id.clone());
        }
        Ok(state)
    }

    /// Flip a cluster on or off. Returns the new enabled flag.
    pub fn toggle(&mut self, catalog: &ClusterCatalog, cluster: &str) -> Result<bool, FilterError> {
        let id = catalog
            .resolve(cluster)
            .ok_or_else(|| FilterError::UnknownCluster(cluster.to_string()))?;

        if self.clusters.remove(cluster) {
            Ok(false)
        } else {
            self.clusters.insert(id.clone());
            Ok(true)
        }
    }

    /// Enable every cluster of the catalog
    pub fn select_all(&mut self, catalog: &ClusterCatalog) {
        self.clusters = catalog.ids().cloned().collect();
    }

    /// Disable every cluster
    pub fn clear_all(&mut self) {
        self.clusters.clear();
    }

    /// Flip a tag on or off. Returns the new enabled flag.
    pub fn toggle_tag(&mut self, tags: &TagCatalog, tag: &str) -> Result<bool, FilterError> {
        if !tags.contains(tag) {
            return Err(FilterError::UnknownTag(tag.to_string()));
        }

        if self.disabled_tags.remove(tag) {
            Ok(true)
        } else {
            self.disabled_tags.insert(tag.to_string());
            Ok(false)
        }
    }

    pub fn is_enabled(&self, cluster: &str) -> bool {
        self.clusters.contains(cluster)
    }

    /// Untagged nodes always pass the tag filter
    pub fn is_tag_enabled(&self, tag: Option<&str>) -> bool {
        tag.map_or(true, |tag| !self.disabled_tags.contains(tag))
    }

    /// Whether a node with the given cluster and tag should be drawn
    pub fn admits(&self, cluster: &str, tag: Option<&str>) -> bool {
        self.is_enabled(cluster) && self.is_tag_enabled(tag)
    }

    pub fn enabled_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
