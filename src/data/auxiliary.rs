//! Pluggable sources of per-node auxiliary data (interests)

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::graph::NodeRecord;

/// Auxiliary attributes shown in a profile, in display order
pub type Attributes = BTreeMap<String, String>;

/// Supplies auxiliary attributes for a node.
///
/// Lookups never fail: missing or malformed data is reported as `None`.
pub trait AuxiliarySource {
    fn attributes(&self, node: &NodeRecord) -> Option<Attributes>;
}

/// Reads the interests embedded in the node record itself
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAttributes;

impl AuxiliarySource for EmbeddedAttributes {
    fn attributes(&self, node: &NodeRecord) -> Option<Attributes> {
        node.attributes.interests.clone()
    }
}

/// Interests loaded from a separate JSON file keyed by node key
#[derive(Debug, Clone, Default)]
pub struct InterestsFile {
    records: HashMap<String, Attributes>,
}

impl InterestsFile {
    /// Parse an interests document. Bad records are skipped, not fatal.
    pub fn from_value(value: &Value) -> Self {
        let mut records = HashMap::new();

        let Some(object) = value.as_object() else {
            log::warn!("Interests data is not a JSON object, ignoring it");
            return Self { records };
        };

        for (key, entry) in object {
            if let Some(attributes) = interests_from_value(key, entry) {
                records.insert(key.clone(), attributes);
            }
        }

        Self { records }
    }

    /// Load interests from disk.
    ///
    /// A file that cannot be read or parsed yields an empty source.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(source) => {
                log::info!("Loaded interests for {} nodes from {}", source.len(), path.display());
                source
            }
            Err(err) => {
                log::warn!("Failed to load interests: {:#}", err);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON in {}", path.display()))?;
        Ok(Self::from_value(&value))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AuxiliarySource for InterestsFile {
    fn attributes(&self, node: &NodeRecord) -> Option<Attributes> {
        let found = self.records.get(&node.key).cloned();
        if found.is_none() {
            log::debug!("No auxiliary data for node {}", node.key);
        }
        found
    }
}

/// Convert a raw interests value into attributes.
///
/// Objects map name to value, arrays map position to value. Anything else is
/// malformed and degrades to `None`.
pub(crate) fn interests_from_value(node: &str, value: &Value) -> Option<Attributes> {
    let attributes: Attributes = match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(name, v)| scalar_text(v).map(|text| (name.clone(), text)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(i, v)| scalar_text(v).map(|text| (i.to_string(), text)))
            .collect(),
        Value::Null => return None,
        _ => {
            log::warn!("Malformed auxiliary data for node {}, ignoring it", node);
            return None;
        }
    };

    Some(attributes)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
