//! Configuration management for the cluster filter engine

use std::path::PathBuf;

use crate::cluster::{ClusterCatalog, PALETTE};
use crate::error::FilterError;
use crate::filter::FilterState;

/// Which clusters are enabled when a snapshot is first shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSelection {
    /// Nothing selected; every node starts hidden
    Empty,

    /// Every catalog cluster selected
    All,

    /// Only the listed cluster keys
    Only(Vec<String>),
}

/// Default configuration for the cluster filter engine
#[derive(Debug, Clone)]
pub struct Config {
    /// Filter state to start from
    pub initial_selection: InitialSelection,

    /// Directory where clicked profiles are written
    pub profile_dir: PathBuf,

    /// Colors assigned to clusters that do not carry their own
    pub palette: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_selection: InitialSelection::All,
            profile_dir: PathBuf::from("profiles"),
            palette: PALETTE.iter().map(|color| color.to_string()).collect(),
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(initial_selection: InitialSelection, profile_dir: PathBuf, palette: Vec<String>) -> Self {
        Self {
            initial_selection,
            profile_dir,
            palette,
        }
    }

    /// Materialize the initial selection against a catalog
    pub fn initial_filter(&self, catalog: &ClusterCatalog) -> Result<FilterState, FilterError> {
        match &self.initial_selection {
            InitialSelection::Empty => Ok(FilterState::empty()),
            InitialSelection::All => Ok(FilterState::all(catalog)),
            InitialSelection::Only(keys) => FilterState::with_enabled(catalog, keys.iter().map(String::as_str)),
        }
    }
}
