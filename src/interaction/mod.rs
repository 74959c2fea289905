//! Pointer interaction contract: hover highlighting and profile clicks

pub mod profile;

use std::collections::BTreeSet;

use crate::data::AuxiliarySource;
use crate::error::FilterError;
use crate::graph::{GraphStore, NodeIndex};

pub use profile::{CollectingSink, HtmlFileSink, ProfileSink, ProfileView};

/// Cursor style requested from the rendering surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

/// Currently hovered node and the neighbors to highlight with it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub node: Option<String>,
    pub neighbors: BTreeSet<String>,
}

/// Translates hover and click events into highlight state and profile views.
///
/// Only reads the graph store; visibility and filter state stay untouched.
#[derive(Debug, Default)]
pub struct InteractionController {
    hover: HoverState,
    cursor: CursorStyle,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the hovered node, if any
    pub fn hovered(&self) -> Option<&str> {
        self.hover.node.as_deref()
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Pointer entered a node. Hidden nodes are ignored (returns false).
    pub fn hover_enter<G: GraphStore + ?Sized>(&mut self, graph: &G, key: &str) -> Result<bool, FilterError> {
        let index = resolve(graph, key)?;
        if graph.is_hidden(index) {
            return Ok(false);
        }

        let neighbors = graph
            .neighbors(index)
            .into_iter()
            .filter(|&other| !graph.is_hidden(other))
            .filter_map(|other| graph.node(other).map(|record| record.key.clone()))
            .collect();

        self.hover = HoverState {
            node: Some(key.to_string()),
            neighbors,
        };
        self.cursor = CursorStyle::Pointer;
        Ok(true)
    }

    /// Pointer left the hovered node
    pub fn hover_leave(&mut self) {
        self.hover = HoverState::default();
        self.cursor = CursorStyle::Default;
    }

    /// Clear the hover if a recomputation hid the hovered node
    pub fn drop_hidden<G: GraphStore + ?Sized>(&mut self, graph: &G) {
        let still_visible = self
            .hover
            .node
            .as_deref()
            .and_then(|key| graph.index_of(key))
            .map_or(false, |index| !graph.is_hidden(index));

        if self.hover.node.is_some() && !still_visible {
            self.hover_leave();
        }
    }

    /// Click on a node: hand a profile view to `sink` when the node is
    /// visible and has auxiliary data. Returns whether a profile was shown.
    pub fn click<G, S, K>(&self, graph: &G, source: &S, sink: &mut K, key: &str) -> Result<bool, FilterError>
    where
        G: GraphStore + ?Sized,
        S: AuxiliarySource + ?Sized,
        K: ProfileSink + ?Sized,
    {
        let index = resolve(graph, key)?;
        if graph.is_hidden(index) {
            return Ok(false);
        }
        let Some(record) = graph.node(index) else {
            return Ok(false);
        };

        match source.attributes(record) {
            Some(attributes) if !attributes.is_empty() => {
                sink.present(ProfileView::new(record.label.clone(), attributes));
                Ok(true)
            }
            _ => {
                log::debug!("Node {} has no profile data", key);
                Ok(false)
            }
        }
    }
}

fn resolve<G: GraphStore + ?Sized>(graph: &G, key: &str) -> Result<NodeIndex, FilterError> {
    graph
        .index_of(key)
        .ok_or_else(|| FilterError::UnknownNode(key.to_string()))
}
