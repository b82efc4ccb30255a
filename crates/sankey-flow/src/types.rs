//! Core flow and graph types
//!
//! This module contains the fundamental types for describing flows between
//! named entities and the graph shape the diagram renderer consumes. These
//! types are designed to be:
//! 1. Serializable in the renderer's wire shape (name-keyed nodes,
//!    index-keyed links)
//! 2. Immutable once built; the renderer only reads them
//! 3. Checkable: any graph can be validated regardless of where it came from

use crate::error::{FlowError, FlowResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One observed quantity flowing from a named source entity to a named
/// target entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Entity the quantity flows out of
    pub source: String,
    /// Entity the quantity flows into
    pub target: String,
    /// Magnitude of the flow, non-negative
    pub value: f64,
}

/// A distinct entity appearing in the flow dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNode {
    /// Display name, unique within a graph
    pub name: String,
}

/// A directed, weighted edge between two nodes
///
/// `source` and `target` are positions in the graph's node list. The field
/// names match the JSON document the renderer expects, so this struct
/// serializes directly onto the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    /// Index of the source node
    pub source: usize,
    /// Index of the target node
    pub target: usize,
    /// Magnitude of the flow, drives the rendered link width
    pub value: f64,
}

/// The renderer-ready graph: unique nodes in first-seen order plus links
/// referencing them by index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyGraph {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

impl SankeyGraph {
    /// Check the structural invariants the renderer relies on.
    ///
    /// Every link index must land inside the node list, node names must be
    /// unique and non-empty, and link values must be finite and
    /// non-negative. Graphs built by [`crate::normalizer::normalize`]
    /// always pass; documents deserialized from elsewhere are checked
    /// before being trusted.
    pub fn validate(&self) -> FlowResult<()> {
        let mut names = HashSet::new();
        for node in &self.nodes {
            if node.name.trim().is_empty() {
                return Err(FlowError::InvalidData("node with empty name".to_string()));
            }
            if !names.insert(node.name.as_str()) {
                return Err(FlowError::InvalidData(format!(
                    "duplicate node name '{}'",
                    node.name
                )));
            }
        }

        for (i, link) in self.links.iter().enumerate() {
            if link.source >= self.nodes.len() || link.target >= self.nodes.len() {
                return Err(FlowError::InvalidData(format!(
                    "link {} references a node index outside 0..{}",
                    i,
                    self.nodes.len()
                )));
            }
            if !link.value.is_finite() || link.value < 0.0 {
                return Err(FlowError::InvalidData(format!(
                    "link {} has invalid value {}",
                    i, link.value
                )));
            }
        }

        Ok(())
    }
}
