//! Diagram export functionality
//!
//! This module writes a normalized graph to disk in the exact JSON shape
//! the browser-side renderer loads: name-keyed nodes, index-keyed links.

use crate::error::FlowResult;
use crate::types::SankeyGraph;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes renderer-ready graph documents into an output directory.
pub struct DiagramExporter {
    output_path: PathBuf,
}

impl DiagramExporter {
    /// Create a new exporter targeting `output_path`.
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Export the graph for the web renderer.
    ///
    /// Creates the output directory if needed and writes
    /// `sankey_data.json` inside it. Returns the written path.
    pub fn export(&self, graph: &SankeyGraph) -> FlowResult<PathBuf> {
        fs::create_dir_all(&self.output_path)?;

        let json_content = serde_json::to_string_pretty(graph)?;
        let file_path = self.output_path.join("sankey_data.json");
        fs::write(&file_path, json_content)?;

        info!("Sankey data exported to {}", file_path.display());
        Ok(file_path)
    }
}
