//! Remote fallback dataset loading
//!
//! Some deployments serve an already-normalized graph as a static JSON
//! document. This module fetches such a document and validates its
//! invariants before anything downstream is allowed to see it.

use crate::error::FlowResult;
use crate::types::SankeyGraph;
use tracing::info;

/// Fetch a renderer-shape graph document from `url`.
///
/// A document with dangling link indices, duplicate node names or invalid
/// values is rejected. No retries: a failure means the file is unreachable
/// or malformed, not transient.
pub async fn fetch_graph(url: &str) -> FlowResult<SankeyGraph> {
    info!(url, "fetching remote sankey dataset");
    let response = reqwest::get(url).await?.error_for_status()?;
    let graph: SankeyGraph = response.json().await?;
    graph.validate()?;
    info!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "remote dataset loaded"
    );
    Ok(graph)
}
