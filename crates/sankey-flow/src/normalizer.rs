//! Flow-record normalization into renderer-ready graphs
//!
//! The normalization is two-phase: first every distinct entity name is
//! enumerated in first-seen order, then each record becomes a link whose
//! endpoints are resolved to node indices. Enumerating names before
//! resolving references means records can arrive in any order; an entity
//! may show up as a target long before it ever appears as a source.

use crate::error::{FlowError, FlowResult};
use crate::types::{FlowRecord, SankeyGraph, SankeyLink, SankeyNode};
use std::collections::HashMap;
use tracing::debug;

/// Build a [`SankeyGraph`] from an ordered sequence of flow records.
///
/// The result is a pure function of the input: same records, same graph,
/// byte for byte. Node order determines the on-screen stacking order
/// downstream, so it is strictly the order each distinct name first
/// appears across the flattened (source, target) pairs. One link is
/// emitted per record; duplicate (source, target) pairs are kept as
/// separate links, not merged.
pub fn normalize(records: &[FlowRecord]) -> FlowResult<SankeyGraph> {
    for (index, record) in records.iter().enumerate() {
        validate_record(record, index)?;
    }

    // Phase 1: enumerate distinct entity names in first-seen order.
    let mut nodes: Vec<SankeyNode> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    for record in records {
        intern(&mut nodes, &mut index_by_name, &record.source);
        intern(&mut nodes, &mut index_by_name, &record.target);
    }

    // Phase 2: resolve names into node indices, one link per record. A
    // missing name here would be a logic fault in phase 1, not bad input.
    let links = records
        .iter()
        .map(|record| SankeyLink {
            source: index_by_name[record.source.as_str()],
            target: index_by_name[record.target.as_str()],
            value: record.value,
        })
        .collect();

    debug!(
        nodes = nodes.len(),
        links = records.len(),
        "normalized flow records"
    );
    Ok(SankeyGraph { nodes, links })
}

fn intern(nodes: &mut Vec<SankeyNode>, index_by_name: &mut HashMap<String, usize>, name: &str) {
    if !index_by_name.contains_key(name) {
        index_by_name.insert(name.to_string(), nodes.len());
        nodes.push(SankeyNode {
            name: name.to_string(),
        });
    }
}

fn validate_record(record: &FlowRecord, index: usize) -> FlowResult<()> {
    if record.source.trim().is_empty() {
        return Err(FlowError::InvalidData(format!(
            "record {index}: empty source entity"
        )));
    }
    if record.target.trim().is_empty() {
        return Err(FlowError::InvalidData(format!(
            "record {index}: empty target entity"
        )));
    }
    if !record.value.is_finite() {
        return Err(FlowError::InvalidData(format!(
            "record {index}: value {} is not finite",
            record.value
        )));
    }
    if record.value < 0.0 {
        return Err(FlowError::InvalidData(format!(
            "record {index}: negative value {}",
            record.value
        )));
    }
    Ok(())
}
