//! # Sankey Flow
//!
//! Flow-record normalization and graph preparation for Sankey diagrams.
//!
//! This crate turns tabular flow datasets (source, target, value) into the
//! node/link graph shape a browser-side charting library renders. The types
//! are designed to be:
//! 1. Deterministic: node order is strictly first-seen input order
//! 2. Validated: malformed records are rejected before any graph is built
//! 3. Serializable in the exact wire shape the renderer consumes

pub mod dataset;
pub mod error;
pub mod exporter;
pub mod normalizer;
pub mod parser;
pub mod remote;
pub mod renderer;
pub mod types;

pub use error::*;
pub use normalizer::*;
pub use parser::*;
pub use types::*;
