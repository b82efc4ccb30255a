//! Error types for flow data processing

use thiserror::Error;

pub type FlowResult<T> = std::result::Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Malformed row or header in a tab-separated dataset
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Record or graph failed invariant validation
    #[error("Invalid flow data: {0}")]
    InvalidData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error while loading a remote dataset
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
