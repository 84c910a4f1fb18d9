//! Error types for the lifeline core.
//!
//! Construction errors fail fast and are surfaced uninterpreted; degenerate
//! inputs (empty graphs, zero-weight predecessor sets, networks with no
//! demand points) are defined values in the metrics layer, never errors.

use lifeline_graph::{AssetId, GraphError};

/// Unrecognized string tag for an enum-valued configuration field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tag: {tag}")]
pub struct ParseTagError {
    /// Which tag family failed to parse (e.g. "coupling mode").
    pub kind: &'static str,
    pub tag: String,
}

impl ParseTagError {
    pub(crate) fn new(kind: &'static str, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
        }
    }
}

/// Network construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A dependency referenced an asset that was never added.
    #[error("dependency endpoint not registered: {0}")]
    UnknownEndpoint(AssetId),
}

/// Pipeline-level error: any sub-stage failure, propagated unmodified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}
