use crate::backend::AssetId;

/// Graph construction and selection errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge referenced a node that has not been added yet.
    #[error("edge endpoint not present in graph: {0}")]
    MissingEndpoint(AssetId),

    /// Unrecognized backend selector tag.
    #[error("unknown graph backend: {0}")]
    UnknownBackend(String),
}
