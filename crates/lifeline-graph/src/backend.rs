//! Backend trait and attribute types shared by all graph implementations.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable string identifier of an infrastructure asset.
pub type AssetId = String;

/// Per-node attributes.
///
/// `condition` is `None` until something sets it; the cascade simulator
/// initializes unset conditions to 1.0 and never overwrites a value that is
/// already present. The descriptive fields (domain, name, coordinates) are
/// carried for downstream rendering and play no part in propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttrs {
    /// Normalized health in [0, 1]; 1.0 = fully healthy, 0.0 = fully failed.
    pub condition: Option<f64>,
    pub capacity: f64,
    /// Service demand; zero means the node is not a consumption point.
    pub demand: f64,
    pub domain: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for NodeAttrs {
    fn default() -> Self {
        Self {
            condition: None,
            capacity: 1.0,
            demand: 0.0,
            domain: String::new(),
            name: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// Per-edge attributes of a directed dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    /// Relative influence strength; must be positive.
    pub weight: f64,
    /// Relationship kind (pipeline, fuel_supply, transmission, ...).
    pub relation: String,
    /// Coupling tag recorded on the edge. Descriptive only: propagation uses
    /// the scenario-level coupling mode.
    pub coupling: String,
}

impl Default for EdgeAttrs {
    fn default() -> Self {
        Self {
            weight: 1.0,
            relation: String::new(),
            coupling: "linear".to_string(),
        }
    }
}

/// Object-safe directed-graph capability.
///
/// Everything the cascade core needs from a graph: attribute storage per node
/// and edge, predecessor lookup, deterministic node enumeration, and a deep
/// copy whose mutations never leak back into the original.
pub trait GraphBackend: fmt::Debug {
    /// Insert a node. Re-adding an existing id replaces its attributes while
    /// keeping its position in the enumeration order.
    fn add_node(&mut self, id: &str, attrs: NodeAttrs);

    /// Insert a directed edge. Both endpoints must already exist; on failure
    /// the graph is left untouched.
    fn add_edge(&mut self, source: &str, target: &str, attrs: EdgeAttrs) -> Result<(), GraphError>;

    /// All node ids in insertion order.
    fn node_ids(&self) -> Vec<AssetId>;

    fn node(&self, id: &str) -> Option<&NodeAttrs>;

    fn node_mut(&mut self, id: &str) -> Option<&mut NodeAttrs>;

    /// Direct predecessors of `id` (sources of incoming edges).
    fn predecessors(&self, id: &str) -> Vec<AssetId>;

    fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttrs>;

    fn node_count(&self) -> usize;

    /// Deep copy. Mutating the clone's attributes must never affect `self`.
    fn clone_backend(&self) -> Box<dyn GraphBackend>;
}

/// Which backend implementation to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Petgraph,
    Adjacency,
}

impl FromStr for BackendKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "petgraph" => Ok(BackendKind::Petgraph),
            "adjacency" => Ok(BackendKind::Adjacency),
            other => Err(GraphError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Petgraph => write!(f, "petgraph"),
            BackendKind::Adjacency => write!(f, "adjacency"),
        }
    }
}
