//! Fallback adjacency-map backend with no third-party graph dependency.

use crate::backend::{AssetId, EdgeAttrs, GraphBackend, NodeAttrs};
use crate::error::GraphError;
use indexmap::IndexMap;

/// Directed graph stored as insertion-ordered attribute maps.
///
/// Predecessor lookup scans the edge map, which is fine at the network sizes
/// this crate targets (tens of assets).
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    nodes: IndexMap<AssetId, NodeAttrs>,
    edges: IndexMap<(AssetId, AssetId), EdgeAttrs>,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphBackend for AdjacencyGraph {
    fn add_node(&mut self, id: &str, attrs: NodeAttrs) {
        // IndexMap keeps the original slot on re-insert, preserving order.
        self.nodes.insert(id.to_string(), attrs);
    }

    fn add_edge(&mut self, source: &str, target: &str, attrs: EdgeAttrs) -> Result<(), GraphError> {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::MissingEndpoint(source.to_string()));
        }
        if !self.nodes.contains_key(target) {
            return Err(GraphError::MissingEndpoint(target.to_string()));
        }
        self.edges
            .insert((source.to_string(), target.to_string()), attrs);
        Ok(())
    }

    fn node_ids(&self) -> Vec<AssetId> {
        self.nodes.keys().cloned().collect()
    }

    fn node(&self, id: &str) -> Option<&NodeAttrs> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut NodeAttrs> {
        self.nodes.get_mut(id)
    }

    fn predecessors(&self, id: &str) -> Vec<AssetId> {
        self.edges
            .keys()
            .filter(|(_, target)| target == id)
            .map(|(source, _)| source.clone())
            .collect()
    }

    fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttrs> {
        self.edges.get(&(source.to_string(), target.to_string()))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn clone_backend(&self) -> Box<dyn GraphBackend> {
        Box::new(self.clone())
    }
}
