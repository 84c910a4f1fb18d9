//! Full-featured backend built on petgraph's stable directed graph.

use crate::backend::{AssetId, EdgeAttrs, GraphBackend, NodeAttrs};
use crate::error::GraphError;
use indexmap::IndexMap;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;

#[derive(Debug, Clone)]
struct NodeSlot {
    id: AssetId,
    attrs: NodeAttrs,
}

/// petgraph-backed implementation of [`GraphBackend`].
///
/// A side index maps asset ids to node indices; the id is also stored in the
/// node weight so incoming-neighbor walks can report ids without a reverse
/// scan. `StableDiGraph` keeps indices valid across the lifetime of the
/// graph, which keeps the side index trivially correct.
#[derive(Debug, Clone, Default)]
pub struct PetgraphBackend {
    graph: StableDiGraph<NodeSlot, EdgeAttrs>,
    index: IndexMap<AssetId, NodeIndex>,
}

impl PetgraphBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }
}

impl GraphBackend for PetgraphBackend {
    fn add_node(&mut self, id: &str, attrs: NodeAttrs) {
        match self.lookup(id) {
            Some(idx) => {
                self.graph[idx].attrs = attrs;
            }
            None => {
                let idx = self.graph.add_node(NodeSlot {
                    id: id.to_string(),
                    attrs,
                });
                self.index.insert(id.to_string(), idx);
            }
        }
    }

    fn add_edge(&mut self, source: &str, target: &str, attrs: EdgeAttrs) -> Result<(), GraphError> {
        let from = self
            .lookup(source)
            .ok_or_else(|| GraphError::MissingEndpoint(source.to_string()))?;
        let to = self
            .lookup(target)
            .ok_or_else(|| GraphError::MissingEndpoint(target.to_string()))?;
        self.graph.update_edge(from, to, attrs);
        Ok(())
    }

    fn node_ids(&self) -> Vec<AssetId> {
        self.index.keys().cloned().collect()
    }

    fn node(&self, id: &str) -> Option<&NodeAttrs> {
        self.lookup(id).map(|idx| &self.graph[idx].attrs)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut NodeAttrs> {
        self.lookup(id).map(|idx| &mut self.graph[idx].attrs)
    }

    fn predecessors(&self, id: &str) -> Vec<AssetId> {
        let Some(idx) = self.lookup(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].id.clone())
            .collect()
    }

    fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttrs> {
        let from = self.lookup(source)?;
        let to = self.lookup(target)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn clone_backend(&self) -> Box<dyn GraphBackend> {
        Box::new(self.clone())
    }
}
