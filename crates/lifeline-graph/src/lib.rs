//! Directed attribute-graph capability for infrastructure networks.
//!
//! Exposes one object-safe [`GraphBackend`] trait and two conforming
//! implementations: [`AdjacencyGraph`], a self-contained adjacency-map
//! fallback, and [`PetgraphBackend`], backed by petgraph and enabled by the
//! default `petgraph-backend` feature. Consumers depend only on the trait, so
//! the backends are interchangeable at startup via [`build_graph_backend`].
//!
//! Node enumeration order is insertion order on both backends. Cascade
//! propagation is order-sensitive within a step, so this is a contract, not
//! an implementation detail.

pub mod adjacency;
pub mod backend;
pub mod error;

#[cfg(feature = "petgraph-backend")]
pub mod petgraph_backend;

pub use adjacency::AdjacencyGraph;
pub use backend::{AssetId, BackendKind, EdgeAttrs, GraphBackend, NodeAttrs};
pub use error::GraphError;

#[cfg(feature = "petgraph-backend")]
pub use petgraph_backend::PetgraphBackend;

/// Construct an empty graph for the requested backend.
///
/// When the `petgraph-backend` feature is disabled, a request for
/// [`BackendKind::Petgraph`] falls back to the adjacency implementation, so
/// callers can always treat the richer backend as a preference rather than a
/// hard requirement.
#[must_use]
pub fn build_graph_backend(kind: BackendKind) -> Box<dyn GraphBackend> {
    match kind {
        #[cfg(feature = "petgraph-backend")]
        BackendKind::Petgraph => Box::new(PetgraphBackend::new()),
        #[cfg(not(feature = "petgraph-backend"))]
        BackendKind::Petgraph => Box::new(AdjacencyGraph::new()),
        BackendKind::Adjacency => Box::new(AdjacencyGraph::new()),
    }
}
