//! Typed asset-network model and its materialization into a graph backend.

use crate::coupling::CouplingMode;
use crate::error::NetworkError;
use indexmap::IndexMap;
use lifeline_graph::{
    build_graph_backend, AssetId, BackendKind, EdgeAttrs, GraphBackend, GraphError, NodeAttrs,
};
use serde::{Deserialize, Serialize};

/// Infrastructure sector an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Gas,
    Power,
    Telecom,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Gas => write!(f, "gas"),
            Domain::Power => write!(f, "power"),
            Domain::Telecom => write!(f, "telecom"),
        }
    }
}

/// Semantic asset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    GasSupply,
    Compressor,
    Generator,
    Substation,
    Relay,
}

/// One infrastructure entity with a normalized health condition.
///
/// Coordinates are display-only. A zero `demand` means the asset is not a
/// service-consumption point and is excluded from service-ratio
/// denominators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub kind: AssetKind,
    pub domain: Domain,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub condition: f64,
    pub capacity: f64,
    pub demand: f64,
}

impl Asset {
    pub fn new(
        id: impl Into<AssetId>,
        kind: AssetKind,
        domain: Domain,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            domain,
            name: name.into(),
            latitude,
            longitude,
            condition: 1.0,
            capacity: 1.0,
            demand: 0.0,
        }
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_demand(mut self, demand: f64) -> Self {
        self.demand = demand;
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: f64) -> Self {
        self.condition = condition;
        self
    }
}

/// Directed influence relationship between two assets.
///
/// An undirected dependency is a modeling convenience: it is materialized as
/// two directed edges at graph-construction time, so the simulator only ever
/// sees directed edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub source: AssetId,
    pub target: AssetId,
    pub relation: String,
    pub weight: f64,
    pub directed: bool,
    pub coupling: CouplingMode,
}

impl Dependency {
    pub fn new(
        source: impl Into<AssetId>,
        target: impl Into<AssetId>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
            weight: 1.0,
            directed: true,
            coupling: CouplingMode::Linear,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    #[must_use]
    pub fn with_coupling(mut self, coupling: CouplingMode) -> Self {
        self.coupling = coupling;
        self
    }

    fn edge_attrs(&self) -> EdgeAttrs {
        EdgeAttrs {
            weight: self.weight,
            relation: self.relation.clone(),
            coupling: self.coupling.to_string(),
        }
    }
}

/// Ordered collection of assets and the dependencies between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetNetwork {
    assets: IndexMap<AssetId, Asset>,
    dependencies: Vec<Dependency>,
}

impl AssetNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset. Re-adding an id replaces the asset in place.
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Register a dependency. Both endpoints must already be known assets;
    /// on failure nothing is recorded.
    pub fn add_dependency(&mut self, dependency: Dependency) -> Result<(), NetworkError> {
        if !self.assets.contains_key(&dependency.source) {
            return Err(NetworkError::UnknownEndpoint(dependency.source));
        }
        if !self.assets.contains_key(&dependency.target) {
            return Err(NetworkError::UnknownEndpoint(dependency.target));
        }
        self.dependencies.push(dependency);
        Ok(())
    }

    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn asset_ids(&self) -> Vec<AssetId> {
        self.assets.keys().cloned().collect()
    }

    /// Materialize the network into a graph backend.
    ///
    /// Undirected dependencies become one edge per direction with identical
    /// attributes. Edge insertion cannot fail for a network whose
    /// dependencies passed endpoint validation, but backend errors are
    /// surfaced rather than swallowed.
    pub fn to_graph(&self, kind: BackendKind) -> Result<Box<dyn GraphBackend>, GraphError> {
        let mut graph = build_graph_backend(kind);

        for asset in self.assets.values() {
            graph.add_node(
                &asset.id,
                NodeAttrs {
                    condition: Some(asset.condition),
                    capacity: asset.capacity,
                    demand: asset.demand,
                    domain: asset.domain.to_string(),
                    name: asset.name.clone(),
                    latitude: asset.latitude,
                    longitude: asset.longitude,
                },
            );
        }

        for dep in &self.dependencies {
            graph.add_edge(&dep.source, &dep.target, dep.edge_attrs())?;
            if !dep.directed {
                graph.add_edge(&dep.target, &dep.source, dep.edge_attrs())?;
            }
        }

        Ok(graph)
    }
}
