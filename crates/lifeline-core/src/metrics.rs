//! Resilience metrics derived from a failure history.

use crate::simulate::FailureHistory;
use lifeline_graph::GraphBackend;
use serde::{Deserialize, Serialize};

/// Scalar operational metrics over one graph snapshot.
///
/// Degenerate inputs are defined values: a network with no demand-bearing
/// nodes is vacuously fully served, and an empty graph has health 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationalModel {
    /// Condition at or above which a demand-bearing node counts as served.
    pub service_threshold: f64,
}

impl Default for OperationalModel {
    fn default() -> Self {
        Self {
            service_threshold: 0.5,
        }
    }
}

impl OperationalModel {
    /// Fraction of demand-bearing nodes whose condition clears the service
    /// threshold; 1.0 when there are no demand-bearing nodes.
    #[must_use]
    pub fn service_ratio(&self, graph: &dyn GraphBackend) -> f64 {
        let mut eligible = 0usize;
        let mut served = 0usize;
        for id in graph.node_ids() {
            let Some(attrs) = graph.node(&id) else {
                continue;
            };
            if attrs.demand > 0.0 {
                eligible += 1;
                if attrs.condition.unwrap_or(1.0) >= self.service_threshold {
                    served += 1;
                }
            }
        }
        if eligible == 0 {
            return 1.0;
        }
        served as f64 / eligible as f64
    }

    /// Mean condition across all nodes; 0.0 for an empty graph. Unset
    /// conditions count as fully healthy.
    #[must_use]
    pub fn health_index(&self, graph: &dyn GraphBackend) -> f64 {
        let count = graph.node_count();
        if count == 0 {
            return 0.0;
        }
        let total: f64 = graph
            .node_ids()
            .iter()
            .filter_map(|id| graph.node(id))
            .map(|attrs| attrs.condition.unwrap_or(1.0))
            .sum();
        total / count as f64
    }
}

/// One point of the resilience time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResiliencePoint {
    pub step: usize,
    pub service_ratio: f64,
    pub health_index: f64,
}

/// Replay `history` onto a copy of `base_graph` and derive one metric point
/// per recorded step, cumulative and sorted by step ascending.
///
/// `base_graph` itself is never mutated; the replay happens on an
/// independently-owned clone.
#[must_use]
pub fn resilience_curve(
    history: &FailureHistory,
    base_graph: &dyn GraphBackend,
) -> Vec<ResiliencePoint> {
    let mut working = base_graph.clone_backend();
    let model = OperationalModel::default();
    let mut points: Vec<ResiliencePoint> = Vec::with_capacity(history.steps().len());

    for step in history.steps() {
        for id in &step.failed {
            if let Some(attrs) = working.node_mut(id) {
                attrs.condition = Some(0.0);
            }
        }
        points.push(ResiliencePoint {
            step: step.step,
            service_ratio: model.service_ratio(working.as_ref()),
            health_index: model.health_index(working.as_ref()),
        });
    }

    // Produced in step order already; the sort is the contract, not an
    // assumption about the history's layout.
    points.sort_by_key(|p| p.step);
    points
}
