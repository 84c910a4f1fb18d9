//! Cascade simulator: stepwise failure propagation over a directed graph.

use crate::coupling::CouplingMode;
use lifeline_graph::{AssetId, GraphBackend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable description of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureScenario {
    /// Assets forced to full failure before the first propagation step.
    /// Ids that name no known asset are ignored (with a warning), not
    /// rejected.
    pub failed_assets: Vec<AssetId>,
    /// Fraction of the computed normalized impact applied per step; > 0.
    pub degradation_rate: f64,
    /// Condition at or below which a node is declared failed; in [0, 1].
    pub dependency_threshold: f64,
    /// Upper bound on propagation steps; >= 1.
    pub max_steps: usize,
    pub coupling: CouplingMode,
}

impl FailureScenario {
    pub fn new(failed_assets: Vec<AssetId>) -> Self {
        Self {
            failed_assets,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_degradation_rate(mut self, rate: f64) -> Self {
        self.degradation_rate = rate;
        self
    }

    #[must_use]
    pub fn with_dependency_threshold(mut self, threshold: f64) -> Self {
        self.dependency_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn with_coupling(mut self, coupling: CouplingMode) -> Self {
        self.coupling = coupling;
        self
    }
}

impl Default for FailureScenario {
    fn default() -> Self {
        Self {
            failed_assets: Vec::new(),
            degradation_rate: 0.35,
            dependency_threshold: 0.4,
            max_steps: 5,
            coupling: CouplingMode::Linear,
        }
    }
}

/// Assets that newly failed at one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureStep {
    pub step: usize,
    pub failed: Vec<AssetId>,
}

/// Ordered record of which assets failed at which step.
///
/// Step 0 holds the scenario's seed failures; later steps hold only assets
/// that newly crossed the failure threshold. Steps that produce no new
/// failures are never recorded: the first such step terminates the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureHistory {
    steps: Vec<FailureStep>,
}

impl FailureHistory {
    pub fn steps(&self) -> &[FailureStep] {
        &self.steps
    }

    /// Every asset that failed at any step.
    pub fn flattened(&self) -> BTreeSet<AssetId> {
        self.steps
            .iter()
            .flat_map(|s| s.failed.iter().cloned())
            .collect()
    }

    /// True when no asset failed at any step.
    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(|s| s.failed.is_empty())
    }

    pub fn last_step(&self) -> usize {
        self.steps.last().map(|s| s.step).unwrap_or(0)
    }

    fn push(&mut self, step: usize, failed: Vec<AssetId>) {
        self.steps.push(FailureStep { step, failed });
    }
}

/// Run the cascade to stabilization or the step budget, whichever is first.
///
/// The caller owns `graph` exclusively for the duration of the call; node
/// conditions are mutated in place. Pass a copy to keep the pre-simulation
/// graph.
///
/// Semantics, in order:
/// - unset conditions are initialized to 1.0; already-set conditions are
///   never overwritten;
/// - seed assets are forced to 0.0 and recorded as step 0;
/// - nodes already at or below the failure threshold before step 1 count as
///   failed from the start, so a fully failed graph with no seeds yields no
///   new failures;
/// - each step makes a single pass over not-yet-failed nodes in insertion
///   order; a node's freshly lowered condition is visible to nodes processed
///   later in the same pass (pinned policy, see tests);
/// - a node with no predecessors is never a propagation target;
/// - a newly failed node's condition is forced to exactly 0.0 at the end of
///   its step; failure is absorbing.
///
/// Conditions never increase, so the process is well-founded and terminates
/// within `max_steps` iterations.
pub fn simulate(graph: &mut dyn GraphBackend, scenario: &FailureScenario) -> FailureHistory {
    let node_ids = graph.node_ids();

    for id in &node_ids {
        if let Some(attrs) = graph.node_mut(id) {
            if attrs.condition.is_none() {
                attrs.condition = Some(1.0);
            }
        }
    }

    let mut seeds: Vec<AssetId> = Vec::new();
    for id in &scenario.failed_assets {
        match graph.node_mut(id) {
            Some(attrs) => {
                attrs.condition = Some(0.0);
                seeds.push(id.clone());
            }
            None => {
                tracing::warn!(asset = %id, "scenario seed names an unknown asset, ignoring");
            }
        }
    }

    let mut already_failed: BTreeSet<AssetId> = seeds.iter().cloned().collect();

    // Nodes that start at or below the threshold are failed, not candidates
    // for "newly failed" bookkeeping.
    for id in &node_ids {
        let condition = graph.node(id).and_then(|a| a.condition).unwrap_or(1.0);
        if condition <= scenario.dependency_threshold {
            already_failed.insert(id.clone());
        }
    }

    let mut history = FailureHistory::default();
    history.push(0, seeds);

    for step in 1..=scenario.max_steps {
        let mut new_failures: Vec<AssetId> = Vec::new();

        for id in &node_ids {
            if already_failed.contains(id) {
                continue;
            }

            let predecessors = graph.predecessors(id);
            if predecessors.is_empty() {
                continue;
            }

            let mut influence = 0.0;
            let mut total_weight = 0.0;
            for pred in &predecessors {
                let weight = graph.edge(pred, id).map(|e| e.weight).unwrap_or(1.0);
                let pred_condition = graph.node(pred).and_then(|a| a.condition).unwrap_or(1.0);
                influence +=
                    scenario
                        .coupling
                        .impact(pred_condition, weight, scenario.dependency_threshold);
                total_weight += weight;
            }

            let normalized_impact = if total_weight > 0.0 {
                influence / total_weight
            } else {
                0.0
            };

            let Some(attrs) = graph.node_mut(id) else {
                continue;
            };
            let current = attrs.condition.unwrap_or(1.0);
            let next = (current - normalized_impact * scenario.degradation_rate).max(0.0);
            attrs.condition = Some(next);

            if next <= scenario.dependency_threshold {
                new_failures.push(id.clone());
            }
        }

        if new_failures.is_empty() {
            tracing::debug!(step, "cascade stabilized");
            break;
        }

        for id in &new_failures {
            if let Some(attrs) = graph.node_mut(id) {
                attrs.condition = Some(0.0);
            }
            already_failed.insert(id.clone());
        }

        tracing::debug!(step, failed = new_failures.len(), "cascade step recorded");
        history.push(step, new_failures);
    }

    history
}
