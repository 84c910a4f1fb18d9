//! Pipeline orchestrator: simulate, evaluate, finalize, select, bundle.

use crate::coupling::CouplingMode;
use crate::error::PipelineError;
use crate::metrics::{resilience_curve, OperationalModel, ResiliencePoint};
use crate::network::AssetNetwork;
use crate::select::{prioritize_actions, Action, SelectionStrategy};
use crate::simulate::{simulate, FailureHistory, FailureScenario};
use lifeline_graph::{AssetId, BackendKind, GraphBackend};
use serde::{Deserialize, Serialize};

/// Everything a pipeline run needs beyond the network and the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInputs {
    pub failed_assets: Vec<AssetId>,
    pub degradation_rate: f64,
    pub dependency_threshold: f64,
    pub max_steps: usize,
    pub coupling: CouplingMode,
    pub strategy: SelectionStrategy,
    pub budget: f64,
}

impl Default for PipelineInputs {
    fn default() -> Self {
        Self {
            failed_assets: Vec::new(),
            degradation_rate: 0.35,
            dependency_threshold: 0.4,
            max_steps: 5,
            coupling: CouplingMode::Linear,
            strategy: SelectionStrategy::Greedy,
            budget: 120.0,
        }
    }
}

impl PipelineInputs {
    fn scenario(&self) -> FailureScenario {
        FailureScenario::new(self.failed_assets.clone())
            .with_degradation_rate(self.degradation_rate)
            .with_dependency_threshold(self.dependency_threshold)
            .with_max_steps(self.max_steps)
            .with_coupling(self.coupling)
    }
}

/// Result bundle handed to the presentation layer. Plain data, no behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub history: FailureHistory,
    pub resilience: Vec<ResiliencePoint>,
    pub selected_actions: Vec<Action>,
    pub service_ratio: f64,
    pub health_index: f64,
}

/// Run the full operational pipeline.
///
/// Simulation, evaluation, and finalization each receive their own
/// independently-owned graph copy; any sub-step failure propagates
/// unmodified, and there are no retries.
pub fn run_pipeline(
    network: &AssetNetwork,
    catalog: &[Action],
    inputs: &PipelineInputs,
    backend: BackendKind,
) -> Result<PipelineOutput, PipelineError> {
    let base = network.to_graph(backend)?;
    tracing::info!(
        nodes = base.node_count(),
        seeds = inputs.failed_assets.len(),
        coupling = %inputs.coupling,
        "running operational pipeline"
    );

    let scenario = inputs.scenario();
    let mut sim_graph = base.clone_backend();
    let history = simulate(sim_graph.as_mut(), &scenario);
    tracing::debug!(
        steps = history.steps().len(),
        failed = history.flattened().len(),
        "cascade simulation complete"
    );

    let resilience = resilience_curve(&history, base.as_ref());

    // Final conditions: the full history applied to a third copy.
    let mut final_graph = base.clone_backend();
    for step in history.steps() {
        for id in &step.failed {
            if let Some(attrs) = final_graph.node_mut(id) {
                attrs.condition = Some(0.0);
            }
        }
    }

    let model = OperationalModel::default();
    let service_ratio = model.service_ratio(final_graph.as_ref());
    let health_index = model.health_index(final_graph.as_ref());

    let selected_actions = prioritize_actions(catalog, inputs.budget, inputs.strategy);
    tracing::info!(
        service_ratio,
        health_index,
        selected = selected_actions.len(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        history,
        resilience,
        selected_actions,
        service_ratio,
        health_index,
    })
}
