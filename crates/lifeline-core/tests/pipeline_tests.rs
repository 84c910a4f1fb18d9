//! End-to-end pipeline tests on the reference fixture.

use lifeline_core::{
    demo_action_catalog, demo_network, run_pipeline, CouplingMode, PipelineInputs,
    SelectionStrategy,
};
use lifeline_graph::BackendKind;
use pretty_assertions::assert_eq;

fn reference_inputs() -> PipelineInputs {
    PipelineInputs {
        failed_assets: vec!["compressor_1".to_string()],
        degradation_rate: 0.5,
        dependency_threshold: 0.4,
        max_steps: 5,
        coupling: CouplingMode::Linear,
        strategy: SelectionStrategy::Greedy,
        budget: 120.0,
    }
}

#[test]
fn pipeline_runs_end_to_end_on_the_demo_fixture() {
    let output = run_pipeline(
        &demo_network(),
        &demo_action_catalog(),
        &reference_inputs(),
        BackendKind::Adjacency,
    )
    .unwrap();

    assert!(!output.resilience.is_empty());
    assert_eq!(output.resilience.len(), output.history.steps().len());
    assert!((0.0..=1.0).contains(&output.service_ratio));
    assert!((0.0..=1.0).contains(&output.health_index));
    assert!(!output.selected_actions.is_empty());
}

#[test]
fn final_metrics_match_the_last_resilience_point() {
    let mut inputs = reference_inputs();
    inputs.degradation_rate = 1.0;
    inputs.dependency_threshold = 0.5;

    let output = run_pipeline(
        &demo_network(),
        &demo_action_catalog(),
        &inputs,
        BackendKind::Adjacency,
    )
    .unwrap();

    // The final graph is the last history step applied cumulatively, which
    // is exactly the state behind the last curve point.
    let last = output.resilience.last().unwrap();
    assert_eq!(output.service_ratio, last.service_ratio);
    assert_eq!(output.health_index, last.health_index);
}

#[test]
fn both_backends_yield_the_same_output() {
    let network = demo_network();
    let catalog = demo_action_catalog();
    let inputs = reference_inputs();

    let petgraph = run_pipeline(&network, &catalog, &inputs, BackendKind::Petgraph).unwrap();
    let adjacency = run_pipeline(&network, &catalog, &inputs, BackendKind::Adjacency).unwrap();

    assert_eq!(petgraph, adjacency);
}

#[test]
fn exact_strategy_flows_through_the_pipeline() {
    let mut inputs = reference_inputs();
    inputs.strategy = SelectionStrategy::Exact;

    let output = run_pipeline(
        &demo_network(),
        &demo_action_catalog(),
        &inputs,
        BackendKind::Adjacency,
    )
    .unwrap();

    let cost: f64 = output.selected_actions.iter().map(|a| a.cost).sum();
    assert!(cost <= inputs.budget);
}

#[test]
fn pipeline_inputs_round_trip_through_json() {
    let inputs = reference_inputs();
    let json = serde_json::to_string(&inputs).unwrap();
    let back: PipelineInputs = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inputs);
}

#[test]
fn pipeline_output_serializes_for_downstream_rendering() {
    let output = run_pipeline(
        &demo_network(),
        &demo_action_catalog(),
        &reference_inputs(),
        BackendKind::Adjacency,
    )
    .unwrap();

    let value = serde_json::to_value(&output).unwrap();
    assert!(value.get("history").is_some());
    assert!(value.get("resilience").is_some());
    assert!(value.get("selected_actions").is_some());
}
