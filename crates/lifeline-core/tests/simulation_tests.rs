//! Cascade behavior on the reference network, for both coupling modes and
//! both graph backends.

use lifeline_core::{demo_network, simulate, CouplingMode, FailureScenario};
use lifeline_graph::{BackendKind, GraphBackend};
use pretty_assertions::assert_eq;

fn reference_scenario(coupling: CouplingMode) -> FailureScenario {
    FailureScenario::new(vec!["compressor_1".to_string()])
        .with_degradation_rate(1.0)
        .with_dependency_threshold(0.5)
        .with_max_steps(4)
        .with_coupling(coupling)
}

#[test]
fn compressor_failure_cascades_to_the_plant_with_linear_coupling() {
    let mut graph = demo_network().to_graph(BackendKind::Adjacency).unwrap();
    let history = simulate(graph.as_mut(), &reference_scenario(CouplingMode::Linear));

    assert_eq!(history.steps()[0].failed, vec!["compressor_1"]);
    let flattened = history.flattened();
    assert!(flattened.contains("plant_1"));
    assert!(history.last_step() <= 4);
}

#[test]
fn compressor_failure_cascades_to_the_plant_with_threshold_coupling() {
    let mut graph = demo_network().to_graph(BackendKind::Adjacency).unwrap();
    let history = simulate(graph.as_mut(), &reference_scenario(CouplingMode::Threshold));

    assert!(history.flattened().contains("plant_1"));
}

#[test]
fn backends_produce_identical_histories() {
    let network = demo_network();
    let scenario = reference_scenario(CouplingMode::Linear);

    let mut petgraph = network.to_graph(BackendKind::Petgraph).unwrap();
    let mut adjacency = network.to_graph(BackendKind::Adjacency).unwrap();

    let history_a = simulate(petgraph.as_mut(), &scenario);
    let history_b = simulate(adjacency.as_mut(), &scenario);

    assert_eq!(history_a, history_b);
}

#[test]
fn conditions_are_monotone_non_increasing_across_step_budgets() {
    // Deterministic propagation: running one extra step can only lower
    // conditions. Compare full runs with increasing step budgets.
    let network = demo_network();
    let mut previous: Option<Vec<f64>> = None;

    for max_steps in 1..=5 {
        let mut graph = network.to_graph(BackendKind::Adjacency).unwrap();
        let scenario = FailureScenario::new(vec!["compressor_1".to_string()])
            .with_degradation_rate(0.5)
            .with_dependency_threshold(0.4)
            .with_max_steps(max_steps);
        simulate(graph.as_mut(), &scenario);

        let conditions: Vec<f64> = graph
            .node_ids()
            .iter()
            .map(|id| graph.node(id).unwrap().condition.unwrap())
            .collect();

        for value in &conditions {
            assert!((0.0..=1.0).contains(value));
        }
        if let Some(prev) = &previous {
            for (now, before) in conditions.iter().zip(prev) {
                assert!(
                    now <= before,
                    "condition increased across step budgets: {now} > {before}"
                );
            }
        }
        previous = Some(conditions);
    }
}

#[test]
fn unknown_seed_is_ignored_without_failing() {
    let mut graph = demo_network().to_graph(BackendKind::Adjacency).unwrap();
    let scenario = FailureScenario::new(vec![
        "no_such_asset".to_string(),
        "compressor_1".to_string(),
    ])
    .with_degradation_rate(1.0)
    .with_dependency_threshold(0.5);

    let history = simulate(graph.as_mut(), &scenario);

    assert_eq!(history.steps()[0].failed, vec!["compressor_1"]);
    assert!(!history.flattened().contains("no_such_asset"));
}
