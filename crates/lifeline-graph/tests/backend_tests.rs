//! Cross-backend contract tests: both implementations must be observably
//! interchangeable through the `GraphBackend` trait.

use lifeline_graph::{
    build_graph_backend, BackendKind, EdgeAttrs, GraphBackend, NodeAttrs,
};
use pretty_assertions::assert_eq;

fn populate(graph: &mut dyn GraphBackend) {
    for id in ["source", "relay", "sink"] {
        graph.add_node(
            id,
            NodeAttrs {
                condition: Some(1.0),
                ..NodeAttrs::default()
            },
        );
    }
    graph
        .add_edge(
            "source",
            "relay",
            EdgeAttrs {
                weight: 0.9,
                relation: "feed".to_string(),
                ..EdgeAttrs::default()
            },
        )
        .unwrap();
    graph
        .add_edge("relay", "sink", EdgeAttrs::default())
        .unwrap();
}

#[test]
fn backends_agree_on_structure() {
    let mut petgraph = build_graph_backend(BackendKind::Petgraph);
    let mut adjacency = build_graph_backend(BackendKind::Adjacency);
    populate(petgraph.as_mut());
    populate(adjacency.as_mut());

    for graph in [petgraph.as_ref(), adjacency.as_ref()] {
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_ids(), vec!["source", "relay", "sink"]);
        assert_eq!(graph.predecessors("relay"), vec!["source"]);
        assert_eq!(graph.edge("source", "relay").unwrap().weight, 0.9);
        assert!(graph.edge("relay", "source").is_none());
    }
}

#[test]
fn deep_copy_never_aliases_node_attributes() {
    for kind in [BackendKind::Petgraph, BackendKind::Adjacency] {
        let mut graph = build_graph_backend(kind);
        populate(graph.as_mut());

        let mut copy = graph.clone_backend();
        copy.node_mut("relay").unwrap().condition = Some(0.0);
        copy.node_mut("relay").unwrap().demand = 42.0;

        let original = graph.node("relay").unwrap();
        assert_eq!(original.condition, Some(1.0), "backend {kind}");
        assert_eq!(original.demand, 0.0, "backend {kind}");
    }
}

#[test]
fn failed_edge_insert_leaves_graph_untouched() {
    for kind in [BackendKind::Petgraph, BackendKind::Adjacency] {
        let mut graph = build_graph_backend(kind);
        populate(graph.as_mut());

        assert!(graph
            .add_edge("sink", "ghost", EdgeAttrs::default())
            .is_err());
        assert_eq!(graph.node_count(), 3, "backend {kind}");
        assert!(graph.edge("sink", "ghost").is_none());
    }
}
