//! Integration tests for mf-graph.

use mf_graph::{DuplicateEdgePolicy, GraphError, NetworkBuilder, TerminalIssue};

fn default_network() -> NetworkBuilder {
    let mut builder = NetworkBuilder::new();
    for label in ["A", "B", "C", "D", "E"] {
        builder.add_node(label).unwrap();
    }
    for (u, v, cap) in [
        ("A", "B", 10.0),
        ("A", "C", 5.0),
        ("B", "C", 15.0),
        ("B", "D", 10.0),
        ("C", "E", 10.0),
        ("D", "E", 10.0),
    ] {
        builder.add_edge(u, v, cap).unwrap();
    }
    builder
}

#[test]
fn build_default_network() {
    let net = default_network().build().unwrap();

    assert_eq!(net.node_count(), 5);
    assert_eq!(net.edge_count(), 6);

    let a = net.node_id("A").unwrap();
    let c = net.node_id("C").unwrap();
    let e = net.node_id("E").unwrap();
    assert_eq!(net.outgoing(a).len(), 2);
    assert_eq!(net.incoming(c).len(), 2);
    assert_eq!(net.outgoing(e).len(), 0);
    assert_eq!(net.incoming(e).len(), 2);

    // insertion order is preserved
    let labels: Vec<(&str, &str)> = net
        .edges()
        .iter()
        .map(|e| (net.label(e.from), net.label(e.to)))
        .collect();
    assert_eq!(labels[0], ("A", "B"));
    assert_eq!(labels[5], ("D", "E"));
}

#[test]
fn every_edge_listed_once_per_direction() {
    let net = default_network().build().unwrap();
    let out_total: usize = net.nodes().iter().map(|n| net.outgoing(n.id).len()).sum();
    let in_total: usize = net.nodes().iter().map(|n| net.incoming(n.id).len()).sum();
    assert_eq!(out_total, net.edge_count());
    assert_eq!(in_total, net.edge_count());

    for node in net.nodes() {
        for &id in net.outgoing(node.id) {
            assert_eq!(net.edge(id).unwrap().from, node.id);
        }
        for &id in net.incoming(node.id) {
            assert_eq!(net.edge(id).unwrap().to, node.id);
        }
    }
}

#[test]
fn terminal_validation() {
    let net = default_network().build().unwrap();
    let terminals = net.validate("A", "E").unwrap();
    assert_eq!(net.label(terminals.source()), "A");
    assert_eq!(net.label(terminals.sink()), "E");

    let err = net.validate("A", "A").unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidTerminals {
            reason: TerminalIssue::SameNode,
            ..
        }
    ));
    assert!(net.validate("A", "Z").is_err());
}

#[test]
fn failed_edge_leaves_builder_unchanged() {
    let mut builder = default_network();
    assert!(builder.add_edge("A", "B", 1.0).is_err());
    assert!(builder.add_edge("A", "Q", 1.0).is_err());
    assert!(builder.add_edge("C", "C", 1.0).is_err());
    assert!(builder.add_edge("C", "D", -2.0).is_err());
    assert_eq!(builder.edge_count(), 6);

    let net = builder.build().unwrap();
    assert_eq!(net.edge_between("A", "B").unwrap().capacity, 10.0);
}

#[test]
fn antiparallel_edges_are_distinct() {
    let mut builder = NetworkBuilder::new();
    builder.add_node("x").unwrap();
    builder.add_node("y").unwrap();
    builder.add_edge("x", "y", 1.0).unwrap();
    builder.add_edge("y", "x", 2.0).unwrap();
    let net = builder.build().unwrap();

    assert_eq!(net.edge_between("x", "y").unwrap().capacity, 1.0);
    assert_eq!(net.edge_between("y", "x").unwrap().capacity, 2.0);
}

#[test]
fn last_write_wins_mirrors_dictionary_overwrite() {
    let mut builder = NetworkBuilder::with_policy(DuplicateEdgePolicy::LastWriteWins);
    builder.add_node("A").unwrap();
    builder.add_node("B").unwrap();
    builder.add_edge("A", "B", 3.0).unwrap();
    builder.add_edge("A", "B", 8.0).unwrap();
    let net = builder.build().unwrap();

    assert_eq!(net.edge_count(), 1);
    assert_eq!(net.edge_between("A", "B").unwrap().capacity, 8.0);
}

#[test]
fn empty_network() {
    let net = NetworkBuilder::new().build().unwrap();
    assert_eq!(net.node_count(), 0);
    assert_eq!(net.edge_count(), 0);
    assert!(net.validate("A", "B").is_err());
}

#[test]
fn large_chain() {
    let mut builder = NetworkBuilder::new();
    for i in 0..1000 {
        builder.add_node(format!("n{i}")).unwrap();
    }
    for i in 0..999 {
        builder
            .add_edge(&format!("n{i}"), &format!("n{}", i + 1), 1.0)
            .unwrap();
    }
    let net = builder.build().unwrap();
    assert_eq!(net.edge_count(), 999);

    let mid = net.node_id("n500").unwrap();
    assert_eq!(net.outgoing(mid).len(), 1);
    assert_eq!(net.incoming(mid).len(), 1);
}
