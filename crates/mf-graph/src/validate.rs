//! Network validation logic.

use std::collections::HashSet;

use mf_core::{EdgeId, NodeId};

use crate::error::{GraphError, GraphResult, TerminalIssue};
use crate::graph::{Edge, FlowNetwork, Terminals};

/// Resolve and check a (source, sink) pair.
pub(crate) fn validate_terminals(
    network: &FlowNetwork,
    source: &str,
    sink: &str,
) -> GraphResult<Terminals> {
    let reject = |reason| GraphError::InvalidTerminals {
        source_node: source.to_string(),
        sink_node: sink.to_string(),
        reason,
    };

    if source == sink {
        return Err(reject(TerminalIssue::SameNode));
    }
    let s = network
        .node_id(source)
        .ok_or_else(|| reject(TerminalIssue::UnknownSource))?;
    let t = network
        .node_id(sink)
        .ok_or_else(|| reject(TerminalIssue::UnknownSink))?;

    Ok(Terminals::new(s, t))
}

/// Validate one adjacency index (outgoing or incoming) for consistency.
///
/// Each listed edge must reference the node it is listed under, and every
/// edge must appear exactly once.
pub(crate) fn validate_adjacency(
    edges: &[Edge],
    offsets: &[usize],
    flat: &[EdgeId],
    endpoint: impl Fn(&Edge) -> NodeId,
) -> GraphResult<()> {
    let mut seen: HashSet<EdgeId> = HashSet::with_capacity(flat.len());

    for (i, window) in offsets.windows(2).enumerate() {
        let node = NodeId::from_usize(i);
        for &edge_id in &flat[window[0]..window[1]] {
            let listed_here = edges
                .get(edge_id.idx())
                .is_some_and(|e| endpoint(e) == node);
            if !listed_here || !seen.insert(edge_id) {
                return Err(GraphError::InconsistentAdjacency {
                    node,
                    edge: edge_id,
                });
            }
        }
    }

    // Every edge should appear
    for edge in edges {
        if !seen.contains(&edge.id) {
            return Err(GraphError::InconsistentAdjacency {
                node: endpoint(edge),
                edge: edge.id,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkBuilder;

    fn edge(id: u32, from: u32, to: u32) -> Edge {
        Edge {
            id: EdgeId::from_index(id),
            from: NodeId::from_index(from),
            to: NodeId::from_index(to),
            capacity: 1.0,
        }
    }

    #[test]
    fn validate_empty_adjacency() {
        assert!(validate_adjacency(&[], &[0], &[], |e| e.from).is_ok());
    }

    #[test]
    fn misplaced_edge_detected() {
        let edges = vec![edge(0, 0, 1)];
        // edge 0 listed under node 1 instead of node 0
        let offsets = vec![0, 0, 1];
        let flat = vec![EdgeId::from_index(0)];
        let result = validate_adjacency(&edges, &offsets, &flat, |e| e.from);
        assert!(matches!(
            result,
            Err(GraphError::InconsistentAdjacency { .. })
        ));
    }

    #[test]
    fn missing_edge_detected() {
        let edges = vec![edge(0, 0, 1), edge(1, 1, 0)];
        let offsets = vec![0, 1, 1];
        let flat = vec![EdgeId::from_index(0)];
        assert!(validate_adjacency(&edges, &offsets, &flat, |e| e.from).is_err());
    }

    #[test]
    fn terminals() {
        let mut builder = NetworkBuilder::new();
        builder.add_node("s").unwrap();
        builder.add_node("t").unwrap();
        let net = builder.build().unwrap();

        let ok = validate_terminals(&net, "s", "t").unwrap();
        assert_eq!(ok.source(), net.node_id("s").unwrap());
        assert_eq!(ok.sink(), net.node_id("t").unwrap());

        let same = validate_terminals(&net, "s", "s").unwrap_err();
        assert!(matches!(
            same,
            GraphError::InvalidTerminals {
                reason: TerminalIssue::SameNode,
                ..
            }
        ));
        let unknown = validate_terminals(&net, "x", "t").unwrap_err();
        assert!(matches!(
            unknown,
            GraphError::InvalidTerminals {
                reason: TerminalIssue::UnknownSource,
                ..
            }
        ));
        let unknown = validate_terminals(&net, "s", "y").unwrap_err();
        assert!(matches!(
            unknown,
            GraphError::InvalidTerminals {
                reason: TerminalIssue::UnknownSink,
                ..
            }
        ));
    }
}
