//! Core graph data structures.

use mf_core::{EdgeId, NodeId, Real};

use crate::error::GraphResult;
use crate::indexing::LabelIndex;
use crate::validate;

/// A vertex of the flow network, referenced by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
}

/// A directed, capacitated edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Real,
}

/// A validated (source, sink) pair for a specific network.
///
/// Only [`FlowNetwork::validate`] creates these, so holding one means the
/// terminals exist and differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminals {
    source: NodeId,
    sink: NodeId,
}

impl Terminals {
    pub(crate) fn new(source: NodeId, sink: NodeId) -> Self {
        Self { source, sink }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }
}

/// The network: an immutable collection of nodes and capacitated edges.
///
/// The network stores:
/// - All nodes and edges in vectors (indexed by their IDs, insertion order).
/// - Compact adjacency in both directions: for each node, its outgoing and
///   its incoming edges, each list sorted by edge ID.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) index: LabelIndex,

    /// Node i's outgoing edges are in out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<EdgeId>,

    /// Node i's incoming edges are in in_edges[in_offsets[i]..in_offsets[i+1]].
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_edges: Vec<EdgeId>,
}

impl FlowNetwork {
    /// Return all nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.idx())
    }

    /// Label of a node; empty string for an unknown ID.
    pub fn label(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.label.as_str())
    }

    /// Look up a node by label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.node(label)
    }

    /// Look up the edge for an ordered pair of labels.
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.index.edge(from, to).and_then(|id| self.edge(id))
    }

    /// Edges leaving a node, sorted by edge ID.
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        Self::slice(&self.out_offsets, &self.out_edges, node)
    }

    /// Edges entering a node, sorted by edge ID.
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        Self::slice(&self.in_offsets, &self.in_edges, node)
    }

    /// Sum of capacities over all edges.
    pub fn total_capacity(&self) -> Real {
        self.edges.iter().map(|e| e.capacity).sum()
    }

    /// Check a (source, sink) pair against this network.
    pub fn validate(&self, source: &str, sink: &str) -> GraphResult<Terminals> {
        validate::validate_terminals(self, source, sink)
    }

    fn slice<'a>(offsets: &[usize], flat: &'a [EdgeId], node: NodeId) -> &'a [EdgeId] {
        let idx = node.idx();
        if idx + 1 >= offsets.len() {
            return &[];
        }
        &flat[offsets[idx]..offsets[idx + 1]]
    }
}

#[cfg(test)]
mod tests {
    use crate::NetworkBuilder;

    #[test]
    fn adjacency_in_both_directions() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A").unwrap();
        let b = builder.add_node("B").unwrap();
        let c = builder.add_node("C").unwrap();
        let ab = builder.add_edge("A", "B", 1.0).unwrap();
        let ac = builder.add_edge("A", "C", 2.0).unwrap();
        let bc = builder.add_edge("B", "C", 3.0).unwrap();
        let net = builder.build().unwrap();

        assert_eq!(net.outgoing(a), &[ab, ac]);
        assert!(net.incoming(a).is_empty());
        assert_eq!(net.outgoing(b), &[bc]);
        assert_eq!(net.incoming(b), &[ab]);
        assert_eq!(net.incoming(c), &[ac, bc]);
        assert_eq!(net.total_capacity(), 6.0);
    }

    #[test]
    fn lookup_by_label() {
        let mut builder = NetworkBuilder::new();
        builder.add_node("src").unwrap();
        builder.add_node("dst").unwrap();
        builder.add_edge("src", "dst", 4.5).unwrap();
        let net = builder.build().unwrap();

        let edge = net.edge_between("src", "dst").unwrap();
        assert_eq!(edge.capacity, 4.5);
        assert!(net.edge_between("dst", "src").is_none());
        assert!(net.node_id("nope").is_none());
        assert_eq!(net.label(edge.from), "src");
    }

    #[test]
    fn out_of_range_id_has_no_neighbours() {
        let net = NetworkBuilder::new().build().unwrap();
        assert!(net.outgoing(mf_core::NodeId::from_index(3)).is_empty());
        assert!(net.incoming(mf_core::NodeId::from_index(3)).is_empty());
    }
}
