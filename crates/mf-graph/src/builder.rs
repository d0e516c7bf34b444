//! Incremental network builder.

use mf_core::{EdgeId, NodeId, Real};
use tracing::{trace, warn};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, FlowNetwork, Node};
use crate::indexing::LabelIndex;
use crate::validate;

/// What to do when an edge is added for an ordered pair that already has one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateEdgePolicy {
    /// Fail with `GraphError::DuplicateEdge`.
    #[default]
    Reject,
    /// Keep the first edge's position and ID, take the new capacity.
    LastWriteWins,
}

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_edge` to build up the network, then call
/// `build()` to freeze it into an immutable `FlowNetwork`. Every mutation
/// is checked as it happens, so a builder never holds an invalid network.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: LabelIndex,
    policy: DuplicateEdgePolicy,
}

impl NetworkBuilder {
    /// Create a new empty builder that rejects duplicate edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty builder with an explicit duplicate-edge policy.
    pub fn with_policy(policy: DuplicateEdgePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicateEdgePolicy {
        self.policy
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a node and return its ID.
    pub fn add_node(&mut self, label: impl Into<String>) -> GraphResult<NodeId> {
        let label = label.into();
        let id = NodeId::from_usize(self.nodes.len());
        if !self.index.insert_node(&label, id) {
            return Err(GraphError::DuplicateNode { label });
        }
        trace!(node = %label, id = %id, "added node");
        self.nodes.push(Node { id, label });
        Ok(id)
    }

    /// Add a directed edge between two existing nodes and return its ID.
    ///
    /// Checks, in order: both endpoints exist, no self-loop, capacity is
    /// finite and non-negative, the ordered pair is new (subject to the
    /// duplicate-edge policy).
    pub fn add_edge(&mut self, from: &str, to: &str, capacity: Real) -> GraphResult<EdgeId> {
        let from_id = self.lookup(from)?;
        let to_id = self.lookup(to)?;

        if from_id == to_id {
            return Err(GraphError::SelfLoop {
                label: from.to_string(),
            });
        }

        if !capacity.is_finite() || capacity < 0.0 {
            return Err(GraphError::InvalidCapacity {
                from: from.to_string(),
                to: to.to_string(),
                capacity,
            });
        }

        let id = EdgeId::from_usize(self.edges.len());
        if let Some(existing) = self.index.insert_edge(from_id, to_id, id) {
            return match self.policy {
                DuplicateEdgePolicy::Reject => Err(GraphError::DuplicateEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                }),
                DuplicateEdgePolicy::LastWriteWins => {
                    let edge = &mut self.edges[existing.idx()];
                    warn!(
                        from,
                        to,
                        old = edge.capacity,
                        new = capacity,
                        "duplicate edge overwrites earlier capacity"
                    );
                    edge.capacity = capacity;
                    Ok(existing)
                }
            };
        }

        trace!(from, to, capacity, id = %id, "added edge");
        self.edges.push(Edge {
            id,
            from: from_id,
            to: to_id,
            capacity,
        });
        Ok(id)
    }

    /// Freeze the builder into an immutable network.
    ///
    /// This constructs the outgoing/incoming adjacency and checks it
    /// against the edge list.
    pub fn build(self) -> GraphResult<FlowNetwork> {
        let n = self.nodes.len();
        let (out_offsets, out_edges) = Self::build_adjacency(n, &self.edges, |e| e.from);
        let (in_offsets, in_edges) = Self::build_adjacency(n, &self.edges, |e| e.to);

        validate::validate_adjacency(&self.edges, &out_offsets, &out_edges, |e| e.from)?;
        validate::validate_adjacency(&self.edges, &in_offsets, &in_edges, |e| e.to)?;

        Ok(FlowNetwork {
            nodes: self.nodes,
            edges: self.edges,
            index: self.index,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        })
    }

    fn lookup(&self, label: &str) -> GraphResult<NodeId> {
        self.index.node(label).ok_or_else(|| GraphError::UnknownNode {
            label: label.to_string(),
        })
    }

    /// Build compact adjacency lists keyed by `endpoint(edge)`.
    ///
    /// Edges are visited in ID order, so every list comes out sorted.
    fn build_adjacency(
        node_count: usize,
        edges: &[Edge],
        endpoint: impl Fn(&Edge) -> NodeId,
    ) -> (Vec<usize>, Vec<EdgeId>) {
        let mut offsets = vec![0usize; node_count + 1];
        for edge in edges {
            offsets[endpoint(edge).idx() + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut flat = vec![EdgeId::from_index(0); edges.len()];
        for edge in edges {
            let slot = &mut cursor[endpoint(edge).idx()];
            flat[*slot] = edge.id;
            *slot += 1;
        }

        (offsets, flat)
    }
}
