//! Solver outputs.

use mf_core::{EdgeId, NodeId, Real};
use mf_graph::FlowNetwork;

/// Flow on every edge of the network, in edge ID (insertion) order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAssignment {
    pub(crate) flows: Vec<Real>,
    pub(crate) total: Real,
}

impl FlowAssignment {
    /// Build an assignment from explicit per-edge flows.
    ///
    /// Mostly useful for checking externally produced flows with the
    /// reporter's audit.
    pub fn from_flows(flows: Vec<Real>, total: Real) -> Self {
        Self { flows, total }
    }

    /// Flow on one edge (0 for an unknown ID).
    pub fn flow(&self, edge: EdgeId) -> Real {
        self.flows.get(edge.idx()).copied().unwrap_or(0.0)
    }

    pub fn flows(&self) -> &[Real] {
        &self.flows
    }

    /// Total pushed by the solver, accumulated over all augmentations.
    pub fn total(&self) -> Real {
        self.total
    }

    /// Flow leaving `node` minus flow entering it.
    pub fn net_outflow(&self, network: &FlowNetwork, node: NodeId) -> Real {
        let out: Real = network.outgoing(node).iter().map(|&e| self.flow(e)).sum();
        let inc: Real = network.incoming(node).iter().map(|&e| self.flow(e)).sum();
        out - inc
    }
}

/// A minimum source/sink cut read off the final residual graph.
#[derive(Debug, Clone, PartialEq)]
pub struct MinCut {
    /// Nodes reachable from the source in the final residual graph.
    pub source_side: Vec<NodeId>,
    /// Network edges leaving the source side, in edge ID order.
    pub edges: Vec<EdgeId>,
    pub capacity: Real,
}

impl MinCut {
    pub fn contains(&self, node: NodeId) -> bool {
        self.source_side.binary_search(&node).is_ok()
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolveStats {
    /// Blocking-flow phases run (level graphs that reached the sink).
    pub phases: usize,
    /// Augmenting paths pushed.
    pub augmentations: usize,
    pub elapsed_s: f64,
}

/// Everything a solve produces.
#[derive(Debug, Clone)]
pub struct MaxFlowSolution {
    pub assignment: FlowAssignment,
    pub min_cut: MinCut,
    pub stats: SolveStats,
}

impl MaxFlowSolution {
    pub fn total_flow(&self) -> Real {
        self.assignment.total()
    }
}
