//! Residual graph.
//!
//! Each network edge `k` becomes a pair of arcs: forward arc `2k` and
//! reverse arc `2k + 1`. The pair shares one flow value, so the forward
//! residual (`capacity - flow`) and the reverse residual (`flow`) always
//! change together in a single write.

use mf_core::Real;
use mf_graph::FlowNetwork;

pub(crate) type ArcId = usize;

#[derive(Debug, Clone)]
pub(crate) struct ResidualGraph {
    /// Per edge: (tail, head) node indices of the forward arc.
    ends: Vec<(usize, usize)>,
    capacity: Vec<Real>,
    flow: Vec<Real>,
    /// Node i's arcs are arcs[offsets[i]..offsets[i+1]].
    offsets: Vec<usize>,
    arcs: Vec<ArcId>,
}

impl ResidualGraph {
    /// Fresh residual graph with zero flow.
    ///
    /// A node's arc list holds the forward arcs of its outgoing edges
    /// followed by the reverse arcs of its incoming edges, each in edge ID
    /// order, so the search order is deterministic.
    pub(crate) fn new(network: &FlowNetwork) -> Self {
        let edges = network.edges();
        let ends = edges.iter().map(|e| (e.from.idx(), e.to.idx())).collect();
        let capacity = edges.iter().map(|e| e.capacity).collect();

        let mut offsets = Vec::with_capacity(network.node_count() + 1);
        let mut arcs = Vec::with_capacity(2 * edges.len());
        offsets.push(0);
        for node in network.nodes() {
            arcs.extend(network.outgoing(node.id).iter().map(|e| 2 * e.idx()));
            arcs.extend(network.incoming(node.id).iter().map(|e| 2 * e.idx() + 1));
            offsets.push(arcs.len());
        }

        Self {
            ends,
            capacity,
            flow: vec![0.0; edges.len()],
            offsets,
            arcs,
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Arcs leaving `node` in the residual graph.
    #[inline]
    pub(crate) fn arcs(&self, node: usize) -> &[ArcId] {
        &self.arcs[self.offsets[node]..self.offsets[node + 1]]
    }

    #[inline]
    fn is_forward(arc: ArcId) -> bool {
        arc & 1 == 0
    }

    #[inline]
    pub(crate) fn head(&self, arc: ArcId) -> usize {
        let (tail, head) = self.ends[arc >> 1];
        if Self::is_forward(arc) { head } else { tail }
    }

    #[inline]
    pub(crate) fn tail(&self, arc: ArcId) -> usize {
        let (tail, head) = self.ends[arc >> 1];
        if Self::is_forward(arc) { tail } else { head }
    }

    /// Remaining capacity on an arc.
    #[inline]
    pub(crate) fn residual(&self, arc: ArcId) -> Real {
        let edge = arc >> 1;
        if Self::is_forward(arc) {
            self.capacity[edge] - self.flow[edge]
        } else {
            self.flow[edge]
        }
    }

    /// Push `amount` along an arc: forward arcs add flow, reverse arcs
    /// cancel it.
    #[inline]
    pub(crate) fn push(&mut self, arc: ArcId, amount: Real) {
        let edge = arc >> 1;
        if Self::is_forward(arc) {
            self.flow[edge] += amount;
        } else {
            self.flow[edge] -= amount;
        }
    }

    /// Current per-edge flow, in edge ID order.
    pub(crate) fn edge_flows(&self) -> &[Real] {
        &self.flow
    }

    pub(crate) fn edge_capacity(&self, edge: usize) -> Real {
        self.capacity[edge]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_graph::NetworkBuilder;

    fn line() -> FlowNetwork {
        let mut b = NetworkBuilder::new();
        b.add_node("s").unwrap();
        b.add_node("m").unwrap();
        b.add_node("t").unwrap();
        b.add_edge("s", "m", 4.0).unwrap();
        b.add_edge("m", "t", 3.0).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn arcs_pair_up() {
        let rg = ResidualGraph::new(&line());
        assert_eq!(rg.node_count(), 3);
        // s: forward of edge 0
        assert_eq!(rg.arcs(0), &[0]);
        // m: forward of edge 1, reverse of edge 0
        assert_eq!(rg.arcs(1), &[2, 1]);
        // t: reverse of edge 1
        assert_eq!(rg.arcs(2), &[3]);

        assert_eq!(rg.tail(0), 0);
        assert_eq!(rg.head(0), 1);
        assert_eq!(rg.tail(1), 1);
        assert_eq!(rg.head(1), 0);
    }

    #[test]
    fn push_updates_both_directions() {
        let mut rg = ResidualGraph::new(&line());
        assert_eq!(rg.residual(0), 4.0);
        assert_eq!(rg.residual(1), 0.0);

        rg.push(0, 2.5);
        assert_eq!(rg.residual(0), 1.5);
        assert_eq!(rg.residual(1), 2.5);

        rg.push(1, 1.0);
        assert_eq!(rg.residual(0), 2.5);
        assert_eq!(rg.residual(1), 1.5);
        assert_eq!(rg.edge_flows(), &[1.5, 0.0]);
        assert_eq!(rg.edge_capacity(0), 4.0);
    }
}
