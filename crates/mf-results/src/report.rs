//! Flow report construction.

use mf_core::{Real, Tolerances, nearly_equal};
use mf_graph::{Edge, FlowNetwork, Terminals};
use mf_solver::FlowAssignment;

use crate::{EdgeRecord, FlowReport, ReportError, ReportResult};

/// True when an edge has no residual capacity left, within `eps`.
///
/// A zero-capacity edge is never saturated.
pub fn is_saturated(capacity: Real, flow: Real, eps: Real) -> bool {
    capacity != 0.0 && capacity - flow < eps
}

/// Build the report for `assignment` on `network`.
///
/// The total is the net outflow of the source; it must match the net
/// inflow of the sink within `epsilon`.
pub fn build_report(
    network: &FlowNetwork,
    terminals: Terminals,
    assignment: &FlowAssignment,
    epsilon: Real,
) -> ReportResult<FlowReport> {
    check_shape(network, terminals, assignment)?;

    let total_flow = assignment.net_outflow(network, terminals.source());
    let into_sink = -assignment.net_outflow(network, terminals.sink());
    if !nearly_equal(total_flow, into_sink, Tolerances::absolute(epsilon)) {
        return Err(ReportError::violation(format!(
            "source outflow {total_flow} differs from sink inflow {into_sink}"
        )));
    }

    let edges = network
        .edges()
        .iter()
        .map(|edge| record(network, edge, assignment.flow(edge.id), epsilon))
        .collect();

    Ok(FlowReport {
        source: network.label(terminals.source()).to_string(),
        sink: network.label(terminals.sink()).to_string(),
        total_flow,
        edges,
    })
}

fn record(network: &FlowNetwork, edge: &Edge, flow: Real, eps: Real) -> EdgeRecord {
    EdgeRecord {
        from: network.label(edge.from).to_string(),
        to: network.label(edge.to).to_string(),
        capacity: edge.capacity,
        flow,
        saturated: is_saturated(edge.capacity, flow, eps),
    }
}

/// Assignment and terminals must belong to `network`.
pub(crate) fn check_shape(
    network: &FlowNetwork,
    terminals: Terminals,
    assignment: &FlowAssignment,
) -> ReportResult<()> {
    if assignment.flows().len() != network.edge_count() {
        return Err(ReportError::violation(format!(
            "assignment has {} flows for {} edges",
            assignment.flows().len(),
            network.edge_count()
        )));
    }
    for id in [terminals.source(), terminals.sink()] {
        if network.node(id).is_none() {
            return Err(ReportError::violation(format!(
                "terminal {id} is not a node of the network"
            )));
        }
    }
    Ok(())
}
