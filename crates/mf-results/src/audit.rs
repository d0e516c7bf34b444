//! Max-flow invariant audit.
//!
//! Checks, in order:
//! - capacity: `0 <= flow(e) <= capacity(e)`
//! - conservation at every node other than the terminals
//! - value consistency: solver total, source net outflow and sink net
//!   inflow agree
//! - optimality: the cut separates the terminals, its outgoing edges are
//!   full and its incoming edges empty (within epsilon), and the net flow
//!   across it equals the flow value
//!
//! The first violation found is returned.

use mf_core::{EdgeId, Real, Tolerances, nearly_equal};
use mf_graph::{FlowNetwork, Terminals};
use mf_solver::{FlowAssignment, MinCut};
use tracing::debug;

use crate::report::check_shape;
use crate::{ReportError, ReportResult};

pub fn audit(
    network: &FlowNetwork,
    terminals: Terminals,
    assignment: &FlowAssignment,
    min_cut: &MinCut,
    epsilon: Real,
) -> ReportResult<()> {
    check_shape(network, terminals, assignment)?;
    let tol = Tolerances {
        abs: epsilon,
        rel: Tolerances::default().rel,
    };

    for edge in network.edges() {
        let flow = assignment.flow(edge.id);
        if !flow.is_finite() || flow < -epsilon || flow > edge.capacity + epsilon {
            return Err(ReportError::violation(format!(
                "flow {flow} on '{}' -> '{}' outside [0, {}]",
                network.label(edge.from),
                network.label(edge.to),
                edge.capacity
            )));
        }
    }

    for node in network.nodes() {
        if node.id == terminals.source() || node.id == terminals.sink() {
            continue;
        }
        let net = assignment.net_outflow(network, node.id);
        if !nearly_equal(net, 0.0, tol) {
            return Err(ReportError::violation(format!(
                "flow not conserved at '{}' (net outflow {net})",
                node.label
            )));
        }
    }

    let value = assignment.net_outflow(network, terminals.source());
    let into_sink = -assignment.net_outflow(network, terminals.sink());
    if !nearly_equal(value, into_sink, tol) || !nearly_equal(value, assignment.total(), tol) {
        return Err(ReportError::violation(format!(
            "flow value mismatch: total {}, source outflow {value}, sink inflow {into_sink}",
            assignment.total()
        )));
    }

    audit_cut(network, terminals, assignment, min_cut, value, tol)?;
    debug!(value, "audit passed");
    Ok(())
}

/// A cut certifies optimality when every edge leaving the source side has
/// at most `eps` residual, every edge entering it carries at most `eps`,
/// and the net flow across it is the flow value. Summed capacity alone is
/// not enough: each crossing edge may hold back up to `eps`.
fn audit_cut(
    network: &FlowNetwork,
    terminals: Terminals,
    assignment: &FlowAssignment,
    min_cut: &MinCut,
    value: Real,
    tol: Tolerances,
) -> ReportResult<()> {
    if !min_cut.contains(terminals.source()) || min_cut.contains(terminals.sink()) {
        return Err(ReportError::violation(
            "cut does not separate source from sink",
        ));
    }

    let mut crossing: Vec<EdgeId> = Vec::new();
    let mut capacity = 0.0;
    let mut net_across = 0.0;
    for edge in network.edges() {
        let flow = assignment.flow(edge.id);
        match (min_cut.contains(edge.from), min_cut.contains(edge.to)) {
            (true, false) => {
                if edge.capacity - flow > tol.abs {
                    return Err(ReportError::violation(format!(
                        "cut edge '{}' -> '{}' has residual {}",
                        network.label(edge.from),
                        network.label(edge.to),
                        edge.capacity - flow
                    )));
                }
                crossing.push(edge.id);
                capacity += edge.capacity;
                net_across += flow;
            }
            (false, true) => {
                if flow > tol.abs {
                    return Err(ReportError::violation(format!(
                        "edge '{}' -> '{}' into the source side carries {flow}",
                        network.label(edge.from),
                        network.label(edge.to)
                    )));
                }
                net_across -= flow;
            }
            _ => {}
        }
    }

    if crossing != min_cut.edges || !nearly_equal(capacity, min_cut.capacity, tol) {
        return Err(ReportError::violation(
            "cut edges do not match the source side",
        ));
    }
    if !nearly_equal(net_across, value, tol) {
        return Err(ReportError::violation(format!(
            "net flow {net_across} across the cut differs from flow value {value}"
        )));
    }
    Ok(())
}
