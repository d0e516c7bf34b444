//! High-level solver interface.

use mf_core::Real;
use mf_graph::{FlowNetwork, Terminals};

use crate::config::SolverConfig;
use crate::dinic::Dinic;
use crate::error::{SolverError, SolverResult};
use crate::solution::MaxFlowSolution;

/// Progress reported while a solve runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveProgressEvent {
    /// A level graph reaching the sink was built; a new phase starts.
    LevelGraphBuilt { phase: usize, sink_level: usize },
    /// A phase pushed a blocking flow.
    PhaseCompleted {
        phase: usize,
        pushed: Real,
        total: Real,
    },
    /// The sink is no longer reachable; the flow is maximum.
    Finished {
        total: Real,
        phases: usize,
        augmentations: usize,
    },
}

/// Compute a maximum flow with the default configuration.
///
/// Never fails on a network/terminal pair produced by
/// [`FlowNetwork::validate`]; the result is 0 when the sink cannot be
/// reached at all.
pub fn solve(network: &FlowNetwork, terminals: Terminals) -> SolverResult<MaxFlowSolution> {
    solve_with_config(network, terminals, &SolverConfig::default())
}

/// Compute a maximum flow under explicit tolerance and budgets.
pub fn solve_with_config(
    network: &FlowNetwork,
    terminals: Terminals,
    config: &SolverConfig,
) -> SolverResult<MaxFlowSolution> {
    solve_with_progress(network, terminals, config, &mut |_| {})
}

/// Compute a maximum flow, streaming progress events to `progress`.
///
/// This function:
/// 1. Validates the configuration and that the terminals fit the network
/// 2. Builds a fresh residual graph with zero flow
/// 3. Runs blocking-flow phases until the sink is unreachable, or a budget
///    runs out (`SolverError::ResourceExceeded`)
/// 4. Extracts per-edge flows and the minimum cut
pub fn solve_with_progress(
    network: &FlowNetwork,
    terminals: Terminals,
    config: &SolverConfig,
    progress: &mut dyn FnMut(SolveProgressEvent),
) -> SolverResult<MaxFlowSolution> {
    config.validate()?;
    check_terminals(network, terminals)?;

    Dinic::new(network, terminals, config).run(network, progress)
}

fn check_terminals(network: &FlowNetwork, terminals: Terminals) -> SolverResult<()> {
    let n = network.node_count();
    for (what, id) in [("source", terminals.source()), ("sink", terminals.sink())] {
        if id.idx() >= n {
            return Err(SolverError::TerminalMismatch {
                what: format!("{what} index {id} out of range for {n} nodes"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_graph::NetworkBuilder;

    #[test]
    fn terminals_from_a_bigger_network_rejected() {
        let mut big = NetworkBuilder::new();
        for n in ["a", "b", "c"] {
            big.add_node(n).unwrap();
        }
        let big = big.build().unwrap();
        let terminals = big.validate("a", "c").unwrap();

        let mut small = NetworkBuilder::new();
        small.add_node("x").unwrap();
        small.add_node("y").unwrap();
        let small = small.build().unwrap();

        let err = solve(&small, terminals).unwrap_err();
        assert!(matches!(err, SolverError::TerminalMismatch { .. }));
    }

    #[test]
    fn progress_events_in_order() {
        let mut b = NetworkBuilder::new();
        b.add_node("s").unwrap();
        b.add_node("t").unwrap();
        b.add_edge("s", "t", 3.0).unwrap();
        let net = b.build().unwrap();

        let mut events = Vec::new();
        let sol = solve_with_progress(
            &net,
            net.validate("s", "t").unwrap(),
            &SolverConfig::default(),
            &mut |e| events.push(e),
        )
        .unwrap();

        assert_eq!(sol.total_flow(), 3.0);
        assert_eq!(
            events,
            vec![
                SolveProgressEvent::LevelGraphBuilt {
                    phase: 1,
                    sink_level: 1
                },
                SolveProgressEvent::PhaseCompleted {
                    phase: 1,
                    pushed: 3.0,
                    total: 3.0
                },
                SolveProgressEvent::Finished {
                    total: 3.0,
                    phases: 1,
                    augmentations: 1
                },
            ]
        );
    }
}
