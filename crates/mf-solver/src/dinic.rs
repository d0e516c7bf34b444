//! Dinic's blocking-flow algorithm.
//!
//! Each phase builds a BFS level graph over arcs with residual > epsilon,
//! then repeatedly finds source->sink paths that climb exactly one level
//! per arc and pushes the bottleneck along them. A per-node current-arc
//! pointer means every arc is discarded at most once per phase. The path
//! search keeps its own stack, so long chains cannot overflow the call
//! stack.

use std::collections::VecDeque;

use mf_core::{EdgeId, NodeId, Real, Timer, clamp_to};
use mf_graph::{FlowNetwork, Terminals};
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::error::{Resource, SolverError, SolverResult};
use crate::residual::{ArcId, ResidualGraph};
use crate::solution::{FlowAssignment, MaxFlowSolution, MinCut, SolveStats};
use crate::solve::SolveProgressEvent;

const UNREACHED: u32 = u32::MAX;

pub(crate) struct Dinic<'a> {
    graph: ResidualGraph,
    source: usize,
    sink: usize,
    config: &'a SolverConfig,
    /// BFS distance from the source; `UNREACHED` otherwise.
    level: Vec<u32>,
    /// Per-node index into its arc list: arcs before it are spent this phase.
    current: Vec<usize>,
    path: Vec<ArcId>,
    timer: Timer,
    stats: SolveStats,
    total: Real,
}

impl<'a> Dinic<'a> {
    pub(crate) fn new(
        network: &FlowNetwork,
        terminals: Terminals,
        config: &'a SolverConfig,
    ) -> Self {
        let graph = ResidualGraph::new(network);
        let n = graph.node_count();
        Self {
            graph,
            source: terminals.source().idx(),
            sink: terminals.sink().idx(),
            config,
            level: vec![UNREACHED; n],
            current: vec![0; n],
            path: Vec::new(),
            timer: Timer::start(),
            stats: SolveStats::default(),
            total: 0.0,
        }
    }

    /// Run phases until the sink is unreachable in the residual graph.
    pub(crate) fn run(
        mut self,
        network: &FlowNetwork,
        progress: &mut dyn FnMut(SolveProgressEvent),
    ) -> SolverResult<MaxFlowSolution> {
        loop {
            self.check_time()?;
            if !self.build_levels() {
                break;
            }
            if let Some(max) = self.config.max_phases {
                if self.stats.phases >= max {
                    return Err(SolverError::ResourceExceeded {
                        resource: Resource::Phases,
                        limit: max.to_string(),
                    });
                }
            }

            self.stats.phases += 1;
            let phase = self.stats.phases;
            let sink_level = self.level[self.sink] as usize;
            debug!(phase, sink_level, "level graph built");
            progress(SolveProgressEvent::LevelGraphBuilt { phase, sink_level });

            self.current.fill(0);
            let mut pushed = 0.0;
            while self.find_path() {
                if let Some(max) = self.config.max_augmentations {
                    if self.stats.augmentations >= max {
                        return Err(SolverError::ResourceExceeded {
                            resource: Resource::Augmentations,
                            limit: max.to_string(),
                        });
                    }
                }
                pushed += self.push_path();
                self.stats.augmentations += 1;
                self.check_time()?;
            }

            self.total += pushed;
            debug!(phase, pushed, total = self.total, "blocking flow pushed");
            progress(SolveProgressEvent::PhaseCompleted {
                phase,
                pushed,
                total: self.total,
            });
        }

        self.stats.elapsed_s = self.timer.elapsed_s();
        info!(
            total = self.total,
            phases = self.stats.phases,
            augmentations = self.stats.augmentations,
            elapsed_s = self.stats.elapsed_s,
            "max flow computed"
        );
        progress(SolveProgressEvent::Finished {
            total: self.total,
            phases: self.stats.phases,
            augmentations: self.stats.augmentations,
        });

        Ok(self.finish(network))
    }

    /// BFS from the source. Returns true if the sink was reached.
    ///
    /// Stops expanding once the sink's level is known; nodes further out
    /// cannot lie on a shortest path.
    fn build_levels(&mut self) -> bool {
        let eps = self.config.epsilon;
        self.level.fill(UNREACHED);
        self.level[self.source] = 0;
        let mut queue = VecDeque::from([self.source]);

        while let Some(v) = queue.pop_front() {
            let next = self.level[v] + 1;
            if next > self.level[self.sink] {
                // only true once the sink has a level
                break;
            }
            for &arc in self.graph.arcs(v) {
                let w = self.graph.head(arc);
                if self.level[w] == UNREACHED && self.graph.residual(arc) > eps {
                    self.level[w] = next;
                    queue.push_back(w);
                }
            }
        }

        self.level[self.sink] != UNREACHED
    }

    /// Find one source->sink path in the level graph, leaving it in
    /// `self.path`. Returns false when the phase's flow is blocking.
    fn find_path(&mut self) -> bool {
        self.path.clear();
        let mut v = self.source;

        while v != self.sink {
            match self.next_admissible(v) {
                Some(arc) => {
                    self.path.push(arc);
                    v = self.graph.head(arc);
                }
                None => {
                    // Dead end: nothing through v can reach the sink this phase.
                    self.level[v] = UNREACHED;
                    match self.path.pop() {
                        Some(arc) => {
                            v = self.graph.tail(arc);
                            self.current[v] += 1;
                        }
                        None => return false,
                    }
                }
            }
        }

        true
    }

    /// Advance v's current-arc pointer to the next arc into level + 1 with
    /// positive residual.
    fn next_admissible(&mut self, v: usize) -> Option<ArcId> {
        let eps = self.config.epsilon;
        let want = self.level[v].checked_add(1)?;
        let arcs = self.graph.arcs(v);

        while self.current[v] < arcs.len() {
            let arc = arcs[self.current[v]];
            if self.level[self.graph.head(arc)] == want && self.graph.residual(arc) > eps {
                return Some(arc);
            }
            self.current[v] += 1;
        }

        None
    }

    /// Push the bottleneck amount along `self.path`.
    fn push_path(&mut self) -> Real {
        let bottleneck = self
            .path
            .iter()
            .map(|&arc| self.graph.residual(arc))
            .fold(Real::INFINITY, Real::min);

        for &arc in &self.path {
            self.graph.push(arc, bottleneck);
        }

        bottleneck
    }

    fn check_time(&self) -> SolverResult<()> {
        if self.timer.exceeded(self.config.time_limit) {
            return Err(SolverError::ResourceExceeded {
                resource: Resource::Time,
                limit: format!("{:?}", self.config.time_limit.unwrap_or_default()),
            });
        }
        Ok(())
    }

    /// Extract flows and the min cut. `self.level` still holds the last
    /// BFS, which exhausted everything reachable from the source.
    fn finish(self, network: &FlowNetwork) -> MaxFlowSolution {
        let flows = self
            .graph
            .edge_flows()
            .iter()
            .enumerate()
            .map(|(e, &f)| clamp_to(f, 0.0, self.graph.edge_capacity(e)))
            .collect();

        let reachable = |n: NodeId| self.level[n.idx()] != UNREACHED;
        let source_side: Vec<NodeId> = network
            .nodes()
            .iter()
            .map(|n| n.id)
            .filter(|&n| reachable(n))
            .collect();
        let cut_edges: Vec<EdgeId> = network
            .edges()
            .iter()
            .filter(|e| reachable(e.from) && !reachable(e.to))
            .map(|e| e.id)
            .collect();
        let capacity = cut_edges
            .iter()
            .filter_map(|&e| network.edge(e))
            .map(|e| e.capacity)
            .sum();

        MaxFlowSolution {
            assignment: FlowAssignment {
                flows,
                total: self.total,
            },
            min_cut: MinCut {
                source_side,
                edges: cut_edges,
                capacity,
            },
            stats: self.stats,
        }
    }
}
