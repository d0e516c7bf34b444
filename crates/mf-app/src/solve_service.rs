//! Solve pipeline: build, solve, report, audit.

use mf_core::Timer;
use mf_graph::DuplicateEdgePolicy;
use mf_project::NetworkDef;
use mf_results::FlowReport;
use mf_solver::{SolverConfig, SolveStats};
use serde::Serialize;
use tracing::info;

use crate::error::AppResult;
use crate::network_service::{build_network, resolve_terminals};
use crate::progress::{SolveProgress, SolveStage};

/// Options for a solve.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Overrides the definition's source.
    pub source: Option<String>,
    /// Overrides the definition's sink.
    pub sink: Option<String>,
    pub solver: SolverConfig,
    /// Forces last-write-wins for repeated edges regardless of the file.
    pub allow_duplicate_edges: bool,
    /// Run the invariant audit on the result.
    pub audit: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            source: None,
            sink: None,
            solver: SolverConfig::default(),
            allow_duplicate_edges: false,
            audit: true,
        }
    }
}

/// Request to solve one network.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub network: NetworkDef,
    pub options: SolveOptions,
}

impl SolveRequest {
    pub fn new(network: NetworkDef) -> Self {
        Self {
            network,
            options: SolveOptions::default(),
        }
    }
}

/// The minimum cut by node label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinCutSummary {
    pub source_side: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub capacity: f64,
}

/// Timing and counters for a solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolveTiming {
    pub phases: usize,
    pub augmentations: usize,
    pub build_time_s: f64,
    pub solve_time_s: f64,
    pub total_time_s: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub report: FlowReport,
    pub min_cut: MinCutSummary,
    pub stats: SolveTiming,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(SolveProgress)>,
    stage: SolveStage,
    timer: &Timer,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(SolveProgress::stage(stage, timer.elapsed_s(), message));
    }
}

pub fn solve_network(request: &SolveRequest) -> AppResult<SolveResponse> {
    solve_network_with_progress(request, None)
}

/// Solve a network definition and stream progress events.
///
/// Structural errors (bad nodes/edges/terminals) abort before the solver
/// runs.
pub fn solve_network_with_progress(
    request: &SolveRequest,
    mut progress_cb: Option<&mut dyn FnMut(SolveProgress)>,
) -> AppResult<SolveResponse> {
    let timer = Timer::start();
    let def = &request.network;
    let options = &request.options;

    emit_progress(&mut progress_cb, SolveStage::BuildingNetwork, &timer, None);
    let policy = if options.allow_duplicate_edges {
        DuplicateEdgePolicy::LastWriteWins
    } else {
        def.duplicate_edges.into()
    };
    let network = build_network(def, policy)?;
    let terminals = resolve_terminals(
        def,
        &network,
        options.source.as_deref(),
        options.sink.as_deref(),
    )?;
    let build_time_s = timer.elapsed_s();

    emit_progress(
        &mut progress_cb,
        SolveStage::Solving,
        &timer,
        Some(format!(
            "{} -> {}",
            network.label(terminals.source()),
            network.label(terminals.sink())
        )),
    );
    let solution = mf_solver::solve_with_progress(&network, terminals, &options.solver, &mut |event| {
        if let Some(cb) = progress_cb.as_deref_mut() {
            cb(SolveProgress::solver(event, timer.elapsed_s()));
        }
    })?;

    emit_progress(&mut progress_cb, SolveStage::Reporting, &timer, None);
    let epsilon = options.solver.epsilon;
    let report = mf_results::build_report(&network, terminals, &solution.assignment, epsilon)?;

    if options.audit {
        emit_progress(&mut progress_cb, SolveStage::Auditing, &timer, None);
        mf_results::audit(
            &network,
            terminals,
            &solution.assignment,
            &solution.min_cut,
            epsilon,
        )?;
    }

    let min_cut = MinCutSummary {
        source_side: solution
            .min_cut
            .source_side
            .iter()
            .map(|&id| network.label(id).to_string())
            .collect(),
        edges: solution
            .min_cut
            .edges
            .iter()
            .filter_map(|&id| network.edge(id))
            .map(|e| (network.label(e.from).to_string(), network.label(e.to).to_string()))
            .collect(),
        capacity: solution.min_cut.capacity,
    };
    let stats = timing(&solution.stats, build_time_s, timer.elapsed_s());

    info!(
        network = %def.name,
        total_flow = report.total_flow,
        phases = stats.phases,
        total_time_s = stats.total_time_s,
        "solve completed"
    );
    emit_progress(&mut progress_cb, SolveStage::Completed, &timer, None);

    Ok(SolveResponse {
        report,
        min_cut,
        stats,
    })
}

fn timing(stats: &SolveStats, build_time_s: f64, total_time_s: f64) -> SolveTiming {
    SolveTiming {
        phases: stats.phases,
        augmentations: stats.augmentations,
        build_time_s,
        solve_time_s: stats.elapsed_s,
        total_time_s,
    }
}
