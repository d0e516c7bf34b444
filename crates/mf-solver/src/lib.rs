//! Maximum-flow solver for capacitated directed networks.
//!
//! This crate implements Dinic's blocking-flow algorithm over an
//! `mf_graph::FlowNetwork`. Each solve owns a fresh residual graph; the
//! outputs are the per-edge flow assignment, a minimum cut read off the
//! final residual graph, and run statistics.

pub mod config;
pub(crate) mod dinic;
pub mod error;
pub(crate) mod residual;
pub mod solution;
pub mod solve;

pub use config::SolverConfig;
pub use error::{Resource, SolverError, SolverResult};
pub use solution::{FlowAssignment, MaxFlowSolution, MinCut, SolveStats};
pub use solve::{SolveProgressEvent, solve, solve_with_config, solve_with_progress};
