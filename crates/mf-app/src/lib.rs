//! Shared application service layer for maxflow.
//!
//! Ties the input formats, graph model, solver and reporter into one
//! pipeline used by the CLI: load a network definition, build and
//! validate it, solve, then report and audit the result.

pub mod error;
pub mod network_service;
pub mod progress;
pub mod solve_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use network_service::{NetworkSummary, build_network, load_network, resolve_terminals, validate_network};
pub use progress::{SolveStage, SolveProgress};
pub use solve_service::{
    MinCutSummary, SolveOptions, SolveRequest, SolveResponse, SolveTiming, solve_network,
    solve_network_with_progress,
};
