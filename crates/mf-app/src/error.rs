//! Error types for the mf-app service layer.

use std::path::PathBuf;

use mf_graph::GraphError;
use mf_project::ProjectError;
use mf_results::ReportError;
use mf_solver::SolverError;

/// Application error type that wraps the backend crates' errors, keeping
/// each kind distinct.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Unsupported network file extension: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("No {which} given and the network has no default {which}")]
    MissingTerminal { which: &'static str },

    #[error("Output error: {what}")]
    Output { what: String },
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True when the caller can fix the problem by changing the input
    /// (file contents, terminals, or options).
    pub fn is_input_error(&self) -> bool {
        match self {
            AppError::Project(_) | AppError::UnsupportedFormat { .. } => true,
            AppError::MissingTerminal { .. } => true,
            AppError::Graph(e) => e.is_input_error(),
            AppError::Solver(e) => matches!(e, SolverError::InvalidConfig { .. }),
            AppError::Report(_) | AppError::Output { .. } => false,
        }
    }

    /// True for defects: broken invariants that no input should cause.
    pub fn is_internal(&self) -> bool {
        match self {
            AppError::Graph(e) => !e.is_input_error(),
            AppError::Solver(e) => matches!(e, SolverError::TerminalMismatch { .. }),
            AppError::Report(_) => true,
            _ => false,
        }
    }
}
