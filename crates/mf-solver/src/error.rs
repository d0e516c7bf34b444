//! Error types for solver operations.

use std::fmt;

use mf_core::MfError;
use thiserror::Error;

/// Budget that a solve can run out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Phases,
    Augmentations,
    Time,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Phases => write!(f, "phase"),
            Resource::Augmentations => write!(f, "augmentation"),
            Resource::Time => write!(f, "time"),
        }
    }
}

/// Errors that can occur during a max-flow solve.
///
/// On a validated network with default configuration none of these occur:
/// the algorithm itself is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Terminals do not belong to this network: {what}")]
    TerminalMismatch { what: String },

    #[error("Resource exceeded: {resource} budget of {limit} used up before the flow was maximal")]
    ResourceExceeded { resource: Resource, limit: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<MfError> for SolverError {
    fn from(e: MfError) -> Self {
        SolverError::InvalidConfig {
            what: e.to_string(),
        }
    }
}
