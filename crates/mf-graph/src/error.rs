//! Graph-specific error types.

use std::fmt;

use mf_core::{EdgeId, NodeId, Real};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Why a (source, sink) pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalIssue {
    SameNode,
    UnknownSource,
    UnknownSink,
}

impl fmt::Display for TerminalIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalIssue::SameNode => write!(f, "source and sink must differ"),
            TerminalIssue::UnknownSource => write!(f, "source is not a node of the network"),
            TerminalIssue::UnknownSink => write!(f, "sink is not a node of the network"),
        }
    }
}

/// Network construction and validation errors.
///
/// Every user-facing variant names the offending node label(s).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Duplicate node: '{label}'")]
    DuplicateNode { label: String },

    #[error("Unknown node: '{label}'")]
    UnknownNode { label: String },

    #[error("Invalid capacity {capacity} on edge '{from}' -> '{to}' (must be finite and >= 0)")]
    InvalidCapacity {
        from: String,
        to: String,
        capacity: Real,
    },

    #[error("Self-loop on node '{label}' is not allowed")]
    SelfLoop { label: String },

    #[error("Duplicate edge: '{from}' -> '{to}'")]
    DuplicateEdge { from: String, to: String },

    #[error("Invalid terminals (source '{source_node}', sink '{sink_node}'): {reason}")]
    InvalidTerminals {
        source_node: String,
        sink_node: String,
        reason: TerminalIssue,
    },

    /// Adjacency index disagrees with the edge list. Indicates a defect.
    #[error("Edge {edge} in node {node}'s adjacency list but doesn't reference that node")]
    InconsistentAdjacency { node: NodeId, edge: EdgeId },
}

impl GraphError {
    /// True for errors the caller can fix by correcting the input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, GraphError::InconsistentAdjacency { .. })
    }
}
