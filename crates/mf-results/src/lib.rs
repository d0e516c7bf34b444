//! mf-results: flow reports and invariant audits.
//!
//! Turns a solver's flow assignment into the ordered per-edge report
//! (flow, capacity, saturation) and checks that an assignment is a valid
//! maximum flow.

pub mod audit;
pub mod report;
pub mod types;

pub use audit::audit;
pub use report::build_report;
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A flow assignment broke one of the max-flow invariants. Never
    /// expected for solver output; indicates a defect.
    #[error("Internal invariant violation: {what}")]
    InternalInvariantViolation { what: String },
}

impl ReportError {
    pub(crate) fn violation(what: impl Into<String>) -> Self {
        ReportError::InternalInvariantViolation { what: what.into() }
    }
}
