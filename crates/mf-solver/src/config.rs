//! Solver configuration.

use std::time::Duration;

use mf_core::{DEFAULT_FLOW_EPSILON, Real, ensure_tolerance};

use crate::error::SolverResult;

/// Dinic solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Residual capacities at or below this are treated as zero.
    pub epsilon: Real,
    /// Maximum number of blocking-flow phases (None = unbounded).
    pub max_phases: Option<usize>,
    /// Maximum number of augmenting paths over the whole solve.
    pub max_augmentations: Option<usize>,
    /// Wall-clock limit for the whole solve.
    pub time_limit: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_FLOW_EPSILON,
            max_phases: None,
            max_augmentations: None,
            time_limit: None,
        }
    }
}

impl SolverConfig {
    pub fn with_epsilon(mut self, epsilon: Real) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_phases(mut self, max_phases: usize) -> Self {
        self.max_phases = Some(max_phases);
        self
    }

    pub fn with_max_augmentations(mut self, max_augmentations: usize) -> Self {
        self.max_augmentations = Some(max_augmentations);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> SolverResult<()> {
        ensure_tolerance(self.epsilon)?;
        Ok(())
    }
}
