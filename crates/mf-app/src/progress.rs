use mf_solver::SolveProgressEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStage {
    BuildingNetwork,
    Solving,
    Reporting,
    Auditing,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveProgress {
    pub stage: SolveStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    /// Set for events forwarded from the solver.
    pub solver: Option<SolveProgressEvent>,
}

impl SolveProgress {
    pub fn stage(stage: SolveStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
            solver: None,
        }
    }

    pub fn solver(event: SolveProgressEvent, elapsed_wall_s: f64) -> Self {
        Self {
            stage: SolveStage::Solving,
            elapsed_wall_s,
            message: None,
            solver: Some(event),
        }
    }
}
