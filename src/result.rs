//! Output shared by all searches.

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The schedule parameter (step size, radius or temperature) fell
    /// below epsilon.
    Converged,

    /// The iteration budget was used up first.
    Exhausted,
}

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The best point found. Always inside the bounds and of the same
    /// dimension.
    pub best: Vec<f64>,

    /// Objective value at `best`.
    pub best_value: f64,

    /// Number of candidate points generated.
    pub iterations: usize,

    /// Number of objective calls, including the initial point.
    pub evaluations: usize,

    /// Number of candidates that replaced the current point.
    pub accepted_moves: usize,

    /// Number of accepted candidates that strictly lowered the current value.
    pub improving_moves: usize,

    /// Step size, radius or temperature when the run stopped.
    pub final_schedule: f64,

    /// How the run ended.
    pub termination: Termination,
}

impl SearchResult {
    /// Returns `true` if the run stopped on the schedule floor rather than
    /// the iteration budget.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
