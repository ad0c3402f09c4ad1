use newt_core::Snapshot;

/// Indicates how the Newton iteration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The change in x fell below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
///
/// `objective` and `snapshot` come from a single evaluation at `x` made after
/// the loop ends, never from a value cached during iteration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of iterations executed.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
