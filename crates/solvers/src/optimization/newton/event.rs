use std::fmt;

use newt_core::Snapshot;

/// Event emitted by the Newton solver once per iteration.
///
/// The event is emitted after the step has been computed but before the
/// convergence check, so `next_x` is the iterate the solver will move to
/// unless an observer stops it.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Central-difference estimate of the first derivative at `x`.
    pub gradient: f64,

    /// Central three-point estimate of the second derivative at `x`.
    pub hessian: f64,

    /// Step that will be subtracted from `x`.
    pub step: f64,

    /// Iterate after applying the step.
    pub next_x: f64,

    /// Whether the step is the damped gradient fallback rather than a Newton step.
    pub fallback: bool,

    /// Model input and output at `x`.
    pub snapshot: &'a Snapshot<I, O>,
}

/// Renders the per-iteration progress line.
impl<I, O> fmt::Display for Event<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iter={:3}, x={:.12e}, f(x)={:.12e}, g={:.4e}, h={:.4e}, step={:.4e}",
            self.iter, self.x, self.objective, self.gradient, self.hessian, self.step
        )
    }
}
