/// Multiplier applied to the gradient when curvature is unusable.
pub const FALLBACK_DAMPING: f64 = 0.01;

/// Computes the amount to subtract from the current iterate.
///
/// Returns the Newton step `g / h`, or the damped gradient step
/// `FALLBACK_DAMPING * g` when `h` is exactly zero or non-finite.
///
/// A finite but tiny `h` still takes the Newton branch and may yield a very
/// large step.
#[must_use]
pub fn compute_step(g: f64, h: f64) -> f64 {
    Step::new(g, h).value()
}

/// A step together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Step {
    /// Newton step `g / h`.
    Newton(f64),

    /// Damped gradient step taken because `h` was zero or non-finite.
    Fallback(f64),
}

impl Step {
    #[allow(clippy::float_cmp)]
    pub(super) fn new(g: f64, h: f64) -> Self {
        if h == 0.0 || !h.is_finite() {
            Step::Fallback(FALLBACK_DAMPING * g)
        } else {
            Step::Newton(g / h)
        }
    }

    pub(super) fn value(self) -> f64 {
        match self {
            Step::Newton(step) | Step::Fallback(step) => step,
        }
    }

    pub(super) fn is_fallback(self) -> bool {
        matches!(self, Step::Fallback(_))
    }
}
