/// Estimates the first derivative of `f` at `x` by central difference.
///
/// Computes `(f(x + eps) - f(x - eps)) / (2 * eps)`, which is second-order
/// accurate in `eps` for smooth `f`. The perturbation is not validated: a zero
/// or negative `eps` yields a non-finite or sign-flipped estimate.
pub fn estimate_gradient<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    central_first(f(x - eps), f(x + eps), eps)
}

/// Estimates the second derivative of `f` at `x` by the central three-point formula.
///
/// Computes `(f(x + eps) - 2 * f(x) + f(x - eps)) / eps²`. As with
/// [`estimate_gradient`], `eps` is not validated.
pub fn estimate_hessian<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    central_second(f(x - eps), f(x), f(x + eps), eps)
}

/// Objective values sampled at `x - eps`, `x`, and `x + eps`.
///
/// The solver samples one stencil per iteration and derives both derivative
/// estimates from it, so each iteration costs three objective evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Stencil {
    lower: f64,
    center: f64,
    upper: f64,
    eps: f64,
}

impl Stencil {
    pub(super) fn new(lower: f64, center: f64, upper: f64, eps: f64) -> Self {
        Self {
            lower,
            center,
            upper,
            eps,
        }
    }

    /// Objective value at the stencil center.
    pub(super) fn center(&self) -> f64 {
        self.center
    }

    pub(super) fn gradient(&self) -> f64 {
        central_first(self.lower, self.upper, self.eps)
    }

    pub(super) fn hessian(&self) -> f64 {
        central_second(self.lower, self.center, self.upper, self.eps)
    }
}

fn central_first(lower: f64, upper: f64, eps: f64) -> f64 {
    (upper - lower) / (2.0 * eps)
}

fn central_second(lower: f64, center: f64, upper: f64, eps: f64) -> f64 {
    (upper - 2.0 * center + lower) / (eps * eps)
}
