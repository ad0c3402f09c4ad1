//! Newton's method with finite-difference derivatives for single-variable optimization.
//!
//! # Algorithm
//!
//! Each iteration samples the objective at `x - eps`, `x`, and `x + eps`,
//! estimates the first derivative `g` by central difference and the second
//! derivative `h` by the central three-point formula, and moves to
//! `x - g / h`. When `h` is exactly zero or non-finite the solver instead
//! takes a damped gradient step `x - 0.01 * g` (see [`FALLBACK_DAMPING`]).
//!
//! The iteration converges when `|x_next - x| < tol` and otherwise stops after
//! `max_iters` iterations, whatever the objective does. The reported objective
//! is always re-evaluated at the final `x`.
//!
//! # When to Use
//!
//! - The objective is smooth near the starting point
//! - Analytic derivatives are unavailable
//! - A good starting point is known (Newton's method converges locally)
//!
//! # Limitations
//!
//! - **Stationary points only**: Newton iteration on the derivative converges
//!   to maxima and saddles as readily as to minima
//! - **No step control**: a tiny but nonzero curvature estimate can produce an
//!   arbitrarily large step
//! - **Silent degradation**: non-finite objective values propagate through the
//!   iterates instead of raising an error
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is computed and
//! before the convergence check. Observers can return [`Action::StopEarly`] to
//! halt and report the current iterate.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod stencil;
mod step;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use stencil::{estimate_gradient, estimate_hessian};
pub use step::{FALLBACK_DAMPING, compute_step};

use newt_core::{Function, Model, ObjectiveOutput, Observer, OptimizationProblem};

use search::search;

/// Searches for a local minimum of the objective starting from `start`.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    search(model, problem, start, config, observer, |v| v)
}

/// Searches for a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start, config, ())
}

/// Searches for a local minimum of a plain `f64 -> f64` function.
///
/// # Errors
///
/// The wrapped function cannot fail, so this only returns `Ok`. The `Result`
/// keeps the signature aligned with [`minimize`].
pub fn minimize_fn<F>(f: F, start: f64, config: &Config) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    minimize_unobserved(&Function::new(f), &ObjectiveOutput, start, config)
}

/// Searches for a local maximum of the objective starting from `start`.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    search(model, problem, start, config, observer, |v| -v)
}

/// Searches for a local maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, start, config, ())
}
