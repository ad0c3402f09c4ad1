use tracing::{debug, trace};

use newt_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::{
    Action, Config, Error, Event, Solution, Status,
    stencil::Stencil,
    step::Step,
};

/// Core Newton iteration.
///
/// The `transform` function is applied to the derivative estimates before the
/// step is computed, allowing the same loop to minimize (identity) or
/// maximize (negation). The Newton step is unchanged by negation; only the
/// fallback direction flips.
pub(super) fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
    F: Fn(f64) -> f64,
{
    let eps = config.eps();
    let mut x = start;

    for iter in 1..=config.max_iters() {
        let center = evaluate(model, problem, x)?;
        let lower = evaluate(model, problem, x - eps)?.objective;
        let upper = evaluate(model, problem, x + eps)?.objective;
        let stencil = Stencil::new(lower, center.objective, upper, eps);

        let gradient = stencil.gradient();
        let hessian = stencil.hessian();
        let step = Step::new(transform(gradient), transform(hessian));
        let next_x = x - step.value();

        trace!(
            iter,
            x,
            objective = stencil.center(),
            gradient,
            hessian,
            step = step.value(),
            "newton iteration"
        );
        if step.is_fallback() {
            debug!(iter, x, hessian, "unusable curvature, taking damped gradient step");
        }

        let event = Event {
            iter,
            x,
            objective: stencil.center(),
            gradient,
            hessian,
            step: step.value(),
            next_x,
            fallback: step.is_fallback(),
            snapshot: &center.snapshot,
        };

        if config.verbose() {
            println!("{event}");
        }

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(model, problem, x, Status::StoppedByObserver, iter);
        }

        if (next_x - x).abs() < config.tol() {
            return finish(model, problem, next_x, Status::Converged, iter);
        }

        x = next_x;
    }

    finish(model, problem, x, Status::MaxIters, config.max_iters())
}

/// Evaluates the final iterate once and assembles the solution.
fn finish<M, P>(
    model: &M,
    problem: &P,
    x: f64,
    status: Status,
    iters: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    debug!(?status, iters, x, objective = eval.objective, "newton finished");

    Ok(Solution {
        status,
        x: eval.x,
        objective: eval.objective,
        snapshot: eval.snapshot,
        iters,
    })
}
