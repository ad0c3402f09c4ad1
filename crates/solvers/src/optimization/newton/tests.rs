use std::cell::Cell;

use approx::assert_relative_eq;
use proptest::prelude::*;
use thiserror::Error as ThisError;

use newt_core::{Function, Model, ObjectiveOutput, OptimizationProblem};

use super::{
    Action, Config, Error, Event, Status, maximize_unobserved, minimize, minimize_fn,
    minimize_unobserved,
};

/// Shifted parabola: f(x) = (x - 3)².
fn parabola(x: f64) -> f64 {
    (x - 3.0).powi(2)
}

/// f(x) = |x|^(4/3), for which Newton's method maps x to -2x.
fn oscillating(x: f64) -> f64 {
    x.abs().powf(4.0 / 3.0)
}

/// Owned copy of the fields of an [`Event`].
#[derive(Debug, Clone, Copy)]
struct Record {
    iter: usize,
    x: f64,
    objective: f64,
    gradient: f64,
    hessian: f64,
    step: f64,
    next_x: f64,
    fallback: bool,
    input: f64,
    output: f64,
}

impl From<&Event<'_, f64, f64>> for Record {
    fn from(event: &Event<'_, f64, f64>) -> Self {
        Self {
            iter: event.iter,
            x: event.x,
            objective: event.objective,
            gradient: event.gradient,
            hessian: event.hessian,
            step: event.step,
            next_x: event.next_x,
            fallback: event.fallback,
            input: event.snapshot.input,
            output: event.snapshot.output,
        }
    }
}

#[test]
fn minimizes_parabola() {
    let solution = minimize_fn(parabola, 10.0, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.converged());
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
    assert!(solution.iters < Config::default().max_iters());
}

#[test]
fn maximizes_inverted_parabola() {
    let model = Function::new(|x: f64| 1.0 - (x + 2.0).powi(2));

    let solution = maximize_unobserved(&model, &ObjectiveOutput, 5.0, &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -2.0, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-10);
}

#[test]
fn converges_immediately_at_minimizer() {
    let solution = minimize_fn(parabola, 3.0, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-12);
}

#[test]
fn constant_function_converges_in_place() {
    let start = 7.25;
    let solution = minimize_fn(|_| 42.0, start, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x.to_bits(), start.to_bits());
    assert_relative_eq!(solution.objective, 42.0);
}

#[test]
fn objective_is_evaluated_once_after_the_loop() {
    let calls = Cell::new(0usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        parabola(x)
    };

    let solution = minimize_fn(f, 10.0, &Config::default()).expect("should solve");

    // Three stencil evaluations per iteration plus one for the final report.
    assert_eq!(calls.get(), 3 * solution.iters + 1);
    assert_relative_eq!(solution.objective, parabola(solution.x));
    assert_relative_eq!(solution.snapshot.input, solution.x);
    assert_relative_eq!(solution.snapshot.output, solution.objective);
}

#[test]
fn exhausts_iterations_when_oscillating() {
    let config = Config::new(6, 1e-4, 1e-8).unwrap();

    let solution = minimize_fn(oscillating, 1.0, &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 6);
    // Six doublings with alternating sign.
    assert_relative_eq!(solution.x, 64.0, max_relative = 1e-3);
}

#[test]
fn zero_eps_propagates_nan_until_exhausted() {
    let config = Config::new(5, 0.0, 1e-8).unwrap();

    let solution = minimize_fn(parabola, 10.0, &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!(solution.x.is_nan());
    assert!(solution.objective.is_nan());
}

#[test]
fn nan_objective_never_reports_convergence() {
    let config = Config::new(4, 1e-4, 1e-8).unwrap();

    let solution = minimize_fn(|_| f64::NAN, 1.0, &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert!(solution.x.is_nan());
}

#[test]
fn flat_curvature_takes_damped_gradient_step() {
    // Linear objective sampled on a dyadic stencil gives h == 0 exactly.
    let config = Config::new(1, 0.5, 1e-8).unwrap();
    let model = Function::new(|x: f64| 2.0 * x);

    let mut events = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        events.push((event.gradient, event.hessian, event.step, event.fallback));
        None
    };

    let solution = minimize(&model, &ObjectiveOutput, 0.0, &config, observer).expect("should run");

    assert_eq!(events, vec![(2.0, 0.0, 0.02, true)]);
    assert_eq!(solution.status, Status::MaxIters);
    assert_relative_eq!(solution.x, -0.02);

    let solution = maximize_unobserved(&model, &ObjectiveOutput, 0.0, &config).expect("should run");
    assert_relative_eq!(solution.x, 0.02);
}

#[test]
fn rounding_level_curvature_takes_runaway_newton_steps() {
    // After the first fallback step the stencil is no longer dyadic, so the
    // curvature of a linear objective is rounding noise rather than zero.
    let config = Config::new(10, 0.5, 1e-8).unwrap();
    let model = Function::new(|x: f64| 2.0 * x);

    let mut fallbacks = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        fallbacks.push(event.fallback);
        None
    };

    let solution = minimize(&model, &ObjectiveOutput, 0.0, &config, observer).expect("should run");

    assert_eq!(fallbacks.first(), Some(&true));
    assert!(fallbacks[1..].iter().any(|fallback| !fallback));
    assert!(solution.x.abs() > 1e6, "expected a runaway iterate, got {}", solution.x);
}

#[test]
fn events_follow_the_iterates() {
    let model = Function::new(|x: f64| x.powi(4) + x.powi(2));

    let mut events = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        events.push(Record::from(event));
        None
    };

    let solution = minimize(&model, &ObjectiveOutput, 2.0, &Config::default(), observer)
        .expect("should solve");

    assert_eq!(events.len(), solution.iters);
    assert_relative_eq!(events[0].x, 2.0);

    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
        assert!(!event.fallback);
        assert_relative_eq!(event.step, event.gradient / event.hessian);
        assert_relative_eq!(event.next_x, event.x - event.step);
        assert_relative_eq!(event.input, event.x);
        assert_relative_eq!(event.objective, event.output);
    }
    for pair in events.windows(2) {
        assert_relative_eq!(pair[1].x, pair[0].next_x);
    }

    let last = events.last().expect("at least one event");
    assert_relative_eq!(solution.x, last.next_x);
    assert_relative_eq!(solution.x, 0.0, epsilon = 1e-6);
}

#[test]
fn observer_can_stop_early() {
    let mut calls = 0;
    let mut seen_x = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        calls += 1;
        seen_x.push(event.x);
        if event.iter >= 2 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let config = Config::new(50, 1e-4, 0.0).unwrap();
    let solution = minimize(&Function::new(oscillating), &ObjectiveOutput, 1.0, &config, observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(calls, 2);
    // The step observed at iteration 2 is not applied.
    assert_relative_eq!(solution.x, seen_x[1]);
}

#[test]
fn verbose_does_not_change_the_result() {
    let quiet = minimize_fn(parabola, -4.0, &Config::default()).expect("should solve");
    let loud = minimize_fn(parabola, -4.0, &Config::default().with_verbose(true))
        .expect("should solve");

    assert_eq!(quiet.iters, loud.iters);
    assert_eq!(quiet.status, loud.status);
    assert_eq!(quiet.x.to_bits(), loud.x.to_bits());
}

#[derive(Debug, ThisError)]
#[error("objective undefined at x = {0}")]
struct Undefined(f64);

/// Logarithm that fails outside its domain.
struct Log;

impl Model for Log {
    type Input = f64;
    type Output = f64;
    type Error = Undefined;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > 0.0 { Ok(x.ln()) } else { Err(Undefined(*x)) }
    }
}

/// Problem that rejects inputs above a ceiling.
struct Ceiling(f64);

impl OptimizationProblem for Ceiling {
    type Input = f64;
    type Output = f64;
    type Error = Undefined;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        if x <= self.0 { Ok(x) } else { Err(Undefined(x)) }
    }

    fn objective(&self, input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(input - output)
    }
}

#[test]
fn model_error_propagates() {
    // x - ln(x) has its minimum at x = 1, but the lower stencil point of the
    // first iteration is already outside the domain.
    let result = minimize(&Log, &Ceiling(10.0), 0.5e-4, &Config::default(), ());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn problem_error_propagates() {
    let result = minimize_unobserved(&Log, &Ceiling(2.0), 2.0, &Config::default());

    assert!(matches!(result, Err(Error::Problem(_))));
}

#[test]
fn fallible_model_solves_inside_its_domain() {
    let solution =
        minimize_unobserved(&Log, &Ceiling(10.0), 1.5, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-10);
}

proptest! {
    #[test]
    fn iterations_never_exceed_budget(
        start in 0.5_f64..2.0,
        max_iters in 1_usize..=12,
    ) {
        let config = Config::new(max_iters, 1e-2, 1e-8).unwrap();
        let solution = minimize_fn(oscillating, start, &config).unwrap();

        prop_assert_eq!(solution.status, Status::MaxIters);
        prop_assert_eq!(solution.iters, max_iters);
        prop_assert!(solution.x.abs() > start);
    }

    #[test]
    fn parabola_converges_from_anywhere(start in -1e3_f64..1e3) {
        let solution = minimize_fn(parabola, start, &Config::default()).unwrap();

        prop_assert!(solution.converged());
        prop_assert!(solution.iters < 100);
        prop_assert!((solution.x - 3.0).abs() < 1e-4);
    }

    #[test]
    fn tighter_tol_never_needs_fewer_iterations(
        start in -5.0_f64..5.0,
        loose_exp in 2_i32..6,
        extra_exp in 1_i32..4,
    ) {
        let f = |x: f64| (x - 1.0).powi(4) + 0.1 * (x - 1.0).powi(2);
        let loose = Config::new(200, 1e-4, 10_f64.powi(-loose_exp)).unwrap();
        let tight = Config::new(200, 1e-4, 10_f64.powi(-(loose_exp + extra_exp))).unwrap();

        let loose = minimize_fn(f, start, &loose).unwrap();
        let tight = minimize_fn(f, start, &tight).unwrap();

        prop_assert!(tight.iters >= loose.iters);
    }
}
