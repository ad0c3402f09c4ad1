//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasStep`] — events that carry the step about to be applied
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use newt_core::Observer;
//! use newt_observers::traits::{CanStopEarly, HasStep};
//! use newt_solvers::optimization::newton;
//!
//! /// Stops once the step stays small for a few iterations in a row.
//! struct Settled {
//!     tolerance: f64,
//!     needed: usize,
//!     streak: usize,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for Settled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.step().abs() < self.tolerance {
//!             self.streak += 1;
//!         } else {
//!             self.streak = 0;
//!         }
//!         (self.streak >= self.needed).then(A::stop_early)
//!     }
//! }
//!
//! let model = newt_core::Function::new(|x: f64| (x - 1.0).powi(4));
//! let observer = Settled { tolerance: 1e-3, needed: 2, streak: 0 };
//! let config = newton::Config::new(200, 1e-3, 0.0).unwrap();
//!
//! let solution =
//!     newton::minimize(&model, &newt_core::ObjectiveOutput, 3.0, &config, observer).unwrap();
//! assert_eq!(solution.status, newton::Status::StoppedByObserver);
//! ```

use newt_solvers::optimization::newton;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries the step the solver is about to apply.
pub trait HasStep {
    /// Returns the signed step for this event.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasObjective for newton::Event<'_, I, O> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<I, O> HasStep for newton::Event<'_, I, O> {
    fn step(&self) -> f64 {
        self.step
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
