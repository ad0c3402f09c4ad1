//! Core traits and types for the newt optimizer.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts the scalar solver variable to a model
//!   input and extracts an objective from the output
//! - [`Function`] and [`ObjectiveOutput`] — adapters for plain `f64 -> f64`
//!   closures

mod function;
mod model;
mod observer;
mod problem;

pub use function::{Function, ObjectiveOutput};
pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OptimizationProblem;
