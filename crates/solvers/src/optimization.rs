//! Solvers for optimization problems — minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and extracts a scalar objective. Solvers in this module
//! search for the `x` at which that objective is stationary.
//!
//! # Solvers
//!
//! - [`newton`] — Newton iteration on finite-difference estimates of the first
//!   and second derivative
//!
//! [`OptimizationProblem`]: newt_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod newton;
