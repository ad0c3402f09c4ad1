//! Numerical solvers built on the `newt-core` abstractions.
//!
//! - [`optimization::newton`] — Newton's method with finite-difference
//!   derivative estimates for locating a stationary point of a scalar function

pub mod optimization;
