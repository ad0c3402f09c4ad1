use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// Adapts a plain `f64 -> f64` closure into an infallible [`Model`].
///
/// Pair it with [`ObjectiveOutput`] to optimize the closure directly.
#[derive(Debug, Clone, Copy)]
pub struct Function<F>(pub F);

impl<F> Function<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps `f` as a model.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*input))
    }
}

/// Problem whose input is `x` itself and whose objective is the model output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveOutput;

impl OptimizationProblem for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
