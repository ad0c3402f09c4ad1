/// Defines a one-dimensional optimization problem.
///
/// An optimization problem maps the scalar solver variable `x` to a model
/// input, then computes an objective value from the model input and output.
/// Solvers search for the `x` that makes the objective stationary.
pub trait OptimizationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the solver variable `x` into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
