use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    eps: f64,
    tol: f64,
    verbose: bool,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            eps: 1e-4,
            tol: 1e-8,
            verbose: false,
        }
    }
}

impl Config {
    /// Creates a new config with progress reporting disabled.
    ///
    /// The perturbation `eps` is taken as given. A zero, negative, or
    /// non-finite value is not rejected; it produces non-finite derivative
    /// estimates that propagate through the iterates.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is negative or non-finite.
    pub fn new(max_iters: usize, eps: f64, tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self {
            max_iters,
            eps,
            tol,
            verbose: false,
        })
    }

    /// Enables or disables writing a progress line to stdout per iteration.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the finite-difference perturbation size.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the convergence threshold on the per-iteration change in x.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns whether per-iteration progress is written to stdout.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
