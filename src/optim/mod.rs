//! Iterative minimizers that fit a [`Regression`]'s parameters.
//!
//! A minimizer repeatedly evaluates [`Regression::cost`] with its gradient
//! and writes the refined parameters back into `model.theta`. The
//! hyperparameter search only relies on the [`Minimizer`] trait, so any
//! implementation can be plugged in.
//!
//! - `Fmincg`: nonlinear conjugate gradient with a Wolfe-Powell line search
//! - `GradientDescent`: fixed step batch gradient descent

mod fmincg;
mod gradient_descent;

pub use fmincg::Fmincg;
pub use gradient_descent::GradientDescent;

use crate::error::Result;
use crate::linear_model::Regression;

/// Refines a model's parameters in place under a fixed regularization
/// strength.
pub trait Minimizer {
    /// Runs at most `max_iterations` iterations starting from the current
    /// `model.theta`, leaving the refined parameters in `model.theta`.
    ///
    /// `verbose` raises per-iteration progress logging from debug to info.
    /// Returns the cost reached after each completed iteration.
    fn minimize(
        &self,
        model: &mut Regression,
        lambda: f64,
        max_iterations: usize,
        verbose: bool,
    ) -> Result<Vec<f64>>;
}
