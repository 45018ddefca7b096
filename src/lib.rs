pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod optim;

#[cfg(test)]
mod test_support;

pub use dataset::Dataset;
pub use error::{RegressionError, Result};
pub use linear_model::{CostEvaluation, Regression, RegressionKind};
pub use model_selection::{LambdaSearch, LambdaTrial, SearchOutcome, DEFAULT_LAMBDAS};
pub use optim::{Fmincg, GradientDescent, Minimizer};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
