//! Regularized linear and logistic regression models.
//!
//! This module provides:
//! - `Regression`: a training set plus the parameter vector fitted to it
//! - `RegressionKind`: selects the linear or logistic hypothesis and cost
//! - `Regression::cost`: the regularized objective and its gradient
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use regularized_regression::{Fmincg, Minimizer, Regression};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = Regression::linear(x, y);
//! Fmincg::new().minimize(&mut model, 0.0, 50, false).unwrap();
//! let cost = model.cost(0.0, false).unwrap().cost;
//! assert!(cost < 1e-6);
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use regularized_regression::{Fmincg, Minimizer, Regression};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = Regression::logistic(x, y);
//! Fmincg::new().minimize(&mut model, 0.1, 50, false).unwrap();
//! let classes = model.predict_classes(&model.x).unwrap();
//! assert_eq!(classes, model.y);
//! ```

mod cost;
mod regression;

pub use cost::CostEvaluation;
pub use regression::{sigmoid, Regression, RegressionKind};
pub(crate) use regression::rows_to_matrix;
