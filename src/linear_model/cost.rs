use super::regression::{sigmoid, Regression, RegressionKind};
use crate::error::{RegressionError, Result};
use crate::Vector;

/// Value of the regularized objective, and its gradient when requested.
#[derive(Clone, Debug)]
pub struct CostEvaluation {
    pub cost: f64,
    pub gradient: Option<Vector>,
}

impl Regression {
    /// Evaluates the regularized cost of the current `theta` over the whole
    /// training set, optionally with its gradient.
    ///
    /// `lambda` is the regularization strength: 0 disables regularization and
    /// larger values push every non-bias parameter towards zero. The bias
    /// parameter `theta[0]` never enters the penalty of the cost.
    ///
    /// No clamping is applied: a logistic hypothesis of exactly 0 or 1 yields a
    /// non-finite cost, and an empty training set yields NaN.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::RowLabelMismatch`] when `y` has a different
    /// length than the number of rows of `x`, and
    /// [`RegressionError::WidthMismatch`] when `theta` is not as wide as `x`.
    pub fn cost(&self, lambda: f64, compute_gradient: bool) -> Result<CostEvaluation> {
        if self.y.len() != self.x.nrows() {
            return Err(RegressionError::RowLabelMismatch {
                rows: self.x.nrows(),
                labels: self.y.len(),
            });
        }

        if self.theta.len() != self.x.ncols() {
            return Err(RegressionError::WidthMismatch {
                parameters: self.theta.len(),
                features: self.x.ncols(),
            });
        }

        Ok(match self.kind() {
            RegressionKind::Linear => self.linear_cost(lambda, compute_gradient),
            RegressionKind::Logistic => self.logistic_cost(lambda, compute_gradient),
        })
    }

    fn linear_cost(&self, lambda: f64, compute_gradient: bool) -> CostEvaluation {
        let m = self.x.nrows() as f64;

        let predictions = self.x.dot(&self.theta);
        let error = &predictions - &self.y;

        let squared_error = error.mapv(|e| e * e).sum() / (2.0 * m);
        let penalty = self.theta.iter().skip(1).map(|t| t * t).sum::<f64>();
        let cost = squared_error + (lambda / (2.0 * m)) * penalty;

        // The penalty on the gradient uses the full theta, bias included.
        let gradient = compute_gradient
            .then(|| self.x.t().dot(&error) / m + &self.theta * (lambda / m));

        CostEvaluation { cost, gradient }
    }

    fn logistic_cost(&self, lambda: f64, compute_gradient: bool) -> CostEvaluation {
        let m = self.x.nrows() as f64;

        let hx = self.x.dot(&self.theta).mapv(sigmoid);
        let positive = (-&self.y).dot(&hx.mapv(f64::ln));
        let negative = self.y.mapv(|y| 1.0 - y).dot(&hx.mapv(|h| (1.0 - h).ln()));
        let mut cost = (positive - negative) / m;

        let mut penalized = self.theta.clone();
        if !penalized.is_empty() {
            penalized[0] = 0.0;
        }
        cost += lambda / (2.0 * m) * penalized.mapv(|t| t * t).sum();

        let gradient = compute_gradient
            .then(|| self.x.t().dot(&(&hx - &self.y)) / m + &penalized * (lambda / m));

        CostEvaluation { cost, gradient }
    }
}
