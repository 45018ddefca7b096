use crate::error::{RegressionError, Result};
use crate::linear_model::Regression;

/// Fraction of rows whose label is 1 and whose logistic hypothesis is at
/// least 0.5.
///
/// Rows labelled 0 never count as correct, whatever the prediction, so a
/// training set without positive labels always scores 0. The logistic
/// hypothesis is used for every model kind. An empty training set gives NaN.
///
/// Fails with [`RegressionError::RowLabelMismatch`] when `y` does not have
/// one label per row of `x`, and with [`RegressionError::WidthMismatch`]
/// when `theta` does not have one entry per column of `x`.
pub fn accuracy(model: &Regression) -> Result<f64> {
    if model.y.len() != model.x.nrows() {
        return Err(RegressionError::RowLabelMismatch {
            rows: model.x.nrows(),
            labels: model.y.len(),
        });
    }
    if model.theta.len() != model.x.ncols() {
        return Err(RegressionError::WidthMismatch {
            parameters: model.theta.len(),
            features: model.x.ncols(),
        });
    }

    let correct = model
        .x
        .rows()
        .into_iter()
        .zip(model.y.iter())
        .filter(|(row, label)| model.logistic_hypothesis(*row) >= 0.5 && **label == 1.0)
        .count();

    Ok(correct as f64 / model.n_samples() as f64)
}

impl Regression {
    /// See [`accuracy`].
    pub fn accuracy(&self) -> Result<f64> {
        accuracy(self)
    }
}
