use crate::error::{RegressionError, Result};
use crate::{ArrayView1, Matrix, Vector};
use ndarray::Axis;
use rand::Rng;
use rand::seq::SliceRandom;

/// Selects which hypothesis and cost function a [`Regression`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegressionKind {
    Linear,
    Logistic,
}

/// A training set together with the parameter vector being fitted to it.
///
/// `x` holds one feature row per training case (the first column is
/// conventionally the constant-1 bias input), `y` one target per row and
/// `theta` one parameter per feature column. The fields are public so
/// minimizers can update `theta` in place; [`Regression::cost`] reports any
/// disagreement between their dimensions.
#[derive(Clone, Debug)]
pub struct Regression {
    pub x: Matrix,
    pub y: Vector,
    pub theta: Vector,
    kind: RegressionKind,
}

impl Regression {
    /// Builds a model with `theta` set to zeros, one per column of `x`.
    pub fn new(x: Matrix, y: Vector, kind: RegressionKind) -> Self {
        let theta = Vector::zeros(x.ncols());
        Self { x, y, theta, kind }
    }

    pub fn linear(x: Matrix, y: Vector) -> Self {
        Self::new(x, y, RegressionKind::Linear)
    }

    pub fn logistic(x: Matrix, y: Vector) -> Self {
        Self::new(x, y, RegressionKind::Logistic)
    }

    /// Builds a model from nested feature rows, rejecting rows whose width
    /// differs from the first one.
    pub fn from_rows(rows: &[Vec<f64>], labels: Vec<f64>, kind: RegressionKind) -> Result<Self> {
        let x = rows_to_matrix(rows)?;
        Ok(Self::new(x, Vector::from(labels), kind))
    }

    pub fn kind(&self) -> RegressionKind {
        self.kind
    }

    pub fn is_linear(&self) -> bool {
        self.kind == RegressionKind::Linear
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Resets `theta` to a zero vector as wide as the feature rows.
    pub fn initialize_theta(&mut self) {
        self.theta = Vector::zeros(self.x.ncols());
    }

    /// Prediction for a single row using the model's own hypothesis.
    ///
    /// `row` must have the same length as `theta`.
    pub fn hypothesis(&self, row: ArrayView1<f64>) -> f64 {
        match self.kind {
            RegressionKind::Linear => self.linear_hypothesis(row),
            RegressionKind::Logistic => self.logistic_hypothesis(row),
        }
    }

    pub fn linear_hypothesis(&self, row: ArrayView1<f64>) -> f64 {
        row.dot(&self.theta)
    }

    pub fn logistic_hypothesis(&self, row: ArrayView1<f64>) -> f64 {
        sigmoid(row.dot(&self.theta))
    }

    /// Vectorized hypothesis over every row of `x`.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != self.theta.len() {
            return Err(RegressionError::WidthMismatch {
                parameters: self.theta.len(),
                features: x.ncols(),
            });
        }

        let linear_combination = x.dot(&self.theta);
        Ok(match self.kind {
            RegressionKind::Linear => linear_combination,
            RegressionKind::Logistic => linear_combination.mapv(sigmoid),
        })
    }

    /// Class decisions from the logistic hypothesis, thresholded at 0.5.
    pub fn predict_classes(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != self.theta.len() {
            return Err(RegressionError::WidthMismatch {
                parameters: self.theta.len(),
                features: x.ncols(),
            });
        }

        Ok(x.dot(&self.theta)
            .mapv(|z| if sigmoid(z) >= 0.5 { 1.0 } else { 0.0 }))
    }

    /// Derives a sub-model holding the given rows, in the given order, with a
    /// copy of the current `theta`.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
            theta: self.theta.clone(),
            kind: self.kind,
        }
    }

    /// Returns a copy with rows randomly permuted. Feature rows and labels
    /// move together.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..self.x.nrows()).collect();
        indices.shuffle(rng);
        self.select_rows(&indices)
    }
}

/// Logistic function `1 / (1 + e^-z)`, without clamping.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

pub(crate) fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<Matrix> {
    let width = rows.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(rows.len() * width);

    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(RegressionError::RaggedRows {
                row,
                expected: width,
                found: values.len(),
            });
        }
        flat.extend_from_slice(values);
    }

    Ok(Matrix::from_shape_vec((rows.len(), width), flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_initializes_zero_theta() {
        let model = Regression::linear(array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]], array![1.0, 2.0]);

        assert_eq!(model.theta, Vector::zeros(3));
        assert!(model.is_linear());
        assert_eq!(model.n_samples(), 2);
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn test_initialize_theta_resets_parameters() {
        let mut model = Regression::logistic(array![[1.0, 2.0]], array![1.0]);
        model.theta = array![3.0, -4.0];

        model.initialize_theta();

        assert_eq!(model.theta, array![0.0, 0.0]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![1.0]];
        let err = Regression::from_rows(&rows, vec![0.0, 1.0], RegressionKind::Linear).unwrap_err();

        assert!(matches!(
            err,
            RegressionError::RaggedRows { row: 1, expected: 2, found: 1 }
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        let model = Regression::from_rows(&[], vec![], RegressionKind::Logistic).unwrap();

        assert_eq!(model.n_samples(), 0);
        assert_eq!(model.theta.len(), 0);
    }

    #[test]
    fn test_linear_hypothesis_is_dot_product() {
        let mut model = Regression::linear(array![[1.0, 2.0]], array![0.0]);
        model.theta = array![0.5, 3.0];

        assert_abs_diff_eq!(model.hypothesis(model.x.row(0)), 6.5);
    }

    #[test]
    fn test_logistic_hypothesis_applies_sigmoid() {
        let mut model = Regression::logistic(array![[1.0, 0.0]], array![0.0]);
        assert_abs_diff_eq!(model.hypothesis(model.x.row(0)), 0.5);

        model.theta = array![2.0, 7.0];
        let expected = 1.0 / (1.0 + (-2.0f64).exp());
        assert_abs_diff_eq!(model.hypothesis(model.x.row(0)), expected);
    }

    #[test]
    fn test_sigmoid_saturates_without_clamping() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let model = Regression::linear(array![[1.0, 2.0]], array![0.0]);

        assert!(model.predict(&array![[1.0, 2.0, 3.0]]).is_err());
        assert!(model.predict_classes(&array![[1.0]]).is_err());
    }

    #[test]
    fn test_predict_classes_thresholds_at_half() {
        let mut model = Regression::logistic(
            array![[1.0, -1.0], [1.0, 0.0], [1.0, 1.0]],
            array![0.0, 0.0, 1.0],
        );
        model.theta = array![0.0, 4.0];

        let classes = model.predict_classes(&model.x).unwrap();

        assert_eq!(classes, array![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_select_rows_keeps_kind_and_theta() {
        let mut model = Regression::linear(
            array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
            array![2.0, 4.0, 6.0],
        );
        model.theta = array![0.1, 0.2];

        let subset = model.select_rows(&[2, 0]);

        assert_eq!(subset.x, array![[1.0, 3.0], [1.0, 1.0]]);
        assert_eq!(subset.y, array![6.0, 2.0]);
        assert_eq!(subset.theta, model.theta);
        assert!(subset.is_linear());
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let x = Matrix::from_shape_fn((20, 2), |(i, j)| (i * 2 + j) as f64);
        let y = Vector::from_shape_fn(20, |i| i as f64);
        let model = Regression::linear(x, y);

        let a = model.shuffled(&mut StdRng::seed_from_u64(7));
        let b = model.shuffled(&mut StdRng::seed_from_u64(7));

        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert!(a.is_linear());
    }

    proptest! {
        #[test]
        fn prop_shuffle_preserves_row_label_pairs(
            labels in prop::collection::vec(-100.0f64..100.0, 1..40),
            seed in any::<u64>(),
        ) {
            let n = labels.len();
            let x = Matrix::from_shape_fn((n, 3), |(i, j)| labels[i] * (j as f64 + 1.0));
            let model = Regression::logistic(x, Vector::from(labels));

            let shuffled = model.shuffled(&mut StdRng::seed_from_u64(seed));

            let pairs = |m: &Regression| {
                let mut pairs: Vec<(Vec<f64>, f64)> = m
                    .x
                    .rows()
                    .into_iter()
                    .zip(m.y.iter())
                    .map(|(row, &label)| (row.to_vec(), label))
                    .collect();
                pairs.sort_by(|a, b| a.partial_cmp(b).unwrap());
                pairs
            };

            prop_assert_eq!(pairs(&model), pairs(&shuffled));
        }
    }
}
