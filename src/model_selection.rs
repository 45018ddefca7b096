//! Regularization strength selection.
//!
//! [`LambdaSearch`] fits a model once per candidate lambda with a short
//! optimizer budget, keeps the candidate with the best training accuracy and
//! refits with the full budget at that lambda.
//!
//! ```rust
//! use regularized_regression::{Fmincg, LambdaSearch, Regression};
//! use ndarray::array;
//!
//! let mut model = Regression::linear(
//!     array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
//!     array![2.0, 4.0, 6.0],
//! );
//!
//! let outcome = LambdaSearch::new()
//!     .minimize_cost(&mut model, 50, &Fmincg::new())
//!     .unwrap();
//! assert_eq!(outcome.lambda, 0.0);
//! assert!(outcome.final_cost < 1e-6);
//! ```

use crate::error::{RegressionError, Result};
use crate::linear_model::Regression;
use crate::optim::Minimizer;
use log::Level;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Candidate regularization strengths, tried in this order.
pub const DEFAULT_LAMBDAS: [f64; 13] = [
    0.0, 0.001, 0.003, 0.01, 0.03, 0.1, 0.3, 1.0, 3.0, 10.0, 30.0, 100.0, 300.0,
];

/// Result of fitting one candidate lambda.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambdaTrial {
    pub lambda: f64,
    /// Regularized cost after the trial, without gradient
    pub cost: f64,
    pub accuracy: f64,
}

/// What [`LambdaSearch::minimize_cost`] produced.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Cost of the refitted model at the selected lambda
    pub final_cost: f64,
    /// The working copy the search trained (shuffled when requested)
    pub training: Regression,
    /// Selected regularization strength
    pub lambda: f64,
    /// Held-out test set. The search trains on every row and never carves one
    /// out, so this is always `None`.
    pub test: Option<Regression>,
    /// One entry per candidate, in candidate order
    pub trials: Vec<LambdaTrial>,
    /// Lowest trial cost. Reported only, it does not take part in selection.
    pub best_cost: f64,
}

/// Hyperparameter search over regularization strengths.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LambdaSearch {
    lambdas: Vec<f64>,
    trial_iterations: usize,
    shuffle: bool,
    verbose: bool,
    random_state: Option<u64>,
}

impl LambdaSearch {
    pub fn new() -> Self {
        Self {
            lambdas: DEFAULT_LAMBDAS.to_vec(),
            trial_iterations: 10,
            shuffle: false,
            verbose: false,
            random_state: None,
        }
    }

    /// Replaces the candidate list. Candidates keep the given order, which
    /// decides ties.
    pub fn lambdas(mut self, lambdas: Vec<f64>) -> Self {
        self.lambdas = lambdas;
        self
    }

    /// Optimizer iterations spent on each candidate.
    pub fn trial_iterations(mut self, trial_iterations: usize) -> Self {
        self.trial_iterations = trial_iterations;
        self
    }

    /// Trains on a row-permuted copy of the model.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Logs every trial, and every optimizer iteration, at info level
    /// instead of debug.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Seeds the shuffle. Without it the generator is seeded from entropy.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn candidates(&self) -> &[f64] {
        &self.lambdas
    }

    /// Runs the search on `model` and copies the refitted parameters back
    /// into `model.theta`.
    ///
    /// Each candidate starts from the parameters `model` held when the search
    /// began and runs `trial_iterations` optimizer iterations; its cost and
    /// [`accuracy`](crate::metrics::accuracy) are then measured on the same
    /// rows. The first candidate wins unless a later one has strictly greater
    /// accuracy. The refit continues from the parameters left by the last
    /// trial and runs `max_iterations` iterations at the selected lambda.
    ///
    /// # Errors
    ///
    /// Fails with [`RegressionError::InvalidParameter`] when the candidate
    /// list is empty, and propagates cost and minimizer errors.
    pub fn minimize_cost<M: Minimizer + ?Sized>(
        &self,
        model: &mut Regression,
        max_iterations: usize,
        minimizer: &M,
    ) -> Result<SearchOutcome> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.minimize_cost_with_rng(model, max_iterations, minimizer, &mut rng)
    }

    /// Same as [`minimize_cost`](Self::minimize_cost) with an injected
    /// generator for the shuffle.
    pub fn minimize_cost_with_rng<M: Minimizer + ?Sized, R: Rng + ?Sized>(
        &self,
        model: &mut Regression,
        max_iterations: usize,
        minimizer: &M,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        if self.lambdas.is_empty() {
            return Err(RegressionError::InvalidParameter(
                "lambda candidate list must not be empty".to_string(),
            ));
        }

        let mut training = if self.shuffle {
            model.shuffled(rng)
        } else {
            model.clone()
        };

        let initial_theta = training.theta.clone();
        let level = if self.verbose { Level::Info } else { Level::Debug };

        let mut trials = Vec::with_capacity(self.lambdas.len());
        let mut best_cost = f64::INFINITY;

        for &lambda in &self.lambdas {
            log::log!(level, "checking lambda {}", lambda);
            training.theta = initial_theta.clone();
            minimizer.minimize(&mut training, lambda, self.trial_iterations, self.verbose)?;

            let cost = training.cost(lambda, false)?.cost;
            if cost < best_cost {
                best_cost = cost;
            }
            let accuracy = training.accuracy()?;
            log::log!(level, "lambda {}: cost {:e}, accuracy {}", lambda, cost, accuracy);

            trials.push(LambdaTrial {
                lambda,
                cost,
                accuracy,
            });
        }

        let Some(lambda) = select_lambda(&trials) else {
            return Err(RegressionError::InvalidParameter(
                "no lambda candidate was evaluated".to_string(),
            ));
        };

        minimizer.minimize(&mut training, lambda, max_iterations, self.verbose)?;
        model.theta = training.theta.clone();

        let final_cost = training.cost(lambda, false)?.cost;
        log::info!("selected lambda {} with final cost {:e}", lambda, final_cost);

        Ok(SearchOutcome {
            final_cost,
            training,
            lambda,
            test: None,
            trials,
            best_cost,
        })
    }
}

impl Default for LambdaSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// First trial wins; a later trial replaces it only with strictly greater
/// accuracy.
fn select_lambda(trials: &[LambdaTrial]) -> Option<f64> {
    let mut trials = trials.iter();
    let mut best = trials.next()?;
    for trial in trials {
        if trial.accuracy > best.accuracy {
            best = trial;
        }
    }
    Some(best.lambda)
}
