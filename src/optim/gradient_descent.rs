use super::Minimizer;
use crate::error::Result;
use crate::linear_model::Regression;
use log::Level;

/// Batch gradient descent with a fixed learning rate.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    tolerance: f64,
    verbose: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            tolerance: 1e-12,
            verbose: false,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    /// Stops early once an iteration improves the cost by less than this.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Logs every iteration at info level instead of debug, even when the
    /// caller does not ask for verbose output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn log_level(&self, verbose: bool) -> Level {
        if self.verbose || verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimizer for GradientDescent {
    fn minimize(
        &self,
        model: &mut Regression,
        lambda: f64,
        max_iterations: usize,
        verbose: bool,
    ) -> Result<Vec<f64>> {
        let level = self.log_level(verbose);
        let mut history = Vec::with_capacity(max_iterations);
        let mut prev_cost = f64::INFINITY;

        for iteration in 1..=max_iterations {
            let eval = model.cost(lambda, true)?;
            let Some(gradient) = eval.gradient else {
                break;
            };

            model.theta.scaled_add(-self.learning_rate, &gradient);
            let cost = model.cost(lambda, false)?.cost;
            history.push(cost);
            log::log!(level, "iteration {:4} | cost: {:e}", iteration, cost);

            if !cost.is_finite() || (prev_cost - cost).abs() < self.tolerance {
                break;
            }
            prev_cost = cost;
        }

        Ok(history)
    }
}
