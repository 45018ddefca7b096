use super::Minimizer;
use crate::error::Result;
use crate::linear_model::Regression;
use crate::Vector;
use log::Level;

/// Nonlinear conjugate gradient minimizer.
///
/// Search directions follow Polak-Ribière. Each line search combines
/// quadratic and cubic interpolation with extrapolation and stops on the
/// Wolfe-Powell conditions. When a line search fails twice in a row, or
/// `max_iterations` line searches have run, the minimizer gives up and keeps
/// the best parameters found.
///
/// # Example
///
/// ```
/// use regularized_regression::{Fmincg, Minimizer, Regression};
/// use ndarray::array;
///
/// let mut model = Regression::linear(array![[1.0, 1.0], [1.0, 2.0]], array![1.0, 2.0]);
/// let history = Fmincg::new().minimize(&mut model, 0.0, 20, false).unwrap();
/// assert!(history.last().copied().unwrap_or(f64::INFINITY) < 1e-8);
/// ```
#[derive(Clone, Debug)]
pub struct Fmincg {
    /// Sufficient decrease constant of the Wolfe-Powell conditions
    rho: f64,
    /// Curvature constant of the Wolfe-Powell conditions
    sig: f64,
    /// Do not re-evaluate within this fraction of the current bracket
    int: f64,
    /// Extrapolate at most this many times the current step
    ext: f64,
    /// Function evaluations allowed per line search
    max_evaluations: usize,
    /// Largest allowed growth of the slope ratio between iterations
    ratio: f64,
    verbose: bool,
}

impl Fmincg {
    pub fn new() -> Self {
        Self {
            rho: 0.01,
            sig: 0.5,
            int: 0.1,
            ext: 3.0,
            max_evaluations: 20,
            ratio: 100.0,
            verbose: false,
        }
    }

    /// Logs every iteration at info level instead of debug, even when the
    /// caller does not ask for verbose output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn max_evaluations(mut self, max_evaluations: usize) -> Self {
        if max_evaluations == 0 {
            panic!("max_evaluations must be > 0, got {}", max_evaluations);
        }
        self.max_evaluations = max_evaluations;
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

impl Default for Fmincg {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates cost and gradient with `model.theta` set to `x`.
fn evaluate(model: &mut Regression, lambda: f64, x: &Vector) -> Result<(f64, Vector)> {
    model.theta.assign(x);
    let eval = model.cost(lambda, true)?;
    let gradient = eval.gradient.unwrap_or_else(|| Vector::zeros(x.len()));
    Ok((eval.cost, gradient))
}

impl Minimizer for Fmincg {
    #[allow(clippy::many_single_char_names)]
    fn minimize(
        &self,
        model: &mut Regression,
        lambda: f64,
        max_iterations: usize,
        verbose: bool,
    ) -> Result<Vec<f64>> {
        let level = self.log_level(verbose);
        let mut history = Vec::new();
        let mut x = model.theta.clone();

        let (mut f1, mut df1) = evaluate(model, lambda, &x)?;
        let mut s = -&df1;
        let mut d1 = -s.dot(&s);
        let mut z1 = 1.0 / (1.0 - d1);

        let mut line_search_failed = false;
        let mut iteration = 0;

        while iteration < max_iterations {
            iteration += 1;

            let x0 = x.clone();
            let f0 = f1;
            let df0 = df1.clone();

            x.scaled_add(z1, &s);
            let (mut f2, mut df2) = evaluate(model, lambda, &x)?;
            let mut d2 = df2.dot(&s);

            let mut f3 = f1;
            let mut d3 = d1;
            let mut z3 = -z1;
            let mut remaining = self.max_evaluations;
            let mut limit = -1.0;

            let success = loop {
                while (f2 > f1 + z1 * self.rho * d1 || d2 > -self.sig * d1) && remaining > 0 {
                    // Tighten the bracket.
                    limit = z1;
                    let mut z2 = if f2 > f1 {
                        z3 - (0.5 * d3 * z3 * z3) / (d3 * z3 + f2 - f3)
                    } else {
                        let a = 6.0 * (f2 - f3) / z3 + 3.0 * (d2 + d3);
                        let b = 3.0 * (f3 - f2) - z3 * (d3 + 2.0 * d2);
                        ((b * b - a * d2 * z3 * z3).sqrt() - b) / a
                    };
                    if !z2.is_finite() {
                        z2 = z3 / 2.0;
                    }
                    z2 = z2.min(self.int * z3).max((1.0 - self.int) * z3);
                    z1 += z2;
                    x.scaled_add(z2, &s);
                    (f2, df2) = evaluate(model, lambda, &x)?;
                    remaining -= 1;
                    d2 = df2.dot(&s);
                    z3 -= z2;
                }

                if f2 > f1 + z1 * self.rho * d1 || d2 > -self.sig * d1 {
                    break false;
                } else if d2 > self.sig * d1 {
                    break true;
                } else if remaining == 0 {
                    break false;
                }

                // Cubic extrapolation.
                let a = 6.0 * (f2 - f3) / z3 + 3.0 * (d2 + d3);
                let b = 3.0 * (f3 - f2) - z3 * (d3 + 2.0 * d2);
                let mut z2 = -d2 * z3 * z3 / (b + (b * b - a * d2 * z3 * z3).sqrt());
                if !z2.is_finite() || z2 < 0.0 {
                    z2 = if limit < -0.5 {
                        z1 * (self.ext - 1.0)
                    } else {
                        (limit - z1) / 2.0
                    };
                } else if limit > -0.5 && z2 + z1 > limit {
                    z2 = (limit - z1) / 2.0;
                } else if limit < -0.5 && z2 + z1 > z1 * self.ext {
                    z2 = z1 * (self.ext - 1.0);
                } else if z2 < -z3 * self.int {
                    z2 = -z3 * self.int;
                } else if limit > -0.5 && z2 < (limit - z1) * (1.0 - self.int) {
                    z2 = (limit - z1) * (1.0 - self.int);
                }

                f3 = f2;
                d3 = d2;
                z3 = -z2;
                z1 += z2;
                x.scaled_add(z2, &s);
                (f2, df2) = evaluate(model, lambda, &x)?;
                remaining -= 1;
                d2 = df2.dot(&s);
            };

            if success {
                f1 = f2;
                history.push(f1);
                log::log!(level, "iteration {:4} | cost: {:e}", iteration, f1);

                // Polak-Ribière direction.
                let beta = (df2.dot(&df2) - df1.dot(&df2)) / df1.dot(&df1);
                s = &s * beta - &df2;
                std::mem::swap(&mut df1, &mut df2);
                d2 = df1.dot(&s);
                if d2 > 0.0 {
                    s = -&df1;
                    d2 = -s.dot(&s);
                }
                z1 *= self.ratio.min(d1 / (d2 - f64::MIN_POSITIVE));
                d1 = d2;
                line_search_failed = false;
            } else {
                x = x0;
                f1 = f0;
                df1 = df0;
                if line_search_failed {
                    log::debug!(
                        "line search failed twice in a row, stopping at iteration {}",
                        iteration
                    );
                    break;
                }
                std::mem::swap(&mut df1, &mut df2);
                s = -&df1;
                d1 = -s.dot(&s);
                z1 = 1.0 / (1.0 - d1);
                line_search_failed = true;
            }
        }

        model.theta.assign(&x);
        Ok(history)
    }
}
