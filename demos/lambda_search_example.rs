use ndarray::{concatenate, Axis};
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use regularized_regression::{Fmincg, LambdaSearch, Matrix, Regression, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Regularization Strength Search Example ===\n");

    let mut rng = StdRng::seed_from_u64(11);
    let n_samples = 60;

    // Two informative features and three noise features
    let features = Matrix::random_using((n_samples, 5), Uniform::new(-2.0, 2.0), &mut rng);
    let noise = Vector::random_using(n_samples, Normal::new(0.0, 0.5)?, &mut rng);
    let score = features.column(0).to_owned() * 1.5 - features.column(1).to_owned() + noise;
    let labels = score.mapv(|s| if s > 0.0 { 1.0 } else { 0.0 });

    let bias = Matrix::ones((n_samples, 1));
    let x = concatenate(Axis(1), &[bias.view(), features.view()])?;
    let mut model = Regression::logistic(x, labels);

    let search = LambdaSearch::new().shuffle(true).verbose(true).random_state(5);
    let outcome = search.minimize_cost(&mut model, 200, &Fmincg::new())?;

    println!("{:>10} {:>12} {:>10}", "lambda", "cost", "accuracy");
    for trial in &outcome.trials {
        println!("{:>10} {:>12.5} {:>10.3}", trial.lambda, trial.cost, trial.accuracy);
    }

    println!("\nSelected lambda: {}", outcome.lambda);
    println!("Lowest trial cost: {:.5}", outcome.best_cost);
    println!("Final cost: {:.5}", outcome.final_cost);
    println!("Theta: {:.3}", model.theta);
    println!("Training accuracy: {:.3}", model.accuracy()?);

    Ok(())
}
