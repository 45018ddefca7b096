use regularized_regression::{Dataset, Fmincg, Minimizer, RegressionKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Linear Regression Example ===\n");

    // Columns: bias, size (1000 sq ft), rooms, price (100k)
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/housing.txt");
    let dataset = Dataset::from_file(path)?;
    println!("Loaded {} samples with {} features", dataset.n_samples(), dataset.n_features());

    let mut model = dataset.into_regression(RegressionKind::Linear);
    let initial = model.cost(0.0, false)?.cost;

    let history = Fmincg::new().minimize(&mut model, 0.0, 100, false)?;

    println!("\nTraining completed after {} iterations", history.len());
    println!("Cost: {:.6} -> {:.6}", initial, model.cost(0.0, false)?.cost);
    println!("Theta: {:.4}", model.theta);

    println!("\nPredictions vs Actual (first 5 samples):");
    let predictions = model.predict(&model.x)?;
    for (i, (predicted, actual)) in predictions.iter().zip(model.y.iter()).take(5).enumerate() {
        println!("Sample {}: Predicted={:.3}, Actual={:.3}", i + 1, predicted, actual);
    }

    Ok(())
}
