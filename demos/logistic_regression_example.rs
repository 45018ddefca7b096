use regularized_regression::{Dataset, Fmincg, Minimizer, RegressionKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Logistic Regression Classification Example ===\n");

    // Columns: bias, exam 1 score, exam 2 score (standardized), admitted
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/admissions.txt");
    let mut model = Dataset::from_file(path)?.into_regression(RegressionKind::Logistic);

    let lambda = 1.0;
    println!("Initial cost: {:.4}", model.cost(lambda, false)?.cost);

    Fmincg::new().minimize(&mut model, lambda, 50, true)?;

    println!("\nFinal cost: {:.4}", model.cost(lambda, false)?.cost);
    println!("Theta: {:.4}", model.theta);

    let classes = model.predict_classes(&model.x)?;
    let matching = classes.iter().zip(model.y.iter()).filter(|(p, y)| p == y).count();

    println!("\nPositive-hit accuracy: {:.2}%", model.accuracy()? * 100.0);
    println!("Matching predictions: {}/{}", matching, model.n_samples());

    Ok(())
}
