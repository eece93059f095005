use minilearn::{Dataset, MultipleRegression, SimpleLinearRegression};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Regression Example ===\n");

    // One feature: minutes of daily exercise vs. resting heart rate.
    let minutes = array![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    let heart_rate = array![78.0, 74.5, 71.2, 68.0, 64.4, 61.1, 57.9, 54.6];

    let mut simple = SimpleLinearRegression::new();
    simple.fit(&minutes, &heart_rate)?;

    println!("Simple linear fit:");
    println!("  alpha = {:.3}", simple.alpha.unwrap());
    println!("  beta  = {:.3}", simple.beta.unwrap());
    println!("  R²    = {:.4}", simple.score(&minutes, &heart_rate)?);
    println!("  predicted rate at 45 min: {:.1}", simple.predict(45.0)?);

    // Multiple regression with a constant-1 intercept column in front.
    // Minutes are scaled to tens to keep the fixed-rate descent stable.
    let features = array![
        [1.0, 1.0, 0.0],
        [1.0, 2.0, 1.0],
        [1.0, 3.0, 0.0],
        [1.0, 4.0, 1.0],
        [1.0, 5.0, 0.0],
        [1.0, 6.0, 1.0],
        [1.0, 7.0, 0.0],
        [1.0, 8.0, 1.0]
    ];
    let dataset = Dataset::new(features, heart_rate.clone())?;

    let mut multiple = MultipleRegression::with_params(0.005, 20000, 1).random_state(0);
    multiple.fit(&dataset.features, &dataset.targets)?;

    println!("\nMultiple regression fit:");
    println!("  beta = {:.3?}", multiple.beta.as_ref().unwrap());
    println!("  R²   = {:.4}", multiple.score(&dataset.features, &dataset.targets)?);

    Ok(())
}
