use minilearn::{KnnClassifier, LabeledPoint};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== K-Nearest Neighbors Example ===\n");

    // Two measurements per flower: petal length and petal width.
    let points = vec![
        LabeledPoint::new(array![1.4, 0.2], "setosa"),
        LabeledPoint::new(array![1.3, 0.2], "setosa"),
        LabeledPoint::new(array![1.5, 0.3], "setosa"),
        LabeledPoint::new(array![4.5, 1.5], "versicolor"),
        LabeledPoint::new(array![4.1, 1.3], "versicolor"),
        LabeledPoint::new(array![4.7, 1.4], "versicolor"),
        LabeledPoint::new(array![6.0, 2.5], "virginica"),
        LabeledPoint::new(array![5.9, 2.1], "virginica"),
        LabeledPoint::new(array![5.6, 2.4], "virginica"),
    ];

    let mut classifier = KnnClassifier::new(3);
    classifier.fit(points)?;

    let queries = [
        array![1.5, 0.2],
        array![4.4, 1.4],
        array![5.8, 2.2],
        array![5.0, 1.8],
    ];

    for query in &queries {
        let label = classifier.classify(query)?;
        println!("petal ({:.1}, {:.1}) → {}", query[0], query[1], label);
    }

    Ok(())
}
