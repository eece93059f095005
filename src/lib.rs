//! Supervised-learning primitives over a shared vector-arithmetic core.
//!
//! This crate provides:
//! - `stats`: descriptive statistics and vector arithmetic
//! - `optim`: mini-batch gradient descent
//! - `linear_model`: simple, multiple, and logistic regression
//! - `naive_bayes`: a smoothed bag-of-words text classifier
//! - `neighbors`: k-nearest-neighbors classification
//!
//! # Examples
//!
//! ```rust
//! use minilearn::SimpleLinearRegression;
//! use ndarray::array;
//!
//! let xs = array![1.0, 2.0, 3.0, 4.0];
//! let ys = array![3.0, 5.0, 7.0, 9.0];
//!
//! let mut model = SimpleLinearRegression::new();
//! model.fit(&xs, &ys).unwrap();
//! assert!((model.predict(5.0).unwrap() - 11.0).abs() < 1e-9);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod naive_bayes;
pub mod neighbors;
pub mod optim;
pub mod preprocessing;
pub mod stats;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use error::ModelError;
pub use linear_model::{LogisticRegression, MultipleRegression, SimpleLinearRegression};
pub use preprocessing::StandardScaler;
pub use naive_bayes::{Message, NaiveBayesClassifier};
pub use neighbors::{KnnClassifier, LabeledPoint};
pub use optim::GradientDescent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
