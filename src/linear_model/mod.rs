//! Linear models for regression and classification.
//!
//! This module provides:
//! - `SimpleLinearRegression`: closed-form least squares over one feature
//! - `MultipleRegression`: linear model over a feature vector, fit by
//!   mini-batch gradient descent
//! - `LogisticRegression`: binary classifier fit by the same optimizer
//!
//! # Examples
//!
//! ## Simple linear regression
//! ```rust
//! use minilearn::SimpleLinearRegression;
//! use ndarray::array;
//!
//! let xs = array![1.0, 2.0, 3.0, 4.0];
//! let ys = array![3.0, 5.0, 7.0, 9.0];
//!
//! let mut model = SimpleLinearRegression::new();
//! model.fit(&xs, &ys).unwrap();
//! assert!(model.score(&xs, &ys).unwrap() > 0.99);
//! ```
//!
//! ## Logistic regression
//! ```rust
//! use minilearn::LogisticRegression;
//! use ndarray::array;
//!
//! // First column is the constant-1 intercept feature.
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new().random_state(0);
//! model.fit(&x, &y).unwrap();
//! let labels = model.classify(&x, 0.5).unwrap();
//! assert_eq!(labels.len(), 4);
//! ```

mod logistic;
mod multiple;
mod simple;

pub use logistic::{logistic, logistic_prime, negative_log_likelihood, LogisticRegression};
pub use multiple::MultipleRegression;
pub use simple::SimpleLinearRegression;
