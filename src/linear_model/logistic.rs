use crate::{metrics, optim::GradientDescent, Matrix, ModelError, Vector};

/// `1 / (1 + e^-x)`, clamped against overflow in `exp` for large |x|.
pub fn logistic(x: f64) -> f64 {
    if x > 500.0 {
        1.0
    } else if x < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

pub fn logistic_prime(x: f64) -> f64 {
    let y = logistic(x);
    y * (1.0 - y)
}

/// Total negative log-likelihood of labels `y` given features `x` and
/// coefficients `beta`. This is the objective the fit minimizes; lower is a
/// better fit.
pub fn negative_log_likelihood(x: &Matrix, y: &Vector, beta: &Vector) -> Result<f64, ModelError> {
    if x.nrows() != y.len() {
        return Err(ModelError::DimensionMismatch {
            expected: x.nrows(),
            got: y.len(),
        });
    }
    if x.ncols() != beta.len() {
        return Err(ModelError::DimensionMismatch {
            expected: x.ncols(),
            got: beta.len(),
        });
    }

    let mut total = 0.0;
    for (x_i, &y_i) in x.rows().into_iter().zip(y.iter()) {
        let p = logistic(x_i.dot(beta));
        total += if y_i == 1.0 {
            -p.ln()
        } else {
            -(1.0 - p).ln()
        };
    }
    Ok(total)
}

/// Binary classifier fit by mini-batch gradient descent on the negative
/// log-likelihood. As with `MultipleRegression`, the caller prepends a
/// constant-1 column to model an intercept.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    pub beta: Option<Vector>,
    optimizer: GradientDescent,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            beta: None,
            optimizer: GradientDescent::with_params(0.01, 1000, 1),
        }
    }

    pub fn with_params(learning_rate: f64, num_steps: usize, batch_size: usize) -> Self {
        Self {
            beta: None,
            optimizer: GradientDescent::with_params(learning_rate, num_steps, batch_size),
        }
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.optimizer = self.optimizer.random_state(random_state);
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<(), ModelError> {
        validate_labels(y)?;

        // Per-sample gradient of the negative log-likelihood:
        // -(y - logistic(dot(x, beta))) * x.
        let beta = self.optimizer.minimize(x, y, |x_i, y_i, beta| {
            let residual = y_i - logistic(x_i.dot(beta));
            x_i.mapv(|v| -residual * v)
        })?;

        self.beta = Some(beta);
        Ok(())
    }

    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector, ModelError> {
        let beta = self.beta.as_ref().ok_or(ModelError::NotFitted)?;

        if x.ncols() != beta.len() {
            return Err(ModelError::DimensionMismatch {
                expected: beta.len(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(beta).mapv(logistic))
    }

    /// Thresholds `predict_proba` at `threshold`; the cutoff is caller
    /// policy, no default is baked in.
    pub fn classify(&self, x: &Matrix, threshold: f64) -> Result<Vector, ModelError> {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities.mapv(|p| if p >= threshold { 1.0 } else { 0.0 }))
    }

    /// Classification accuracy at `threshold`.
    pub fn score(&self, x: &Matrix, y: &Vector, threshold: f64) -> Result<f64, ModelError> {
        let predictions = self.classify(x, threshold)?;
        metrics::accuracy(y, &predictions)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_labels(y: &Vector) -> Result<(), ModelError> {
    for &label in y.iter() {
        if label != 0.0 && label != 1.0 {
            return Err(ModelError::InvalidParameter {
                name: "label",
                value: label,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_logistic_function() {
        assert!((logistic(0.0) - 0.5).abs() < 1e-10);
        assert!(logistic(1000.0) > 0.99);
        assert!(logistic(-1000.0) < 0.01);
    }

    #[test]
    fn test_logistic_prime() {
        // Maximum slope is at 0 and equals 1/4.
        assert!((logistic_prime(0.0) - 0.25).abs() < 1e-10);
        assert!(logistic_prime(5.0) < logistic_prime(0.0));
    }

    #[test]
    fn test_fit_separates_simple_data() {
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut model = LogisticRegression::with_params(0.1, 2000, 1).random_state(0);
        model.fit(&x, &y).unwrap();

        let probabilities = model.predict_proba(&x).unwrap();
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[3] > 0.5);

        let score = model.score(&x, &y, 0.5).unwrap();
        assert!(score > 0.5);
    }

    #[test]
    fn test_invalid_labels() {
        let x = array![[1.0], [2.0]];
        let y = array![0.5, 2.0];

        let mut model = LogisticRegression::new();
        assert!(model.fit(&x, &y).is_err());
    }

    #[test]
    fn test_classify_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LogisticRegression::new();

        assert_eq!(model.predict_proba(&x), Err(ModelError::NotFitted));
        assert_eq!(model.classify(&x, 0.5), Err(ModelError::NotFitted));
    }

    #[test]
    fn test_gradient_matches_finite_differences() {
        let x = array![[1.0, 0.5, -1.2], [1.0, -0.3, 0.8], [1.0, 2.0, 0.1]];
        let y = array![1.0, 0.0, 1.0];
        let beta = array![0.2, -0.4, 0.7];

        // Analytic gradient of the total NLL is the sum of the per-sample
        // gradients used by fit().
        let mut analytic = Vector::zeros(beta.len());
        for (x_i, &y_i) in x.rows().into_iter().zip(y.iter()) {
            let residual = y_i - logistic(x_i.dot(&beta));
            analytic = analytic + x_i.mapv(|v| -residual * v);
        }

        let eps = 1e-6;
        for j in 0..beta.len() {
            let mut beta_hi = beta.clone();
            let mut beta_lo = beta.clone();
            beta_hi[j] += eps;
            beta_lo[j] -= eps;

            let numeric = (negative_log_likelihood(&x, &y, &beta_hi).unwrap()
                - negative_log_likelihood(&x, &y, &beta_lo).unwrap())
                / (2.0 * eps);

            assert!((analytic[j] - numeric).abs() < 1e-4);
        }
    }

    #[test]
    fn test_negative_log_likelihood_shape_checks() {
        let x = array![[1.0, 2.0]];
        let y = array![1.0, 0.0];
        let beta = array![0.1, 0.2];
        assert!(negative_log_likelihood(&x, &y, &beta).is_err());

        let y = array![1.0];
        let beta = array![0.1];
        assert!(negative_log_likelihood(&x, &y, &beta).is_err());
    }
}
