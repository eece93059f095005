use crate::{metrics, optim::GradientDescent, Matrix, ModelError, Vector};

/// Linear model over an arbitrary-dimension feature vector, fit by mini-batch
/// gradient descent on the squared error. The caller prepends a constant-1
/// column to model an intercept.
#[derive(Clone, Debug)]
pub struct MultipleRegression {
    pub beta: Option<Vector>,
    optimizer: GradientDescent,
}

impl MultipleRegression {
    /// Defaults: learning rate 0.001, 1000 steps, batch size 1.
    pub fn new() -> Self {
        Self {
            beta: None,
            optimizer: GradientDescent::new(),
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
        let beta = self.optimizer.minimize(x, y, |x_i, y_i, beta| {
            let err = x_i.dot(beta) - y_i;
            x_i.mapv(|v| 2.0 * err * v)
        })?;

        self.beta = Some(beta);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector, ModelError> {
        let beta = self.beta.as_ref().ok_or(ModelError::NotFitted)?;

        if x.ncols() != beta.len() {
            return Err(ModelError::DimensionMismatch {
                expected: beta.len(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(beta))
    }

    /// R² of the fitted model on `(x, y)`.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64, ModelError> {
        let y_pred = self.predict(x)?;
        metrics::r2_score(y, &y_pred)
    }
}

impl Default for MultipleRegression {
    fn default() -> Self {
        Self::new()
    }
}
