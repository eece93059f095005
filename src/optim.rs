//! Mini-batch gradient descent over a fixed-size coefficient vector.

use crate::{stats, Matrix, ModelError, Vector};
use ndarray::ArrayView1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Minimizes a sum-of-per-sample-losses objective given a per-sample gradient
/// function. No convergence check is performed; the caller supplies a fixed
/// step budget via `num_steps`.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    num_steps: usize,
    batch_size: usize,
    random_state: Option<u64>,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.001,
            num_steps: 1000,
            batch_size: 1,
            random_state: None,
        }
    }

    pub fn with_params(learning_rate: f64, num_steps: usize, batch_size: usize) -> Self {
        Self {
            learning_rate,
            num_steps,
            batch_size,
            random_state: None,
        }
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Runs the descent and returns the final coefficient vector.
    ///
    /// `gradient(x_i, y_i, beta)` must return the gradient of the per-sample
    /// loss with respect to `beta`, with the same length as `beta`. Each
    /// epoch walks contiguous batches in input order; each batch applies one
    /// step of size `-learning_rate` along the element-wise mean of the
    /// per-sample gradients.
    pub fn minimize<G>(&self, x: &Matrix, y: &Vector, gradient: G) -> Result<Vector, ModelError>
    where
        G: Fn(&ArrayView1<f64>, f64, &Vector) -> Vector,
    {
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(ModelError::InsufficientData { needed: 1, got: 0 });
        }
        if self.learning_rate <= 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "learning_rate",
                value: self.learning_rate,
            });
        }
        if self.num_steps == 0 {
            return Err(ModelError::InvalidParameter {
                name: "num_steps",
                value: 0.0,
            });
        }
        if self.batch_size == 0 || self.batch_size > x.nrows() {
            return Err(ModelError::InvalidParameter {
                name: "batch_size",
                value: self.batch_size as f64,
            });
        }

        let n_samples = x.nrows();
        let n_features = x.ncols();

        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut beta = Vector::random_using(n_features, Uniform::new(0.0, 1.0), &mut rng);

        for step in 0..self.num_steps {
            for start in (0..n_samples).step_by(self.batch_size) {
                let end = (start + self.batch_size).min(n_samples);

                let mut batch_sum = Vector::zeros(n_features);
                for i in start..end {
                    let g = gradient(&x.row(i), y[i], &beta);
                    batch_sum = stats::add(&batch_sum, &g)?;
                }
                let batch_mean = stats::scalar_multiply(1.0 / (end - start) as f64, &batch_sum);

                beta = stats::gradient_step(&beta, &batch_mean, -self.learning_rate)?;
            }
            log::trace!("gradient descent: step {}/{}", step + 1, self.num_steps);
        }

        Ok(beta)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
