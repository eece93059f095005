use ndarray::Axis;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Matrix, ModelError, Vector};

/// A feature matrix paired row-for-row with a target vector.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> Result<Self, ModelError> {
        if features.nrows() != targets.len() {
            return Err(ModelError::DimensionMismatch {
                expected: features.nrows(),
                got: targets.len(),
            });
        }

        Ok(Self { features, targets })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Shuffles the rows and splits off the trailing `test_size` fraction
    /// as the test set. Pass a seed for a reproducible split.
    pub fn train_test_split(
        &self,
        test_size: f64,
        random_state: Option<u64>,
    ) -> Result<(Self, Self), ModelError> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(ModelError::InvalidParameter {
                name: "test_size",
                value: test_size,
            });
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;
        if n_train == 0 || n_test == 0 {
            return Err(ModelError::InsufficientData {
                needed: 2,
                got: n_samples,
            });
        }

        let mut rng = match random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(&mut rng);

        let (train_idx, test_idx) = indices.split_at(n_train);

        let select = |idx: &[usize]| -> Result<Self, ModelError> {
            let features = self.features.select(Axis(0), idx);
            let targets = Vector::from(idx.iter().map(|&i| self.targets[i]).collect::<Vec<_>>());
            Dataset::new(features, targets)
        };

        Ok((select(train_idx)?, select(test_idx)?))
    }
}
