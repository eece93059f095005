use crate::{Matrix, ModelError, Vector};

/// Rescales each column to mean 0 and standard deviation 1. Columns with no
/// spread are left as-is rather than divided by zero.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<(), ModelError> {
        if data.nrows() < 2 {
            return Err(ModelError::InsufficientData {
                needed: 2,
                got: data.nrows(),
            });
        }

        let mean = data
            .mean_axis(ndarray::Axis(0))
            .ok_or(ModelError::InsufficientData { needed: 1, got: 0 })?;
        let std = data.std_axis(ndarray::Axis(0), 1.0);

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix, ModelError> {
        let mean = self.mean.as_ref().ok_or(ModelError::NotFitted)?;
        let std = self.std.as_ref().ok_or(ModelError::NotFitted)?;

        if data.ncols() != mean.len() {
            return Err(ModelError::DimensionMismatch {
                expected: mean.len(),
                got: data.ncols(),
            });
        }

        let safe_std = std.mapv(|s| if s > 0.0 { s } else { 1.0 });

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(ndarray::Axis(0)) {
            row -= mean;
            row /= &safe_std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix, ModelError> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}
