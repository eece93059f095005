use crate::{metrics, stats, ModelError, Vector};

/// Ordinary least squares over a single feature, solved in closed form:
/// `beta = correlation(x, y) * stdev(y) / stdev(x)`, `alpha = mean(y) - beta * mean(x)`.
#[derive(Clone, Debug)]
pub struct SimpleLinearRegression {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl SimpleLinearRegression {
    pub fn new() -> Self {
        Self {
            alpha: None,
            beta: None,
        }
    }

    pub fn fit(&mut self, xs: &Vector, ys: &Vector) -> Result<(), ModelError> {
        if xs.len() != ys.len() {
            return Err(ModelError::DimensionMismatch {
                expected: xs.len(),
                got: ys.len(),
            });
        }

        // Constant xs degrade through correlation = 0 to beta = 0; that is a
        // defined result, not an error.
        let beta =
            stats::correlation(xs, ys)? * stats::standard_deviation(ys)? / stats::standard_deviation(xs)?;
        let alpha = stats::mean(ys)? - beta * stats::mean(xs)?;

        self.alpha = Some(alpha);
        self.beta = Some(beta);
        Ok(())
    }

    pub fn predict(&self, x: f64) -> Result<f64, ModelError> {
        let alpha = self.alpha.ok_or(ModelError::NotFitted)?;
        let beta = self.beta.ok_or(ModelError::NotFitted)?;
        Ok(beta * x + alpha)
    }

    /// R² of the fitted line on `(xs, ys)`.
    pub fn score(&self, xs: &Vector, ys: &Vector) -> Result<f64, ModelError> {
        let predictions = xs.iter().map(|&x| self.predict(x)).collect::<Result<Vec<_>, _>>()?;
        metrics::r2_score(ys, &Vector::from(predictions))
    }
}

impl Default for SimpleLinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_perfectly_linear_data() {
        let xs = array![1.0, 2.0, 3.0, 4.0];
        let ys = array![3.0, 5.0, 7.0, 9.0];

        let mut model = SimpleLinearRegression::new();
        model.fit(&xs, &ys).unwrap();

        assert!((model.alpha.unwrap() - 1.0).abs() < 1e-10);
        assert!((model.beta.unwrap() - 2.0).abs() < 1e-10);
        assert!((model.score(&xs, &ys).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_predict() {
        let xs = array![1.0, 2.0, 3.0, 4.0];
        let ys = array![3.0, 5.0, 7.0, 9.0];

        let mut model = SimpleLinearRegression::new();
        model.fit(&xs, &ys).unwrap();

        assert!((model.predict(10.0).unwrap() - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_feature_gives_zero_slope() {
        let xs = array![5.0, 5.0, 5.0, 5.0];
        let ys = array![1.0, 2.0, 3.0, 4.0];

        let mut model = SimpleLinearRegression::new();
        model.fit(&xs, &ys).unwrap();

        assert_eq!(model.beta.unwrap(), 0.0);
        assert!((model.alpha.unwrap() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_predict_without_fit() {
        let model = SimpleLinearRegression::new();
        assert_eq!(model.predict(1.0), Err(ModelError::NotFitted));
    }

    #[test]
    fn test_dimension_mismatch() {
        let xs = array![1.0, 2.0];
        let ys = array![1.0, 2.0, 3.0];

        let mut model = SimpleLinearRegression::new();
        assert!(model.fit(&xs, &ys).is_err());
    }
}
