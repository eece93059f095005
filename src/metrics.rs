use crate::{ModelError, Vector};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x.abs()).sum() / y_true.len() as f64)
}

/// Coefficient of determination, `1 - SSE/SST`. Ranges over `(-inf, 1]`; a
/// constant `y_true` divides by zero and the non-finite result propagates to
/// the caller.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    check_lengths(y_true, y_pred)?;

    let y_mean = crate::stats::mean(y_true)?;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of exactly matching labels.
pub fn accuracy(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    check_lengths(y_true, y_pred)?;

    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(a, b)| (**a - **b).abs() < 1e-10)
        .count();
    Ok(hits as f64 / y_true.len() as f64)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), ModelError> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::DimensionMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ModelError::InsufficientData { needed: 1, got: 0 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 4.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_perfect_fit() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_constant_target_is_not_finite() {
        let y_true = array![2.0, 2.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(!r2.is_finite());
    }

    #[test]
    fn test_accuracy() {
        let y_true = array![0.0, 1.0, 1.0, 0.0];
        let y_pred = array![0.0, 1.0, 0.0, 0.0];

        let acc = accuracy(&y_true, &y_pred).unwrap();
        assert!((acc - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];

        assert!(mean_squared_error(&y_true, &y_pred).is_err());
        assert!(r2_score(&y_true, &y_pred).is_err());
    }
}
