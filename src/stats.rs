//! Descriptive statistics and vector arithmetic shared by every model.
//!
//! All functions are pure. Operations over two vectors require equal lengths
//! and report `ModelError::DimensionMismatch` otherwise; aggregates that
//! divide by a sample count report `ModelError::InsufficientData` when the
//! input is too small.

use crate::{ModelError, Vector};

pub fn mean(xs: &Vector) -> Result<f64, ModelError> {
    if xs.is_empty() {
        return Err(ModelError::InsufficientData { needed: 1, got: 0 });
    }
    Ok(xs.sum() / xs.len() as f64)
}

/// Centers `xs` so the result has mean 0.
pub fn de_mean(xs: &Vector) -> Result<Vector, ModelError> {
    let x_bar = mean(xs)?;
    Ok(xs.mapv(|x| x - x_bar))
}

/// Sample variance with the n-1 (Bessel) divisor. Needs at least two values.
pub fn variance(xs: &Vector) -> Result<f64, ModelError> {
    if xs.len() < 2 {
        return Err(ModelError::InsufficientData {
            needed: 2,
            got: xs.len(),
        });
    }
    let deviations = de_mean(xs)?;
    Ok(sum_of_squares(&deviations) / (xs.len() - 1) as f64)
}

pub fn standard_deviation(xs: &Vector) -> Result<f64, ModelError> {
    Ok(variance(xs)?.sqrt())
}

pub fn covariance(xs: &Vector, ys: &Vector) -> Result<f64, ModelError> {
    if xs.len() != ys.len() {
        return Err(ModelError::DimensionMismatch {
            expected: xs.len(),
            got: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(ModelError::InsufficientData {
            needed: 2,
            got: xs.len(),
        });
    }
    Ok(dot(&de_mean(xs)?, &de_mean(ys)?)? / (xs.len() - 1) as f64)
}

/// Correlation between `xs` and `ys`. When either input has zero spread the
/// correlation is defined to be 0, not an error.
pub fn correlation(xs: &Vector, ys: &Vector) -> Result<f64, ModelError> {
    let stdev_x = standard_deviation(xs)?;
    let stdev_y = standard_deviation(ys)?;
    if stdev_x > 0.0 && stdev_y > 0.0 {
        Ok(covariance(xs, ys)? / stdev_x / stdev_y)
    } else {
        Ok(0.0)
    }
}

pub fn dot(v: &Vector, w: &Vector) -> Result<f64, ModelError> {
    if v.len() != w.len() {
        return Err(ModelError::DimensionMismatch {
            expected: v.len(),
            got: w.len(),
        });
    }
    Ok(v.dot(w))
}

pub fn sum_of_squares(v: &Vector) -> f64 {
    v.dot(v)
}

pub fn add(v: &Vector, w: &Vector) -> Result<Vector, ModelError> {
    if v.len() != w.len() {
        return Err(ModelError::DimensionMismatch {
            expected: v.len(),
            got: w.len(),
        });
    }
    Ok(v + w)
}

pub fn scalar_multiply(c: f64, v: &Vector) -> Vector {
    v.mapv(|v_i| c * v_i)
}

/// Element-wise sum of a nonempty, non-ragged list of vectors.
pub fn vector_sum(vectors: &[Vector]) -> Result<Vector, ModelError> {
    let first = vectors
        .first()
        .ok_or(ModelError::InsufficientData { needed: 1, got: 0 })?;

    let mut total = first.clone();
    for v in &vectors[1..] {
        total = add(&total, v)?;
    }
    Ok(total)
}

/// Element-wise average of a nonempty, non-ragged list of vectors.
pub fn vector_mean(vectors: &[Vector]) -> Result<Vector, ModelError> {
    let n = vectors.len();
    Ok(scalar_multiply(1.0 / n as f64, &vector_sum(vectors)?))
}

/// Moves `step_size` along `gradient` from `v`. A negative `step_size`
/// descends; the direction is the caller's responsibility.
pub fn gradient_step(v: &Vector, gradient: &Vector, step_size: f64) -> Result<Vector, ModelError> {
    let step = scalar_multiply(step_size, gradient);
    add(v, &step)
}
