//! k-nearest-neighbors classification with a recursive shrink-on-tie vote.

use std::collections::HashMap;

use crate::{ModelError, Vector};

/// A point in feature space with its class label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    pub point: Vector,
    pub label: String,
}

impl LabeledPoint {
    pub fn new(point: Vector, label: impl Into<String>) -> Self {
        Self {
            point,
            label: label.into(),
        }
    }
}

/// Euclidean distance between two points of equal dimension.
pub fn distance(v: &Vector, w: &Vector) -> Result<f64, ModelError> {
    if v.len() != w.len() {
        return Err(ModelError::DimensionMismatch {
            expected: v.len(),
            got: w.len(),
        });
    }
    Ok(v.iter()
        .zip(w.iter())
        .map(|(v_i, w_i)| (v_i - w_i) * (v_i - w_i))
        .sum::<f64>()
        .sqrt())
}

/// Picks the most frequent label, assuming `labels` is ordered from nearest
/// to farthest. On a tie for the maximum count, the farthest label is dropped
/// and the vote repeats; a single remaining label always wins, so this
/// terminates in at most `labels.len()` rounds.
pub fn majority_vote(labels: &[String]) -> Option<String> {
    let mut candidates = labels;

    while !candidates.is_empty() {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for label in candidates {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }

        let winner_count = *counts.values().max()?;
        let mut winners = counts
            .iter()
            .filter(|&(_, &count)| count == winner_count)
            .map(|(&label, _)| label);

        let winner = winners.next()?;
        if winners.next().is_none() {
            return Some(winner.to_string());
        }

        // Tie: retry without the farthest label.
        candidates = &candidates[..candidates.len() - 1];
    }

    None
}

/// Distance-ranked majority-vote classifier over stored labeled points.
#[derive(Clone, Debug)]
pub struct KnnClassifier {
    k: usize,
    points: Vec<LabeledPoint>,
}

impl KnnClassifier {
    pub fn new(k: usize) -> Self {
        if k == 0 {
            panic!("k must be > 0, got {}", k);
        }

        Self { k, points: Vec::new() }
    }

    pub fn fit(&mut self, points: Vec<LabeledPoint>) -> Result<(), ModelError> {
        if points.is_empty() {
            return Err(ModelError::InsufficientData { needed: 1, got: 0 });
        }
        self.points = points;
        Ok(())
    }

    /// Labels `query` by the vote of the `k` nearest stored points. The sort
    /// by distance is stable, so equidistant points keep their input order.
    pub fn classify(&self, query: &Vector) -> Result<String, ModelError> {
        if self.points.is_empty() {
            return Err(ModelError::NotFitted);
        }

        let mut by_distance = self
            .points
            .iter()
            .map(|lp| Ok((distance(&lp.point, query)?, lp)))
            .collect::<Result<Vec<_>, ModelError>>()?;
        by_distance.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        let k_nearest_labels: Vec<String> = by_distance
            .iter()
            .take(self.k)
            .map(|(_, lp)| lp.label.clone())
            .collect();

        // fit() guarantees at least one point, so the vote cannot be empty.
        majority_vote(&k_nearest_labels).ok_or(ModelError::NotFitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_distance() {
        let v = array![0.0, 0.0];
        let w = array![3.0, 4.0];
        assert!((distance(&v, &w).unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let v = array![0.0, 0.0];
        let w = array![1.0];
        assert!(distance(&v, &w).is_err());
    }

    #[test]
    fn test_majority_vote_unique_winner() {
        assert_eq!(
            majority_vote(&labels(&["a", "b", "a"])),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_majority_vote_tie_drops_farthest() {
        // a/b tie at two votes each; dropping the farthest 'a' leaves b as
        // the unique winner among the first four.
        assert_eq!(
            majority_vote(&labels(&["a", "b", "c", "b", "a"])),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_majority_vote_empty() {
        assert_eq!(majority_vote(&[]), None);
    }

    #[test]
    fn test_classify_unique_neighborhood() {
        let points = vec![
            LabeledPoint::new(array![0.0, 0.0], "red"),
            LabeledPoint::new(array![0.1, 0.1], "red"),
            LabeledPoint::new(array![5.0, 5.0], "blue"),
            LabeledPoint::new(array![5.1, 5.1], "blue"),
            LabeledPoint::new(array![5.2, 4.9], "blue"),
        ];

        let mut model = KnnClassifier::new(3);
        model.fit(points).unwrap();

        assert_eq!(model.classify(&array![0.05, 0.0]).unwrap(), "red");
        assert_eq!(model.classify(&array![5.0, 5.1]).unwrap(), "blue");
    }

    #[test]
    fn test_classify_tie_resolved_by_shrinking() {
        // Distances from the origin: a=1, b=2, c=3, b=4, a=5. With k = 5 the
        // vote is the documented a,b,c,b,a tie, which resolves to b.
        let points = vec![
            LabeledPoint::new(array![1.0], "a"),
            LabeledPoint::new(array![2.0], "b"),
            LabeledPoint::new(array![3.0], "c"),
            LabeledPoint::new(array![4.0], "b"),
            LabeledPoint::new(array![5.0], "a"),
        ];

        let mut model = KnnClassifier::new(5);
        model.fit(points).unwrap();

        assert_eq!(model.classify(&array![0.0]).unwrap(), "b");
    }

    #[test]
    fn test_classify_equidistant_points_keep_input_order() {
        // Both nearest points sit at distance 1; the stable sort keeps "x"
        // first, so k = 1 must pick it.
        let points = vec![
            LabeledPoint::new(array![1.0, 0.0], "x"),
            LabeledPoint::new(array![-1.0, 0.0], "y"),
        ];

        let mut model = KnnClassifier::new(1);
        model.fit(points).unwrap();

        assert_eq!(model.classify(&array![0.0, 0.0]).unwrap(), "x");
    }

    #[test]
    fn test_fit_empty_points() {
        let mut model = KnnClassifier::new(3);
        assert!(model.fit(vec![]).is_err());
    }

    #[test]
    fn test_classify_without_fit() {
        let model = KnnClassifier::new(3);
        assert_eq!(
            model.classify(&array![0.0]),
            Err(ModelError::NotFitted)
        );
    }

    #[test]
    #[should_panic(expected = "k must be > 0")]
    fn test_zero_k_panics() {
        KnnClassifier::new(0);
    }
}
