//! Immutable, validated reference set.

use crate::error::KnnError;
use crate::point::{Label, LabeledPoint};

/// Labeled reference points stored as a flat row-major matrix.
///
/// Construction validates every invariant the classifier relies on: a shared
/// feature dimension, a label in `[0, n_classes)` on every row and finite
/// feature values. Once built the set is never mutated, so it can be shared
/// by reference across worker threads.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    /// `[n × n_features]` feature values, row-major.
    features: Vec<f64>,
    /// One label per row.
    labels: Vec<Label>,
    n_features: usize,
    n_classes: usize,
}

impl ReferenceSet {
    /// Builds a reference set from a flat row-major feature matrix.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError`] if `n_features` is zero for non-empty data, the
    /// matrix shape does not match `labels`, `n_classes` is zero for a
    /// non-empty set, a label is out of range or a value is non-finite.
    pub fn new(
        features: Vec<f64>,
        n_features: usize,
        labels: Vec<Label>,
        n_classes: usize,
    ) -> Result<Self, KnnError> {
        if labels.is_empty() && features.is_empty() {
            return Ok(Self {
                features,
                labels,
                n_features,
                n_classes,
            });
        }
        if n_features == 0 {
            return Err(KnnError::ZeroDimension);
        }
        if n_classes == 0 {
            return Err(KnnError::InvalidClassCount);
        }
        let expected_len = labels.len() * n_features;
        if features.len() != expected_len {
            // Short matrix: first incomplete row. Long matrix: the surplus
            // counts as an extra, unlabeled row.
            let (index, got) = if features.len() < expected_len {
                (features.len() / n_features, features.len() % n_features)
            } else {
                (labels.len(), features.len() - expected_len)
            };
            return Err(KnnError::DimensionMismatch {
                index,
                expected: n_features,
                got,
            });
        }

        for (index, (row, &label)) in features
            .chunks_exact(n_features)
            .zip(labels.iter())
            .enumerate()
        {
            if label >= n_classes {
                return Err(KnnError::LabelOutOfRange {
                    index,
                    label,
                    n_classes,
                });
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(KnnError::NonFiniteReference { index });
            }
        }

        Ok(Self {
            features,
            labels,
            n_features,
            n_classes,
        })
    }

    /// Builds a reference set from labeled points.
    ///
    /// The feature dimension is taken from the first point.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::DimensionMismatch`] for a point whose dimension
    /// differs from the first, [`KnnError::MissingLabel`] for an unlabeled
    /// point, plus everything [`ReferenceSet::new`] rejects.
    pub fn from_points(points: &[LabeledPoint], n_classes: usize) -> Result<Self, KnnError> {
        let n_features = points.first().map_or(0, LabeledPoint::dim);
        let mut features = Vec::with_capacity(points.len() * n_features);
        let mut labels = Vec::with_capacity(points.len());

        for (index, point) in points.iter().enumerate() {
            if point.dim() != n_features {
                return Err(KnnError::DimensionMismatch {
                    index,
                    expected: n_features,
                    got: point.dim(),
                });
            }
            let label = point.label.ok_or(KnnError::MissingLabel { index })?;
            features.extend_from_slice(&point.features);
            labels.push(label);
        }

        Self::new(features, n_features, labels, n_classes)
    }

    /// Number of reference points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature dimension shared by every point.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of classes, the size of every vote tally.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Flat row-major feature matrix.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Labels, one per row.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Feature row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.features[i * self.n_features..(i + 1) * self.n_features]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            LabeledPoint::new(vec![0.0, 0.0], 0),
            LabeledPoint::new(vec![10.0, 10.0], 1),
        ];
        let set = ReferenceSet::from_points(&points, 2).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.n_features(), 2);
        assert_eq!(set.n_classes(), 2);
        assert_eq!(set.row(1), &[10.0, 10.0]);
        assert_eq!(set.labels(), &[0, 1]);
    }

    #[test]
    fn test_empty_is_allowed() {
        let set = ReferenceSet::from_points(&[], 3).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.n_features(), 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let points = vec![
            LabeledPoint::new(vec![0.0, 0.0], 0),
            LabeledPoint::new(vec![1.0], 0),
        ];
        let err = ReferenceSet::from_points(&points, 1).unwrap_err();
        assert_eq!(
            err,
            KnnError::DimensionMismatch {
                index: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_missing_label() {
        let points = vec![
            LabeledPoint::new(vec![0.0], 0),
            LabeledPoint::unlabeled(vec![1.0]),
        ];
        let err = ReferenceSet::from_points(&points, 1).unwrap_err();
        assert_eq!(err, KnnError::MissingLabel { index: 1 });
    }

    #[test]
    fn test_label_out_of_range() {
        let points = vec![LabeledPoint::new(vec![0.0], 3)];
        let err = ReferenceSet::from_points(&points, 3).unwrap_err();
        assert_eq!(
            err,
            KnnError::LabelOutOfRange {
                index: 0,
                label: 3,
                n_classes: 3
            }
        );
    }

    #[test]
    fn test_non_finite() {
        let err = ReferenceSet::new(vec![0.0, f64::NAN], 1, vec![0, 0], 1).unwrap_err();
        assert_eq!(err, KnnError::NonFiniteReference { index: 1 });
    }

    #[test]
    fn test_zero_dimension() {
        let points = vec![LabeledPoint::new(vec![], 0)];
        let err = ReferenceSet::from_points(&points, 1).unwrap_err();
        assert_eq!(err, KnnError::ZeroDimension);
    }

    #[test]
    fn test_zero_classes() {
        let err = ReferenceSet::new(vec![1.0], 1, vec![0], 0).unwrap_err();
        assert_eq!(err, KnnError::InvalidClassCount);
    }

    #[test]
    fn test_flat_shape_mismatch() {
        // 5 values, 2 features, 3 labels -> row 2 is short
        let err = ReferenceSet::new(vec![1.0; 5], 2, vec![0, 0, 0], 1).unwrap_err();
        assert!(matches!(
            err,
            KnnError::DimensionMismatch {
                index: 2,
                expected: 2,
                got: 1
            }
        ));
    }
}
