//! Confusion matrix with separate unclassified and failed counts.

use kvote_knn::{Label, Prediction, Predictions};

use crate::accuracy::check_lengths;
use crate::error::EvaluateError;

/// Counts of predicted classes per actual class.
///
/// Rows are actual classes, columns predicted classes. Slots that voted
/// without a winner and slots that failed are tallied per actual class
/// outside the matrix. Queries without ground truth are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    n_classes: usize,
    /// Row-major `n_classes x n_classes`.
    counts: Vec<usize>,
    unclassified: Vec<usize>,
    failed: Vec<usize>,
}

impl ConfusionMatrix {
    /// Builds the matrix from index-aligned predictions and ground truth.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::LengthMismatch`] on a length mismatch and
    /// [`EvaluateError::LabelOutOfRange`] if an actual or predicted label is
    /// `>= n_classes`.
    pub fn from_predictions(
        predictions: &Predictions,
        truth: &[Option<Label>],
        n_classes: usize,
    ) -> Result<Self, EvaluateError> {
        check_lengths(predictions, truth)?;

        let mut m = Self {
            n_classes,
            counts: vec![0; n_classes * n_classes],
            unclassified: vec![0; n_classes],
            failed: vec![0; n_classes],
        };

        for (index, (outcome, actual)) in predictions.outcomes().iter().zip(truth).enumerate() {
            let Some(actual) = *actual else { continue };
            if actual >= n_classes {
                return Err(EvaluateError::LabelOutOfRange {
                    role: "actual",
                    index,
                    label: actual,
                    n_classes,
                });
            }
            match outcome {
                Ok(Prediction::Class(predicted)) => {
                    if *predicted >= n_classes {
                        return Err(EvaluateError::LabelOutOfRange {
                            role: "predicted",
                            index,
                            label: *predicted,
                            n_classes,
                        });
                    }
                    m.counts[actual * n_classes + predicted] += 1;
                }
                Ok(Prediction::Unclassified) => m.unclassified[actual] += 1,
                Err(_) => m.failed[actual] += 1,
            }
        }

        Ok(m)
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Queries of class `actual` predicted as `predicted`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= n_classes`.
    pub fn count(&self, actual: Label, predicted: Label) -> usize {
        assert!(actual < self.n_classes && predicted < self.n_classes);
        self.counts[actual * self.n_classes + predicted]
    }

    /// Row of class `actual`.
    pub fn row(&self, actual: Label) -> &[usize] {
        let start = actual * self.n_classes;
        &self.counts[start..start + self.n_classes]
    }

    /// Unclassified queries of class `actual`.
    pub fn unclassified(&self, actual: Label) -> usize {
        self.unclassified[actual]
    }

    /// Failed queries of class `actual`.
    pub fn failed(&self, actual: Label) -> usize {
        self.failed[actual]
    }

    /// All labeled queries of class `actual`, whatever their outcome.
    pub fn support(&self, actual: Label) -> usize {
        self.row(actual).iter().sum::<usize>() + self.unclassified[actual] + self.failed[actual]
    }

    /// Queries predicted as `class`.
    pub fn predicted_total(&self, class: Label) -> usize {
        (0..self.n_classes).map(|a| self.count(a, class)).sum()
    }

    /// Correct predictions (the diagonal).
    pub fn correct(&self) -> usize {
        (0..self.n_classes).map(|c| self.count(c, c)).sum()
    }

    /// All labeled queries.
    pub fn total(&self) -> usize {
        (0..self.n_classes).map(|c| self.support(c)).sum()
    }

    /// Fraction of queries predicted as `class` that belong to it.
    ///
    /// `None` if nothing was predicted as `class`.
    pub fn precision(&self, class: Label) -> Option<f64> {
        let predicted = self.predicted_total(class);
        (predicted > 0).then(|| self.count(class, class) as f64 / predicted as f64)
    }

    /// Fraction of queries of `class` predicted as `class`.
    ///
    /// `None` if no labeled query belongs to `class`.
    pub fn recall(&self, class: Label) -> Option<f64> {
        let support = self.support(class);
        (support > 0).then(|| self.count(class, class) as f64 / support as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kvote_knn::{ClassifyConfig, LabeledPoint, ReferenceSet, classify};

    /// Predictions for queries on top of reference points 0..4, plus one
    /// NaN query. Labels: [0, 0, 1, 1].
    fn sample() -> (Predictions, Vec<Option<Label>>) {
        let reference = ReferenceSet::from_points(
            &[
                LabeledPoint::new(vec![0.0], 0),
                LabeledPoint::new(vec![1.0], 0),
                LabeledPoint::new(vec![10.0], 1),
                LabeledPoint::new(vec![11.0], 1),
            ],
            3,
        )
        .unwrap();
        let queries = vec![
            vec![0.1],
            vec![10.4],
            vec![9.9],
            vec![f64::NAN],
            vec![0.5],
        ];
        let predictions = classify(&reference, &queries, &ClassifyConfig::new(1)).unwrap();
        // actual: 0, 0 (wrong), 1, 1 (failed), none
        let truth = vec![Some(0), Some(0), Some(1), Some(1), None];
        (predictions, truth)
    }

    #[test]
    fn test_counts() {
        let (p, t) = sample();
        let m = ConfusionMatrix::from_predictions(&p, &t, 3).unwrap();
        assert_eq!(m.row(0), &[1, 1, 0]);
        assert_eq!(m.row(1), &[0, 1, 0]);
        assert_eq!(m.failed(1), 1);
        assert_eq!(m.unclassified(0), 0);
        assert_eq!(m.support(1), 2);
        assert_eq!(m.correct(), 2);
        assert_eq!(m.total(), 4);
    }

    #[test]
    fn test_precision_recall() {
        let (p, t) = sample();
        let m = ConfusionMatrix::from_predictions(&p, &t, 3).unwrap();
        assert_relative_eq!(m.precision(0).unwrap(), 1.0);
        assert_relative_eq!(m.precision(1).unwrap(), 0.5);
        assert_relative_eq!(m.recall(0).unwrap(), 0.5);
        assert_relative_eq!(m.recall(1).unwrap(), 0.5);
        // class 2 never occurs and is never predicted
        assert_eq!(m.precision(2), None);
        assert_eq!(m.recall(2), None);
    }

    #[test]
    fn test_actual_out_of_range() {
        let (p, _) = sample();
        let truth = vec![Some(0), Some(5), None, None, None];
        let err = ConfusionMatrix::from_predictions(&p, &truth, 3).unwrap_err();
        assert_eq!(
            err,
            EvaluateError::LabelOutOfRange {
                role: "actual",
                index: 1,
                label: 5,
                n_classes: 3
            }
        );
    }

    #[test]
    fn test_predicted_out_of_range() {
        let (p, t) = sample();
        // predictions contain class 1, which a 1-class matrix cannot hold
        let truth: Vec<Option<Label>> = t.iter().map(|_| Some(0)).collect();
        let err = ConfusionMatrix::from_predictions(&p, &truth, 1).unwrap_err();
        assert!(matches!(
            err,
            EvaluateError::LabelOutOfRange {
                role: "predicted",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let (p, _) = sample();
        let err = ConfusionMatrix::from_predictions(&p, &[Some(0)], 3).unwrap_err();
        assert_eq!(
            err,
            EvaluateError::LengthMismatch {
                expected: 5,
                got: 1
            }
        );
    }
}
