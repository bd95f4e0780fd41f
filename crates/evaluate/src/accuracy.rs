//! Classification accuracy against ground truth.

use kvote_knn::{Label, Predictions};

use crate::error::EvaluateError;

/// Checks that there is one ground-truth entry per prediction.
pub(crate) fn check_lengths(
    predictions: &Predictions,
    truth: &[Option<Label>],
) -> Result<(), EvaluateError> {
    if predictions.len() != truth.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: predictions.len(),
            got: truth.len(),
        });
    }
    Ok(())
}

/// Fraction of labeled queries predicted correctly, in `[0, 1]`.
///
/// Queries without a ground-truth label are excluded from both numerator
/// and denominator. Unclassified and failed slots count as incorrect.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] if `truth` and `predictions`
/// differ in length, and [`EvaluateError::NoGroundTruth`] if no query has a
/// label.
pub fn accuracy(predictions: &Predictions, truth: &[Option<Label>]) -> Result<f64, EvaluateError> {
    check_lengths(predictions, truth)?;

    let mut scored = 0usize;
    let mut correct = 0usize;
    for (predicted, actual) in predictions.labels().into_iter().zip(truth) {
        let Some(actual) = actual else { continue };
        scored += 1;
        if predicted == Some(*actual) {
            correct += 1;
        }
    }

    if scored == 0 {
        return Err(EvaluateError::NoGroundTruth);
    }
    Ok(correct as f64 / scored as f64)
}
