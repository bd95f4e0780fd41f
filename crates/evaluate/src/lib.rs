//! kvote evaluation: compare predictions against ground-truth labels.

mod accuracy;
mod confusion;
mod error;
mod output;

use kvote_knn::{Label, Predictions};

pub use accuracy::accuracy;
pub use confusion::ConfusionMatrix;
pub use error::EvaluateError;
pub use output::{ClassMetrics, EvaluationReport, FailureEntry, Summary, to_json};

/// Evaluate a batch of predictions against ground truth.
///
/// `class_names[l]` names label `l`; its length is the number of classes.
/// Builds the accuracy, the confusion matrix and per-class metrics, and
/// lists every failed and unclassified slot.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] if `truth` does not match
/// `predictions`, [`EvaluateError::NoGroundTruth`] if no query is labeled,
/// and [`EvaluateError::LabelOutOfRange`] for labels outside `class_names`.
pub fn evaluate(
    predictions: &Predictions,
    truth: &[Option<Label>],
    class_names: &[String],
) -> Result<EvaluationReport, EvaluateError> {
    let accuracy = accuracy(predictions, truth)?;
    let matrix = ConfusionMatrix::from_predictions(predictions, truth, class_names.len())?;

    let failures: Vec<FailureEntry> = predictions
        .failures()
        .map(|(index, reason)| FailureEntry {
            index,
            reason: reason.to_string(),
        })
        .collect();
    let unclassified: Vec<usize> = predictions.unclassified().collect();

    let summary = Summary {
        k: predictions.k(),
        n_queries: predictions.len(),
        n_labeled: matrix.total(),
        n_correct: matrix.correct(),
        n_unclassified: unclassified.len(),
        n_failed: failures.len(),
        accuracy,
    };

    let classes = class_names
        .iter()
        .enumerate()
        .map(|(c, name)| ClassMetrics {
            class: name.clone(),
            support: matrix.support(c),
            predicted: matrix.predicted_total(c),
            precision: matrix.precision(c),
            recall: matrix.recall(c),
            unclassified: matrix.unclassified(c),
            failed: matrix.failed(c),
        })
        .collect();

    let confusion_matrix = (0..matrix.n_classes())
        .map(|c| matrix.row(c).to_vec())
        .collect();

    Ok(EvaluationReport {
        summary,
        classes,
        confusion_matrix,
        failures,
        unclassified,
    })
}
