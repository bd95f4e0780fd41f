//! CSV writers for datasets and predictions.

use std::path::Path;

use tracing::info;

use kvote_knn::{Label, Prediction, Predictions, UNCLASSIFIED};

use crate::dataset::Dataset;
use crate::error::IoError;
use crate::validate::ValidationCollector;
use crate::vocabulary::LabelVocabulary;

/// Class name of `label`, or its number when outside the vocabulary.
fn label_text(vocab: &LabelVocabulary, label: Label) -> String {
    vocab
        .name(label)
        .map_or_else(|| label.to_string(), str::to_string)
}

/// Write a dataset as CSV with a header row and class names.
///
/// The output reads back with [`read_dataset`](crate::read_dataset) and the
/// default [`DatasetConfig`](crate::DatasetConfig). Unlabeled points get an
/// empty class cell.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if a label has no name in `vocab`, and
/// [`IoError::Csv`] on write failures.
pub fn write_dataset(
    path: &Path,
    dataset: &Dataset,
    vocab: &LabelVocabulary,
) -> Result<(), IoError> {
    let mut c = ValidationCollector::new();
    for (i, p) in dataset.points().iter().enumerate() {
        if let Some(label) = p.label
            && vocab.name(label).is_none()
        {
            c.push(format!("point {i}: label {label} has no class name"));
        }
    }
    c.finish()?;

    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = dataset.feature_names().iter().map(String::as_str).collect();
    header.push(dataset.label_name());
    writer.write_record(&header)?;

    for p in dataset.points() {
        let mut row: Vec<String> = p.features.iter().map(f64::to_string).collect();
        let class = p.label.and_then(|l| vocab.name(l)).unwrap_or_default();
        row.push(class.to_string());
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), n_points = dataset.len(), "dataset written");
    Ok(())
}

/// Write per-query predictions as CSV.
///
/// Columns: `index,predicted,actual,status,reason`. `status` is one of
/// `classified`, `unclassified` or `failed`; `reason` holds the failure
/// message for failed slots. Unclassified slots are written as
/// [`UNCLASSIFIED`] (`-1`) in `predicted`; failed slots leave it empty.
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] if `truth` and `predictions` differ
/// in length, and [`IoError::Csv`] on write failures.
pub fn write_predictions(
    path: &Path,
    predictions: &Predictions,
    truth: &[Option<Label>],
    vocab: &LabelVocabulary,
) -> Result<(), IoError> {
    if truth.len() != predictions.len() {
        return Err(IoError::LengthMismatch {
            name: "truth".to_string(),
            expected: predictions.len(),
            got: truth.len(),
        });
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["index", "predicted", "actual", "status", "reason"])?;

    for (i, (outcome, actual)) in predictions.outcomes().iter().zip(truth).enumerate() {
        let (predicted, status, reason) = match outcome {
            Ok(Prediction::Class(l)) => (label_text(vocab, *l), "classified", String::new()),
            Ok(Prediction::Unclassified) => {
                (UNCLASSIFIED.to_string(), "unclassified", String::new())
            }
            Err(e) => (String::new(), "failed", e.to_string()),
        };
        let index = i.to_string();
        let actual = actual.map(|l| label_text(vocab, l)).unwrap_or_default();
        writer.write_record([
            index.as_str(),
            predicted.as_str(),
            actual.as_str(),
            status,
            reason.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), n_predictions = predictions.len(), "predictions written");
    Ok(())
}
