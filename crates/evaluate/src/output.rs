//! JSON output structures for evaluation results.

use crate::error::EvaluateError;
use serde::Serialize;

/// Top-level evaluation report.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Batch-wide counts and accuracy.
    pub summary: Summary,
    /// Per-class metrics in label order.
    pub classes: Vec<ClassMetrics>,
    /// Rows are actual classes, columns predicted classes.
    pub confusion_matrix: Vec<Vec<usize>>,
    /// Slots whose unit of work failed.
    pub failures: Vec<FailureEntry>,
    /// Indices of slots that produced no class.
    pub unclassified: Vec<usize>,
}

/// Batch-wide counts.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub k: usize,
    pub n_queries: usize,
    pub n_labeled: usize,
    pub n_correct: usize,
    pub n_unclassified: usize,
    pub n_failed: usize,
    pub accuracy: f64,
}

/// Metrics for one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    pub class: String,
    pub support: usize,
    pub predicted: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub unclassified: usize,
    pub failed: usize,
}

/// A failed query slot.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEntry {
    pub index: usize,
    pub reason: String,
}

/// Serialize an evaluation report to a JSON string.
pub fn to_json(report: &EvaluationReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_sections() {
        let report = EvaluationReport {
            summary: Summary {
                k: 3,
                n_queries: 2,
                n_labeled: 2,
                n_correct: 1,
                n_unclassified: 0,
                n_failed: 1,
                accuracy: 0.5,
            },
            classes: vec![ClassMetrics {
                class: "Iris-setosa".to_string(),
                support: 2,
                predicted: 1,
                precision: Some(1.0),
                recall: Some(0.5),
                unclassified: 0,
                failed: 1,
            }],
            confusion_matrix: vec![vec![1]],
            failures: vec![FailureEntry {
                index: 1,
                reason: "query contains a non-finite feature value".to_string(),
            }],
            unclassified: vec![],
        };

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"k\": 3"));
        assert!(json.contains("\"accuracy\": 0.5"));
        assert!(json.contains("\"class\": \"Iris-setosa\""));
        assert!(json.contains("\"confusion_matrix\""));
        assert!(json.contains("\"failures\""));
    }

    #[test]
    fn test_undefined_metrics_serialize_as_null() {
        let metrics = ClassMetrics {
            class: "Iris-virginica".to_string(),
            support: 0,
            predicted: 0,
            precision: None,
            recall: None,
            unclassified: 0,
            failed: 0,
        };

        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"precision\":null"));
        assert!(json.contains("\"recall\":null"));
        assert!(json.contains("\"support\":0"));
    }
}
