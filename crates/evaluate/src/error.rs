//! Evaluation error types.

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluateError {
    /// Predictions and ground truth differ in length.
    #[error("{got} ground-truth label(s) for {expected} prediction(s)")]
    LengthMismatch { expected: usize, got: usize },

    /// No query carries a ground-truth label.
    #[error("no query has a ground-truth label")]
    NoGroundTruth,

    /// A label is outside the class range of the matrix.
    #[error("{role} label {label} at query {index} outside [0, {n_classes})")]
    LabelOutOfRange {
        role: &'static str,
        index: usize,
        label: usize,
        n_classes: usize,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
