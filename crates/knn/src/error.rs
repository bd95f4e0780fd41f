//! Error types for the kvote-knn crate.

/// Error type for batch-level failures in the kvote-knn crate.
///
/// Every variant except [`KnnError::WorkerPool`] is a contract violation
/// detected before any unit of work is dispatched. A `KnnError` means no
/// predictions were produced at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when k is zero or larger than the reference set.
    #[error("k must be in [1, {n}], got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of reference points.
        n: usize,
    },

    /// Returned when classification is requested against an empty reference set.
    #[error("reference set is empty (k = {k})")]
    EmptyReference {
        /// The requested k.
        k: usize,
    },

    /// Returned when a reference row does not have the shared dimension.
    #[error("reference point {index} has {got} features, expected {expected}")]
    DimensionMismatch {
        /// Row index of the offending reference point.
        index: usize,
        /// Dimension shared by the reference set.
        expected: usize,
        /// Dimension of the offending point.
        got: usize,
    },

    /// Returned when a query does not have the reference dimension.
    #[error("query point {index} has {got} features, expected {expected}")]
    QueryDimensionMismatch {
        /// Index of the offending query.
        index: usize,
        /// Dimension of the reference set.
        expected: usize,
        /// Dimension of the offending query.
        got: usize,
    },

    /// Returned when a non-empty reference set has zero features per point.
    #[error("feature dimension must be >= 1")]
    ZeroDimension,

    /// Returned when a reference point carries no label.
    #[error("reference point {index} has no label")]
    MissingLabel {
        /// Row index of the unlabeled reference point.
        index: usize,
    },

    /// Returned when a reference label is outside `[0, n_classes)`.
    #[error("reference point {index} has label {label}, outside [0, {n_classes})")]
    LabelOutOfRange {
        /// Row index of the offending reference point.
        index: usize,
        /// The out-of-range label.
        label: usize,
        /// Number of known classes.
        n_classes: usize,
    },

    /// Returned when a non-empty reference set declares zero classes.
    #[error("number of classes must be >= 1")]
    InvalidClassCount,

    /// Returned when a reference point contains NaN or infinity.
    #[error("non-finite feature value in reference point {index}")]
    NonFiniteReference {
        /// Row index of the offending reference point.
        index: usize,
    },

    /// Returned when an explicit worker count of zero is configured.
    #[error("threads must be >= 1, got {threads}")]
    InvalidThreads {
        /// The invalid thread count.
        threads: usize,
    },

    /// Returned when the worker pool could not be created.
    #[error("failed to start worker pool: {reason}")]
    WorkerPool {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned by single-query classification when the query itself fails.
    #[error(transparent)]
    Query(#[from] QueryFailure),
}

impl From<rayon::ThreadPoolBuildError> for KnnError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        KnnError::WorkerPool {
            reason: e.to_string(),
        }
    }
}

/// Failure of a single query's unit of work.
///
/// Recorded in that query's result slot; sibling slots are unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryFailure {
    /// The query contains NaN or infinity, so its distances are undefined.
    #[error("query contains a non-finite feature value")]
    NonFiniteQuery,

    /// A neighbor carried a label outside the tally range.
    #[error("neighbor label {label} outside [0, {n_classes})")]
    LabelOutOfRange {
        /// The out-of-range label.
        label: usize,
        /// Size of the vote tally.
        n_classes: usize,
    },

    /// The unit of work panicked.
    #[error("classification panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string.
        message: String,
    },
}
