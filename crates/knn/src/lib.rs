//! Exact k-nearest-neighbor classification.
//!
//! Every query is compared against the full labeled reference set with the
//! Euclidean distance, all reference points are ranked, and the `k` nearest
//! vote for the predicted class. Queries are classified in parallel on a
//! bounded rayon pool, one independent unit of work per query.
//!
//! | Step | Rule |
//! |------|------|
//! | Distance | `sqrt(Σ (aⱼ − bⱼ)²)` |
//! | Ranking | ascending distance, ties by reference index |
//! | Vote | most votes among the first `k`; ties go to the smallest label |
//!
//! # Quick start
//!
//! ```
//! use kvote_knn::{ClassifyConfig, LabeledPoint, ReferenceSet, classify};
//!
//! let reference = ReferenceSet::from_points(
//!     &[
//!         LabeledPoint::new(vec![0.0, 0.0], 0),
//!         LabeledPoint::new(vec![0.2, 0.1], 0),
//!         LabeledPoint::new(vec![5.0, 5.0], 1),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! let queries = [[0.1, 0.0], [4.0, 4.5]];
//! let config = ClassifyConfig::new(1).with_threads(2);
//! let predictions = classify(&reference, &queries, &config).unwrap();
//!
//! assert_eq!(predictions.labels(), vec![Some(0), Some(1)]);
//! assert!(predictions.is_complete());
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate inputs           (k in [1, n], query dimensions)
//!   ├─ build worker pool         (rayon)
//!   └─ per query, in parallel:
//!        ├─ rank_neighbors()     (distance.rs, rank.rs)
//!        └─ majority_vote()      (vote.rs)
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod point;
pub mod rank;
pub mod reference;
pub mod result;
pub mod vote;

pub(crate) mod distance;

pub use classify::{classify, classify_one};
pub use config::ClassifyConfig;
pub use distance::euclidean;
pub use error::{KnnError, QueryFailure};
pub use point::{Label, LabeledPoint, Prediction, UNCLASSIFIED};
pub use rank::{Neighbor, rank_neighbors};
pub use reference::ReferenceSet;
pub use result::{Predictions, QueryOutcome};
pub use vote::{VoteTally, majority_vote};

/// Square-root heuristic for k.
///
/// Returns `floor(sqrt(n_reference)).max(1)`, a common default when the
/// caller does not choose k.
pub fn k_heuristic(n_reference: usize) -> usize {
    (n_reference as f64).sqrt().floor().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_heuristic_known_values() {
        assert_eq!(k_heuristic(1), 1);
        assert_eq!(k_heuristic(4), 2);
        assert_eq!(k_heuristic(10), 3); // floor(3.16) = 3
        assert_eq!(k_heuristic(120), 10); // floor(10.95) = 10
        assert_eq!(k_heuristic(150), 12);
    }

    #[test]
    fn test_k_heuristic_zero() {
        // 0 points: sqrt(0)=0, max(1) => 1
        assert_eq!(k_heuristic(0), 1);
    }
}
