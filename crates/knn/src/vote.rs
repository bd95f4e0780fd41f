//! Majority voting over the nearest neighbors.

use crate::error::QueryFailure;
use crate::point::{Label, Prediction};
use crate::rank::Neighbor;

/// Per-class vote counts with a fixed number of classes.
///
/// Sized once from the class count and reset between queries; it never grows.
#[derive(Debug, Clone)]
pub struct VoteTally {
    counts: Vec<usize>,
}

impl VoteTally {
    /// Creates a zeroed tally for `n_classes` classes.
    pub fn new(n_classes: usize) -> Self {
        Self {
            counts: vec![0; n_classes],
        }
    }

    /// Number of classes the tally covers.
    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }

    /// Zeroes every count.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    /// Adds one vote for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryFailure::LabelOutOfRange`] if `label` is not a known class.
    pub fn record(&mut self, label: Label) -> Result<(), QueryFailure> {
        let n_classes = self.counts.len();
        let count = self
            .counts
            .get_mut(label)
            .ok_or(QueryFailure::LabelOutOfRange { label, n_classes })?;
        *count += 1;
        Ok(())
    }

    /// Votes cast for `label` (zero for unknown labels).
    pub fn count(&self, label: Label) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// The label with the most votes.
    ///
    /// Labels are scanned in ascending order and only a strictly greater count
    /// replaces the current leader, so among tied labels the smallest id wins.
    /// Returns [`Prediction::Unclassified`] if no votes were cast.
    pub fn winner(&self) -> Prediction {
        let mut best = Prediction::Unclassified;
        let mut max_votes = 0;
        for (label, &votes) in self.counts.iter().enumerate() {
            if votes > max_votes {
                max_votes = votes;
                best = Prediction::Class(label);
            }
        }
        best
    }
}

/// Reduces the first `k` of an ascending neighbor list to one label.
///
/// If fewer than `k` neighbors are given, all of them vote. `k == 0` or an
/// empty list yields [`Prediction::Unclassified`]. Callers validate `k`
/// against the reference size before classification.
///
/// # Errors
///
/// Returns [`QueryFailure::LabelOutOfRange`] if a voting neighbor's label is
/// `>= n_classes`.
pub fn majority_vote(
    neighbors: &[Neighbor],
    k: usize,
    n_classes: usize,
) -> Result<Prediction, QueryFailure> {
    let mut tally = VoteTally::new(n_classes);
    vote_into(neighbors, k, &mut tally)
}

/// Scratch-reusing form of [`majority_vote`]; resets `tally` first.
pub(crate) fn vote_into(
    neighbors: &[Neighbor],
    k: usize,
    tally: &mut VoteTally,
) -> Result<Prediction, QueryFailure> {
    tally.reset();
    for n in neighbors.iter().take(k) {
        tally.record(n.label)?;
    }
    Ok(tally.winner())
}
