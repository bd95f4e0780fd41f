//! Output type for batch classification.

use crate::error::QueryFailure;
use crate::point::{Label, Prediction};

/// Result slot of one query.
pub type QueryOutcome = Result<Prediction, QueryFailure>;

/// Index-aligned results of a [`classify`](crate::classify) call.
///
/// Slot `i` belongs to query `i`. Every slot is filled: a failed unit of
/// work leaves its [`QueryFailure`] in its own slot only.
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    k: usize,
    outcomes: Vec<QueryOutcome>,
}

impl Predictions {
    /// Creates `Predictions` from result slots in query order.
    pub fn new(k: usize, outcomes: Vec<QueryOutcome>) -> Self {
        Self { k, outcomes }
    }

    /// The k used for this batch.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of queries.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` for an empty batch.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// All result slots in query order.
    pub fn outcomes(&self) -> &[QueryOutcome] {
        &self.outcomes
    }

    /// Result slot of query `i`.
    pub fn get(&self, i: usize) -> Option<&QueryOutcome> {
        self.outcomes.get(i)
    }

    /// Predicted label per query; `None` for unclassified or failed slots.
    pub fn labels(&self) -> Vec<Option<Label>> {
        self.outcomes
            .iter()
            .map(|o| o.as_ref().ok().and_then(|p| p.label()))
            .collect()
    }

    /// Indices and reasons of failed slots.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &QueryFailure)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().err().map(|e| (i, e)))
    }

    /// Indices of slots that voted but produced no class.
    pub fn unclassified(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, Ok(Prediction::Unclassified)))
            .map(|(i, _)| i)
    }

    /// Number of failed slots.
    pub fn n_failed(&self) -> usize {
        self.failures().count()
    }

    /// Returns `true` if every slot holds a class.
    pub fn is_complete(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o, Ok(Prediction::Class(_))))
    }

    /// Consumes `self`, returning the slots.
    pub fn into_outcomes(self) -> Vec<QueryOutcome> {
        self.outcomes
    }
}
