//! Full neighbor ranking for one query.

use std::cmp::Ordering;

use crate::distance::euclidean_to_rows;
use crate::point::Label;
use crate::reference::ReferenceSet;

/// One reference point as seen from a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Euclidean distance to the query.
    pub distance: f64,
    /// Label of the reference point.
    pub label: Label,
    /// Row index of the reference point.
    pub index: usize,
}

/// Ascending order by distance, ties broken by reference index.
///
/// The index comparison makes the order total and independent of the sort
/// algorithm's stability.
fn by_distance_then_index(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}

/// Ranks every reference point by distance to `query`.
///
/// Returns all `n` neighbors sorted ascending by distance; equal distances
/// keep the reference order. The reference set is not modified.
///
/// # Panics
///
/// Debug-asserts that `query.len() == reference.n_features()` for a
/// non-empty reference set.
pub fn rank_neighbors(reference: &ReferenceSet, query: &[f64]) -> Vec<Neighbor> {
    let mut distances = Vec::with_capacity(reference.len());
    let mut neighbors = Vec::with_capacity(reference.len());
    rank_into(reference, query, &mut distances, &mut neighbors);
    neighbors
}

/// Scratch-reusing form of [`rank_neighbors`].
///
/// Both buffers are cleared first; `neighbors` holds the ranking on return.
pub(crate) fn rank_into(
    reference: &ReferenceSet,
    query: &[f64],
    distances: &mut Vec<f64>,
    neighbors: &mut Vec<Neighbor>,
) {
    distances.clear();
    neighbors.clear();
    if reference.is_empty() {
        return;
    }

    distances.resize(reference.len(), 0.0);
    euclidean_to_rows(reference.features(), reference.n_features(), query, distances);

    neighbors.extend(
        distances
            .iter()
            .zip(reference.labels())
            .enumerate()
            .map(|(index, (&distance, &label))| Neighbor {
                distance,
                label,
                index,
            }),
    );
    neighbors.sort_unstable_by(by_distance_then_index);
}
