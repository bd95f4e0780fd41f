//! Classification entry points and per-worker scratch management.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::ClassifyConfig;
use crate::error::{KnnError, QueryFailure};
use crate::point::Prediction;
use crate::rank::{Neighbor, rank_into};
use crate::reference::ReferenceSet;
use crate::result::{Predictions, QueryOutcome};
use crate::vote::{VoteTally, vote_into};

/// Pre-allocated buffers for classifying one query at a time.
///
/// Each worker thread owns one and reuses it for every query it picks up,
/// so a batch allocates per worker rather than per query.
#[derive(Debug, Clone)]
pub(crate) struct ClassifyScratch {
    /// Distances to every reference row.
    pub(crate) distances: Vec<f64>,
    /// Ranked neighbors.
    pub(crate) neighbors: Vec<Neighbor>,
    /// Fixed-size vote counts.
    pub(crate) tally: VoteTally,
}

impl ClassifyScratch {
    /// Creates buffers sized for `n_reference` rows and `n_classes` classes.
    pub(crate) fn new(n_reference: usize, n_classes: usize) -> Self {
        Self {
            distances: Vec::with_capacity(n_reference),
            neighbors: Vec::with_capacity(n_reference),
            tally: VoteTally::new(n_classes),
        }
    }
}

/// Checks k against the reference set and every query's dimension.
fn validate_inputs<Q: AsRef<[f64]>>(
    reference: &ReferenceSet,
    queries: &[Q],
    config: &ClassifyConfig,
) -> Result<(), KnnError> {
    let k = config.k();
    if k == 0 {
        return Err(KnnError::InvalidK {
            k,
            n: reference.len(),
        });
    }
    config.validate()?;

    if reference.is_empty() {
        return Err(KnnError::EmptyReference { k });
    }
    if k > reference.len() {
        return Err(KnnError::InvalidK {
            k,
            n: reference.len(),
        });
    }

    let expected = reference.n_features();
    for (index, query) in queries.iter().enumerate() {
        let got = query.as_ref().len();
        if got != expected {
            return Err(KnnError::QueryDimensionMismatch {
                index,
                expected,
                got,
            });
        }
    }

    Ok(())
}

/// Rank, then vote. Assumes `k` and the query dimension are validated.
fn classify_query_inner(
    reference: &ReferenceSet,
    query: &[f64],
    k: usize,
    scratch: &mut ClassifyScratch,
) -> QueryOutcome {
    if query.iter().any(|v| !v.is_finite()) {
        return Err(QueryFailure::NonFiniteQuery);
    }
    rank_into(
        reference,
        query,
        &mut scratch.distances,
        &mut scratch.neighbors,
    );
    vote_into(&scratch.neighbors, k, &mut scratch.tally)
}

/// Runs one unit of work, turning a panic into a failed slot.
fn guarded(work: impl FnOnce() -> QueryOutcome) -> QueryOutcome {
    panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|payload| {
        Err(QueryFailure::Panicked {
            message: panic_message(&*payload),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Classifies every query against `reference` in parallel.
///
/// One unit of work is created per query and run on a bounded rayon pool
/// (`config.threads()` workers). Each unit reads the shared reference set,
/// ranks all reference points, lets the `k` nearest vote and fills the
/// result slot at its own query index. The call returns only after every
/// unit has finished.
///
/// # Arguments
///
/// * `reference` — validated labeled reference set
/// * `queries` — query feature vectors, each of dimension `reference.n_features()`
/// * `config` — k and worker count
///
/// # Errors
///
/// Returns [`KnnError`] before any work is dispatched if k is outside
/// `[1, reference.len()]`, the reference set is empty, a query has the wrong
/// dimension or the thread count is zero. Returns [`KnnError::WorkerPool`]
/// if the worker pool cannot be started. Failures of individual queries do
/// not fail the call; they are recorded in that query's slot.
///
/// # Example
///
/// ```
/// use kvote_knn::{ClassifyConfig, LabeledPoint, Prediction, ReferenceSet, classify};
///
/// let reference = ReferenceSet::from_points(
///     &[
///         LabeledPoint::new(vec![0.0, 0.0], 0),
///         LabeledPoint::new(vec![10.0, 10.0], 1),
///     ],
///     2,
/// )
/// .unwrap();
/// let queries = vec![vec![0.1, 0.1], vec![9.0, 9.5]];
///
/// let predictions = classify(&reference, &queries, &ClassifyConfig::new(1)).unwrap();
/// assert_eq!(predictions.outcomes()[0], Ok(Prediction::Class(0)));
/// assert_eq!(predictions.outcomes()[1], Ok(Prediction::Class(1)));
/// ```
pub fn classify<Q>(
    reference: &ReferenceSet,
    queries: &[Q],
    config: &ClassifyConfig,
) -> Result<Predictions, KnnError>
where
    Q: AsRef<[f64]> + Sync,
{
    validate_inputs(reference, queries, config)?;
    let k = config.k();

    if queries.is_empty() {
        debug!("empty query set, nothing to dispatch");
        return Ok(Predictions::new(k, Vec::new()));
    }

    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("kvote-worker-{i}"));
    if let Some(threads) = config.threads() {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    info!(
        n_queries = queries.len(),
        n_reference = reference.len(),
        n_features = reference.n_features(),
        k,
        threads = pool.current_num_threads(),
        "classifying queries"
    );

    // Indexed collect: the item from query i lands in slot i whatever the
    // completion order.
    let mut outcomes: Vec<QueryOutcome> = Vec::with_capacity(queries.len());
    pool.install(|| {
        queries
            .par_iter()
            .map_init(
                || ClassifyScratch::new(reference.len(), reference.n_classes()),
                |scratch, query| {
                    let query: &[f64] = query.as_ref();
                    guarded(|| classify_query_inner(reference, query, k, scratch))
                },
            )
            .collect_into_vec(&mut outcomes);
    });

    let predictions = Predictions::new(k, outcomes);
    let n_failed = predictions.n_failed();
    if n_failed > 0 {
        warn!(n_failed, "some queries could not be classified");
    }
    debug!(n_predictions = predictions.len(), "classification joined");

    Ok(predictions)
}

/// Classifies a single query on the calling thread.
///
/// Applies the same validation and pipeline as [`classify`] without a
/// worker pool.
///
/// # Errors
///
/// Returns [`KnnError`] for invalid k or query dimension, and
/// [`KnnError::Query`] if the query itself fails (e.g. non-finite values).
pub fn classify_one(
    reference: &ReferenceSet,
    query: &[f64],
    k: usize,
) -> Result<Prediction, KnnError> {
    let config = ClassifyConfig::new(k);
    validate_inputs(reference, &[query], &config)?;
    let mut scratch = ClassifyScratch::new(reference.len(), reference.n_classes());
    Ok(classify_query_inner(reference, query, k, &mut scratch)?)
}
