//! Seeded train/test splitting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::IoError;

/// Shuffles `items` with a seeded RNG and splits off a test portion.
///
/// The test portion holds `ceil(len × test_fraction)` items; the rest form the
/// training portion. The same seed always yields the same split.
///
/// Returns `(train, test)`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if `test_fraction` is not strictly between
/// 0 and 1, or if either portion would be empty.
pub fn train_test_split<T: Clone>(
    items: &[T],
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>), IoError> {
    if !(test_fraction.is_finite() && test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(IoError::Validation {
            count: 1,
            details: format!("test_fraction must be in (0, 1), got {test_fraction}"),
        });
    }

    let n = items.len();
    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "cannot split {n} item(s) with test_fraction {test_fraction}: one side would be empty"
            ),
        });
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let test = order[..n_test].iter().map(|&i| items[i].clone()).collect();
    let train = order[n_test..].iter().map(|&i| items[i].clone()).collect();
    debug!(n, n_test, seed, "split items");
    Ok((train, test))
}

impl Dataset {
    /// Splits the points into training and test datasets with the same columns.
    ///
    /// See [`train_test_split`].
    ///
    /// # Errors
    ///
    /// Same as [`train_test_split`].
    pub fn split(&self, test_fraction: f64, seed: u64) -> Result<(Dataset, Dataset), IoError> {
        let (train, test) = train_test_split(self.points(), test_fraction, seed)?;
        Ok((self.with_points(train)?, self.with_points(test)?))
    }
}
