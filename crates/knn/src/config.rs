//! Configuration for batch classification.

use crate::error::KnnError;

/// Configuration for a [`classify`](crate::classify) call.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kvote_knn::ClassifyConfig;
///
/// let config = ClassifyConfig::new(5).with_threads(4);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Worker pool size. `None` lets rayon pick (one per logical CPU).
    threads: Option<usize>,
}

impl ClassifyConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `threads = None`.
    pub fn new(k: usize) -> Self {
        Self { k, threads: None }
    }

    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the configured worker count, if any.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates this configuration on its own.
    ///
    /// Returns an error if k < 1 or an explicit thread count is zero. The
    /// upper bound on k depends on the reference set and is checked by
    /// [`classify`](crate::classify).
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k, n: 0 });
        }
        if let Some(threads) = self.threads
            && threads == 0
        {
            return Err(KnnError::InvalidThreads { threads });
        }
        Ok(())
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
