//! Monte Carlo run configuration.

use serde::{Deserialize, Serialize};

/// Paths drawn per batch before accumulating into the running sums.
pub const DEFAULT_BATCH_SIZE: usize = 8_000;

/// Default RNG seed for reproducible runs.
pub const DEFAULT_SEED: u64 = 42;

/// Immutable configuration for a Monte Carlo pricing run.
///
/// Construct with [`McConfig::default`] and override individual fields
/// through the `with_*` builders:
///
/// ```
/// use tenor_analytics::McConfig;
///
/// let config = McConfig::default().with_seed(7).with_antithetic(false);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.batch_size, 8_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct McConfig {
    /// Paths per batch. Draws are generated batch-wise so the per-batch
    /// random substreams stay deterministic regardless of total path count.
    pub batch_size: usize,
    /// Pair each draw `Z` with its negation `-Z`. Halves the number of
    /// fresh draws per batch and reduces estimator variance.
    pub antithetic: bool,
    /// Base seed for the random number generator.
    pub seed: u64,
    /// Use the array-at-a-time evaluation path. Produces bit-identical
    /// results to the scalar path.
    pub vectorized: bool,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            antithetic: true,
            seed: DEFAULT_SEED,
            vectorized: true,
        }
    }
}

impl McConfig {
    /// Sets the paths per batch.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enables or disables antithetic variance reduction.
    #[must_use]
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the base RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects the vectorized or scalar evaluation path.
    #[must_use]
    pub fn with_vectorized(mut self, vectorized: bool) -> Self {
        self.vectorized = vectorized;
        self
    }
}
