//! Shuffled (random-permutation) enumeration strategy.

use parking_lot::Mutex;

use crate::error::Result;
use crate::space::{Assignment, SearchSpace};
use crate::strategy::{apply_cap, Strategy};

/// Visits a uniformly random permutation of the full cartesian product.
///
/// The space is expanded fully, shuffled without replacement, and then
/// visited in the shuffled order — optionally truncated to a configured
/// `max_iterations` cap. With a fixed seed the permutation is determined
/// solely by the seed; without one, ordering is not reproducible across
/// runs.
///
/// # Examples
///
/// ```
/// use paramsweep::strategy::ShuffledStrategy;
///
/// // Non-reproducible shuffle
/// let strategy = ShuffledStrategy::new();
///
/// // Reproducible, capped at 50 assignments
/// let strategy = ShuffledStrategy::builder().seed(42).max_iterations(50).build();
/// ```
pub struct ShuffledStrategy {
    max_iterations: Option<usize>,
    rng: Mutex<fastrand::Rng>,
}

impl ShuffledStrategy {
    /// Creates a shuffled strategy with a default random seed and no cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_iterations: None,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a shuffled strategy with a fixed seed for reproducibility.
    ///
    /// The same seed always produces the same visitation order for the
    /// same search space.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            max_iterations: None,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Returns a builder for configuring a `ShuffledStrategy`.
    #[must_use]
    pub fn builder() -> ShuffledStrategyBuilder {
        ShuffledStrategyBuilder::new()
    }
}

impl Default for ShuffledStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ShuffledStrategy {
    fn enumerate(&self, space: &SearchSpace) -> Result<Vec<Assignment>> {
        let mut assignments = space.expand()?;
        self.rng.lock().shuffle(&mut assignments);
        Ok(apply_cap(assignments, self.max_iterations))
    }
}

/// Builder for configuring a [`ShuffledStrategy`].
#[derive(Clone, Debug, Default)]
pub struct ShuffledStrategyBuilder {
    seed: Option<u64>,
    max_iterations: Option<usize>,
}

impl ShuffledStrategyBuilder {
    /// Creates a builder with a default random seed and no cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the shuffle seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the sweep at `n` assignments, taken from the front of the
    /// shuffled permutation.
    #[must_use]
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Builds the configured [`ShuffledStrategy`].
    #[must_use]
    pub fn build(self) -> ShuffledStrategy {
        ShuffledStrategy {
            max_iterations: self.max_iterations,
            rng: Mutex::new(
                self.seed
                    .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use super::*;

    fn space() -> SearchSpace {
        SearchSpace::new()
            .param("x", [json!(0), json!(1), json!(2)])
            .param("y", [json!(0), json!(1), json!(2)])
    }

    fn keys(assignments: &[Assignment]) -> BTreeSet<String> {
        assignments
            .iter()
            .map(|a| serde_json::to_string(a).unwrap())
            .collect()
    }

    #[test]
    fn test_visits_full_product_exactly_once() {
        let strategy = ShuffledStrategy::with_seed(7);
        let visited = strategy.enumerate(&space()).unwrap();
        assert_eq!(visited.len(), 9);
        assert_eq!(keys(&visited).len(), 9);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let first = ShuffledStrategy::with_seed(42).enumerate(&space()).unwrap();
        let second = ShuffledStrategy::with_seed(42).enumerate(&space()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        // With 9! orderings, two seeds colliding would be remarkable.
        let first = ShuffledStrategy::with_seed(1).enumerate(&space()).unwrap();
        let second = ShuffledStrategy::with_seed(2).enumerate(&space()).unwrap();
        assert_ne!(first, second);
        assert_eq!(keys(&first), keys(&second));
    }

    #[test]
    fn test_cap_takes_subset_of_product() {
        let strategy = ShuffledStrategy::builder().seed(9).max_iterations(4).build();
        let visited = strategy.enumerate(&space()).unwrap();
        assert_eq!(visited.len(), 4);

        let full = keys(&space().expand().unwrap());
        assert!(keys(&visited).is_subset(&full));
    }

    #[test]
    fn test_cap_zero_yields_empty() {
        let strategy = ShuffledStrategy::builder().seed(9).max_iterations(0).build();
        assert!(strategy.enumerate(&space()).unwrap().is_empty());
    }

    #[test]
    fn test_cap_exceeding_size_is_clamped() {
        let strategy = ShuffledStrategy::builder()
            .seed(9)
            .max_iterations(10_000)
            .build();
        assert_eq!(strategy.enumerate(&space()).unwrap().len(), 9);
    }

    #[test]
    fn test_empty_candidate_list_fails() {
        let broken = SearchSpace::new().param("x", []);
        assert!(ShuffledStrategy::with_seed(0).enumerate(&broken).is_err());
    }
}
