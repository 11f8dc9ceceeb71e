//! Ordered (grid) enumeration strategy.

use crate::error::Result;
use crate::space::{Assignment, SearchSpace};
use crate::strategy::{apply_cap, Strategy};

/// Visits the cartesian product in the expander's deterministic order.
///
/// The order is lexicographic by parameter declaration order, then by
/// value order within each parameter. An optional `max_iterations` cap
/// limits the sweep to a prefix of that ordering.
///
/// # Examples
///
/// ```
/// use paramsweep::strategy::GridStrategy;
///
/// // Exhaustive sweep
/// let strategy = GridStrategy::new();
///
/// // Visit at most 100 assignments
/// let strategy = GridStrategy::builder().max_iterations(100).build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridStrategy {
    max_iterations: Option<usize>,
}

impl GridStrategy {
    /// Creates an exhaustive grid strategy with no iteration cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_iterations: None,
        }
    }

    /// Returns a builder for configuring a `GridStrategy`.
    #[must_use]
    pub fn builder() -> GridStrategyBuilder {
        GridStrategyBuilder::new()
    }
}

impl Strategy for GridStrategy {
    fn enumerate(&self, space: &SearchSpace) -> Result<Vec<Assignment>> {
        Ok(apply_cap(space.expand()?, self.max_iterations))
    }
}

/// Builder for configuring a [`GridStrategy`].
#[derive(Clone, Debug, Default)]
pub struct GridStrategyBuilder {
    max_iterations: Option<usize>,
}

impl GridStrategyBuilder {
    /// Creates a builder with no iteration cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the sweep at `n` assignments.
    ///
    /// A cap of zero yields an empty sweep; a cap exceeding the space's
    /// cardinality is effectively clamped to the cardinality.
    #[must_use]
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Builds the configured [`GridStrategy`].
    #[must_use]
    pub fn build(self) -> GridStrategy {
        GridStrategy {
            max_iterations: self.max_iterations,
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
            .param("y", [json!("a"), json!("b")])
    }

    #[test]
    fn test_visits_full_product_exactly_once() {
        let strategy = GridStrategy::new();
        let visited = strategy.enumerate(&space()).unwrap();
        assert_eq!(visited.len(), 6);

        let unique: BTreeSet<String> = visited
            .iter()
            .map(|a| serde_json::to_string(a).unwrap())
            .collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_order_is_deterministic() {
        let strategy = GridStrategy::new();
        let first = strategy.enumerate(&space()).unwrap();
        let second = strategy.enumerate(&space()).unwrap();
        assert_eq!(first, second);

        // Last-declared parameter varies fastest.
        assert_eq!(first[0]["x"], json!(0));
        assert_eq!(first[0]["y"], json!("a"));
        assert_eq!(first[1]["x"], json!(0));
        assert_eq!(first[1]["y"], json!("b"));
        assert_eq!(first[2]["x"], json!(1));
    }

    #[test]
    fn test_cap_limits_to_prefix() {
        let full = GridStrategy::new().enumerate(&space()).unwrap();
        let capped = GridStrategy::builder()
            .max_iterations(4)
            .build()
            .enumerate(&space())
            .unwrap();
        assert_eq!(capped, full[..4]);
    }

    #[test]
    fn test_cap_zero_yields_empty() {
        let visited = GridStrategy::builder()
            .max_iterations(0)
            .build()
            .enumerate(&space())
            .unwrap();
        assert!(visited.is_empty());
    }

    #[test]
    fn test_cap_exceeding_size_is_clamped() {
        let visited = GridStrategy::builder()
            .max_iterations(1000)
            .build()
            .enumerate(&space())
            .unwrap();
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn test_empty_candidate_list_fails() {
        let broken = SearchSpace::new().param("x", []);
        assert!(GridStrategy::new().enumerate(&broken).is_err());
    }
}
