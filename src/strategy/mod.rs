//! Enumeration strategies.
//!
//! A [`Strategy`] decides the order (and optionally the cap) in which the
//! assignments of a [`SearchSpace`](crate::SearchSpace) are visited.
//! Strategies are a single capability — "produce the ordered assignment
//! sequence" — so they carry no driver state and are independently
//! testable.
//!
//! # Available strategies
//!
//! | Strategy | Order | Cap |
//! |----------|-------|-----|
//! | [`GridStrategy`] | Deterministic expansion order | optional |
//! | [`ShuffledStrategy`] | Seedable uniform permutation | optional |
//!
//! Both strategies visit every assignment of the full cartesian product
//! exactly once unless a `max_iterations` cap is configured, in which
//! case they visit a prefix of their ordering and stop.

mod grid;
mod shuffled;

pub use grid::{GridStrategy, GridStrategyBuilder};
pub use shuffled::{ShuffledStrategy, ShuffledStrategyBuilder};

use crate::error::Result;
use crate::space::{Assignment, SearchSpace};

/// Decides the visitation order of a search space's assignments.
///
/// Implementations must visit every assignment of the full cartesian
/// product exactly once, unless a cap is configured — then a prefix of
/// the (possibly shuffled) ordering is visited. The cap is fixed at the
/// time [`enumerate`](Strategy::enumerate) is called.
pub trait Strategy {
    /// Produces the ordered sequence of assignments to evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCandidates`](crate::Error::EmptyCandidates) if any
    /// parameter in the space has an empty candidate list.
    fn enumerate(&self, space: &SearchSpace) -> Result<Vec<Assignment>>;
}

/// Truncates an expanded assignment sequence to a configured cap.
///
/// A cap of zero yields an empty sequence; a cap exceeding the sequence
/// length leaves the sequence untouched.
fn apply_cap(mut assignments: Vec<Assignment>, cap: Option<usize>) -> Vec<Assignment> {
    if let Some(cap) = cap {
        assignments.truncate(cap);
    }
    assignments
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn two_by_two() -> SearchSpace {
        SearchSpace::new()
            .param("x", [json!(0), json!(1)])
            .param("y", [json!(0), json!(1)])
    }

    #[test]
    fn test_apply_cap_zero_yields_empty() {
        let assignments = two_by_two().expand().unwrap();
        assert!(apply_cap(assignments, Some(0)).is_empty());
    }

    #[test]
    fn test_apply_cap_clamps_to_length() {
        let assignments = two_by_two().expand().unwrap();
        assert_eq!(apply_cap(assignments, Some(100)).len(), 4);
    }

    #[test]
    fn test_apply_cap_none_keeps_all() {
        let assignments = two_by_two().expand().unwrap();
        assert_eq!(apply_cap(assignments, None).len(), 4);
    }
}
