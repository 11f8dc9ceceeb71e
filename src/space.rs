//! Discrete search space definition and expansion.
//!
//! A [`SearchSpace`] maps parameter names to ordered lists of candidate
//! values. Candidates are opaque [`serde_json::Value`]s, so numbers,
//! strings, and arbitrary structured objects can all be swept over.
//!
//! [`SearchSpace::expand`] produces the full cartesian product of
//! assignments in a deterministic order: lexicographic by parameter
//! declaration order, then by value order within each parameter.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// One concrete combination of parameter values, keyed by parameter name.
///
/// Assignments are produced by [`SearchSpace::expand`] and are immutable
/// once created; the driver annotates them with an outcome to form a
/// [`Record`](crate::Record).
pub type Assignment = BTreeMap<String, Value>;

/// A discrete, enumerable search space.
///
/// Parameters are kept in declaration order, which determines the
/// expansion order: the first-declared parameter varies slowest.
///
/// # Examples
///
/// ```
/// use paramsweep::SearchSpace;
/// use serde_json::json;
///
/// let space = SearchSpace::new()
///     .param("learning_rate", [json!(0.001), json!(0.01), json!(0.1)])
///     .param("activation", [json!("relu"), json!("tanh")]);
///
/// assert_eq!(space.len(), 2);
/// assert_eq!(space.cardinality(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchSpace {
    /// Parameter names and their candidates, in declaration order.
    params: Vec<(String, Vec<Value>)>,
}

impl SearchSpace {
    /// Creates an empty search space.
    ///
    /// An empty space expands to exactly one empty assignment (the
    /// cartesian-product identity), so a sweep over it performs a single
    /// evaluation with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a parameter with its ordered candidate values.
    ///
    /// Declaring the same name twice keeps both entries; call sites are
    /// expected to use unique names. Candidate lists may be empty at
    /// build time, but expansion will fail with
    /// [`Error::EmptyCandidates`] for any parameter left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramsweep::SearchSpace;
    /// use serde_json::json;
    ///
    /// let space = SearchSpace::new().param("depth", [json!(2), json!(4), json!(8)]);
    /// assert_eq!(space.cardinality(), 3);
    /// ```
    #[must_use]
    pub fn param(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.params
            .push((name.into(), values.into_iter().collect()));
        self
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameters are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the parameter names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the number of assignments in the full cartesian product.
    ///
    /// The empty space has cardinality 1 (one empty assignment). A
    /// parameter with an empty candidate list yields cardinality 0; such
    /// a space fails [`validate`](Self::validate) anyway.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.params
            .iter()
            .map(|(_, values)| values.len())
            .product()
    }

    /// Checks that every parameter has at least one candidate value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCandidates`] naming the first parameter with
    /// an empty candidate list.
    pub fn validate(&self) -> Result<()> {
        for (name, values) in &self.params {
            if values.is_empty() {
                return Err(Error::EmptyCandidates { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Expands the space into the full cartesian product of assignments.
    ///
    /// The order is deterministic: lexicographic by parameter declaration
    /// order, with the last-declared parameter varying fastest. The empty
    /// space expands to a single empty assignment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCandidates`] if any parameter has an empty
    /// candidate list.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramsweep::SearchSpace;
    /// use serde_json::json;
    ///
    /// let space = SearchSpace::new()
    ///     .param("x", [json!(0), json!(1)])
    ///     .param("y", [json!(0), json!(1)]);
    ///
    /// let assignments = space.expand().unwrap();
    /// assert_eq!(assignments.len(), 4);
    /// assert_eq!(assignments[0]["x"], json!(0));
    /// assert_eq!(assignments[0]["y"], json!(0));
    /// assert_eq!(assignments[1]["y"], json!(1));
    /// ```
    pub fn expand(&self) -> Result<Vec<Assignment>> {
        self.validate()?;

        let mut assignments: Vec<Assignment> = vec![Assignment::new()];
        for (name, values) in &self.params {
            let mut next = Vec::with_capacity(assignments.len() * values.len());
            for partial in &assignments {
                for value in values {
                    let mut assignment = partial.clone();
                    assignment.insert(name.clone(), value.clone());
                    next.push(assignment);
                }
            }
            assignments = next;
        }
        Ok(assignments)
    }
}
