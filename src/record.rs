//! Evaluation records and run outcomes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::space::Assignment;

/// An [`Assignment`] annotated with its evaluation outcome.
///
/// Records are created once per evaluation, never mutated afterwards,
/// and appended to the run's ordered history. Lower `error` is better.
///
/// # Examples
///
/// ```
/// use paramsweep::Record;
/// use serde_json::json;
///
/// let record = Record::new(
///     [("x".to_string(), json!(0.5))].into(),
///     0.25,
///     json!({"epochs": 10}),
/// );
/// assert_eq!(record.error, 0.25);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The evaluated parameter assignment.
    pub params: Assignment,
    /// The scalar error returned by the evaluation callback. Lower is better.
    pub error: f64,
    /// Opaque auxiliary payload returned alongside the error. `Null` when absent.
    #[serde(default)]
    pub info: Value,
}

impl Record {
    /// Creates a record from an assignment and its evaluation outcome.
    #[must_use]
    pub fn new(params: Assignment, error: f64, info: Value) -> Self {
        Self {
            params,
            error,
            info,
        }
    }
}

/// The result of one full sweep.
///
/// When the enumeration produced no assignments, `best_error` is the
/// sentinel [`f64::INFINITY`] and `best_assignment` is `None`.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// The lowest error seen across the run.
    pub best_error: f64,
    /// The assignment that produced `best_error`, if anything was evaluated.
    /// Ties keep the earliest-found assignment.
    pub best_assignment: Option<Assignment>,
    /// The number of assignments evaluated.
    pub n_evaluated: usize,
    /// Where the durable run history was written.
    pub history_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_serde_round_trip() {
        let record = Record::new(
            [
                ("x".to_string(), json!(1.5)),
                ("mode".to_string(), json!("fast")),
            ]
            .into(),
            0.125,
            json!({"note": "ok"}),
        );

        let serialized = serde_json::to_string(&record).unwrap();
        let restored: Record = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_info_defaults_to_null() {
        let restored: Record =
            serde_json::from_str(r#"{"params":{"x":1},"error":0.5}"#).unwrap();
        assert_eq!(restored.info, Value::Null);
    }
}
