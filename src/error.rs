#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a parameter in the search space has no candidate values.
    #[error("parameter '{name}' has an empty candidate list")]
    EmptyCandidates {
        /// The name of the offending parameter.
        name: String,
    },

    /// Returned when the evaluation callback fails for an assignment.
    ///
    /// The failure aborts the run; no partial record is written for the
    /// assignment that failed.
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    /// Returned when the result store cannot write or read the run history.
    #[error("storage error: {0}")]
    Storage(String),

    /// Returned when the progress reporter cannot render its artifact.
    #[error("report error: {0}")]
    Report(String),
}

pub type Result<T> = core::result::Result<T, Error>;
