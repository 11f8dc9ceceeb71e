#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]

//! Black-box sweep driver for discrete, enumerable hyperparameter spaces.
//!
//! Declare a [`SearchSpace`] of named parameters and their candidate
//! values, supply an evaluation callback mapping an assignment to a
//! scalar error (lower is better) plus auxiliary info, and the
//! [`Driver`] iterates through candidate assignments, records every
//! evaluation, tracks the best result, and persists the full history to
//! durable CSV after every single evaluation — so a long-running sweep
//! can be monitored mid-run and any prefix of it is recoverable after a
//! crash.
//!
//! # Getting Started
//!
//! ```no_run
//! use paramsweep::prelude::*;
//! use serde_json::json;
//!
//! let space = SearchSpace::new()
//!     .param("x", [json!(0), json!(1)])
//!     .param("y", [json!(0), json!(1)]);
//!
//! let driver = Driver::new(RunConfig::builder().verbose(true).build());
//! let outcome = driver
//!     .optimize(&GridStrategy::new(), &space, |a| {
//!         let x = a["x"].as_f64().unwrap_or(0.0);
//!         let y = a["y"].as_f64().unwrap_or(0.0);
//!         Ok::<_, Error>((x + y, json!(null)))
//!     })
//!     .unwrap();
//!
//! assert_eq!(outcome.best_error, 0.0);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`SearchSpace`] | The declared parameters and their candidate values. |
//! | [`strategy::Strategy`] | The policy deciding visitation order — [`GridStrategy`](strategy::GridStrategy) (deterministic) or [`ShuffledStrategy`](strategy::ShuffledStrategy) (seedable permutation), both optionally capped. |
//! | [`Driver`] | The loop orchestrating evaluation, bookkeeping, persistence, and reporting. |
//! | [`Record`] | One assignment annotated with its evaluation outcome. |
//! | [`store::ResultStore`] | Durable tabular backing for the run history. |
//! | [`report::Reporter`] | Renders the history into a human-inspectable artifact. |
//!
//! # Scope
//!
//! The driver is single-threaded and fully synchronous: evaluations run
//! strictly one at a time with no overlap, no timeouts, and no retries.
//! It performs no gradient-based or Bayesian optimization and no
//! parameter type validation. Every failure — evaluation, storage,
//! reporting — surfaces synchronously and aborts the run with the
//! history intact up to the last successful persistence.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key sweep points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod driver;
mod error;
mod record;
pub mod report;
mod space;
pub mod store;
pub mod strategy;

pub use driver::{Driver, RunConfig, RunConfigBuilder};
pub use error::{Error, Result};
pub use record::{Outcome, Record};
pub use space::{Assignment, SearchSpace};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use paramsweep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::driver::{Driver, RunConfig, RunConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::record::{Outcome, Record};
    pub use crate::report::{HtmlReporter, NullReporter, Reporter};
    pub use crate::space::{Assignment, SearchSpace};
    pub use crate::store::{CsvStore, MemoryStore, ResultStore};
    pub use crate::strategy::{GridStrategy, ShuffledStrategy, Strategy};
}
