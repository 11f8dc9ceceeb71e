//! The search driver: orchestrates one full sweep.
//!
//! [`Driver::optimize`] pulls assignments from a
//! [`Strategy`](crate::strategy::Strategy), invokes the evaluation
//! callback one assignment at a time, persists the full history after
//! every evaluation, refreshes the progress report from the reloaded
//! history, and returns the best result found.
//!
//! Configuration ([`RunConfig`]) is immutable and separate from the
//! per-run mutable state, so one driver can be reused for several
//! sweeps without state leaking between them.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::{Outcome, Record};
use crate::report::{HtmlReporter, Reporter};
use crate::space::{Assignment, SearchSpace};
use crate::store::{CsvStore, ResultStore};
use crate::strategy::Strategy;

/// Immutable configuration for a sweep: where the history and report are
/// written, and whether to print per-assignment progress.
///
/// # Examples
///
/// ```
/// use paramsweep::RunConfig;
///
/// let config = RunConfig::builder()
///     .report_dir("reports/my_sweep")
///     .report_filename("results.csv")
///     .report_plot_filename("progress.html")
///     .verbose(true)
///     .build();
///
/// assert!(config.history_path().ends_with("results.csv"));
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    report_dir: PathBuf,
    report_filename: String,
    report_plot_filename: String,
    verbose: bool,
}

impl RunConfig {
    /// Returns a builder with the default settings.
    ///
    /// Defaults: `report_dir` is `reports/hpo_<unix-timestamp>`,
    /// `report_filename` is `hpo_results.csv`, `report_plot_filename`
    /// is `hpo_results.html`, and `verbose` is off.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Where the durable run history is written.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.report_dir.join(&self.report_filename)
    }

    /// Where the progress artifact is written.
    #[must_use]
    pub fn plot_path(&self) -> PathBuf {
        self.report_dir.join(&self.report_plot_filename)
    }

    /// Whether per-assignment progress is printed to stdout.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for a [`RunConfig`].
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    report_dir: Option<PathBuf>,
    report_filename: Option<String>,
    report_plot_filename: Option<String>,
    verbose: bool,
}

impl RunConfigBuilder {
    /// Creates a builder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the history and report are written into.
    #[must_use]
    pub fn report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Sets the history file name within the report directory.
    #[must_use]
    pub fn report_filename(mut self, name: impl Into<String>) -> Self {
        self.report_filename = Some(name.into());
        self
    }

    /// Sets the progress artifact file name within the report directory.
    #[must_use]
    pub fn report_plot_filename(mut self, name: impl Into<String>) -> Self {
        self.report_plot_filename = Some(name.into());
        self
    }

    /// Enables or disables per-assignment progress printing.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the configured [`RunConfig`].
    #[must_use]
    pub fn build(self) -> RunConfig {
        let report_dir = self.report_dir.unwrap_or_else(|| {
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs());
            PathBuf::from("reports").join(format!("hpo_{stamp}"))
        });
        RunConfig {
            report_dir,
            report_filename: self
                .report_filename
                .unwrap_or_else(|| "hpo_results.csv".to_string()),
            report_plot_filename: self
                .report_plot_filename
                .unwrap_or_else(|| "hpo_results.html".to_string()),
            verbose: self.verbose,
        }
    }
}

/// Mutable state of one `optimize` call. Created fresh per run.
struct RunState {
    best_error: f64,
    best_assignment: Option<Assignment>,
    history: Vec<Record>,
}

impl RunState {
    fn new() -> Self {
        Self {
            best_error: f64::INFINITY,
            best_assignment: None,
            history: Vec::new(),
        }
    }
}

/// Drives a sweep: evaluation, bookkeeping, persistence, and reporting.
///
/// The driver owns its [`ResultStore`] and [`Reporter`] collaborators and
/// the store's backing location for the duration of a run; no concurrent
/// writer is assumed.
///
/// # Examples
///
/// Durable sweep with the default CSV store and HTML reporter:
///
/// ```no_run
/// use paramsweep::strategy::GridStrategy;
/// use paramsweep::{Driver, RunConfig, SearchSpace};
/// use serde_json::json;
///
/// let space = SearchSpace::new()
///     .param("x", [json!(0.0), json!(0.5), json!(1.0)])
///     .param("y", [json!(0.0), json!(0.5), json!(1.0)]);
///
/// let driver = Driver::new(RunConfig::builder().verbose(true).build());
/// let outcome = driver
///     .optimize(&GridStrategy::new(), &space, |a| {
///         let x = a["x"].as_f64().unwrap_or(0.0);
///         let y = a["y"].as_f64().unwrap_or(0.0);
///         Ok::<_, paramsweep::Error>((x + y, json!(null)))
///     })
///     .unwrap();
///
/// println!("best error {} at {:?}", outcome.best_error, outcome.best_assignment);
/// ```
///
/// In-memory sweep, nothing written to disk:
///
/// ```
/// use paramsweep::report::NullReporter;
/// use paramsweep::store::MemoryStore;
/// use paramsweep::strategy::GridStrategy;
/// use paramsweep::{Driver, RunConfig, SearchSpace};
/// use serde_json::json;
///
/// let space = SearchSpace::new().param("x", [json!(1), json!(2)]);
/// let driver = Driver::with_store_and_reporter(
///     RunConfig::default(),
///     MemoryStore::new(),
///     NullReporter,
/// );
///
/// let outcome = driver
///     .optimize(&GridStrategy::new(), &space, |a| {
///         let x = a["x"].as_f64().unwrap_or(0.0);
///         Ok::<_, paramsweep::Error>((x * x, json!(null)))
///     })
///     .unwrap();
///
/// assert_eq!(outcome.best_error, 1.0);
/// assert_eq!(outcome.n_evaluated, 2);
/// ```
pub struct Driver {
    config: RunConfig,
    store: Box<dyn ResultStore>,
    reporter: Box<dyn Reporter>,
}

impl Driver {
    /// Creates a driver that persists to a CSV file and renders an HTML
    /// progress chart at the configured paths.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let store = CsvStore::new(config.history_path());
        Self {
            config,
            store: Box::new(store),
            reporter: Box::new(HtmlReporter::new()),
        }
    }

    /// Creates a driver with custom store and reporter collaborators.
    ///
    /// This is the most general constructor; [`new`](Self::new) delegates
    /// the default choices to it in spirit. Note that only
    /// [`CsvStore`](crate::store::CsvStore) creates the report directory;
    /// a custom reporter writing into a directory that nothing else
    /// creates must handle that itself.
    #[must_use]
    pub fn with_store_and_reporter(
        config: RunConfig,
        store: impl ResultStore + 'static,
        reporter: impl Reporter + 'static,
    ) -> Self {
        Self {
            config,
            store: Box::new(store),
            reporter: Box::new(reporter),
        }
    }

    /// Returns the driver's run configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs one full sweep and returns the best result found.
    ///
    /// Assignments are visited strictly one at a time, in the order the
    /// strategy produces them. Per visited assignment:
    ///
    /// 1. `evaluate` is invoked — synchronous, arbitrarily expensive, no
    ///    timeout;
    /// 2. the resulting [`Record`] is appended to the in-memory history;
    /// 3. the **full** history is persisted (overwrite, not append — the
    ///    store stays consistent even if the process dies mid-run);
    /// 4. the history is reloaded from the store and handed to the
    ///    reporter, so the report reflects exactly what is on disk;
    /// 5. the best-so-far state is updated on strict improvement; ties
    ///    keep the earliest-found assignment.
    ///
    /// An empty enumeration performs no evaluations and no store writes,
    /// and returns the [`f64::INFINITY`] sentinel with no assignment.
    ///
    /// # Errors
    ///
    /// * [`EmptyCandidates`](Error::EmptyCandidates) — the space is
    ///   malformed.
    /// * [`Evaluation`](Error::Evaluation) — the callback failed; the run
    ///   aborts with no partial record for that assignment.
    /// * [`Storage`](Error::Storage) / [`Report`](Error::Report) — a
    ///   collaborator failed; the run aborts rather than continue with an
    ///   unpersisted or stale history. Whatever was persisted before the
    ///   failure remains on disk.
    pub fn optimize<F, E>(
        &self,
        strategy: &dyn Strategy,
        space: &SearchSpace,
        mut evaluate: F,
    ) -> Result<Outcome>
    where
        F: FnMut(&Assignment) -> core::result::Result<(f64, Value), E>,
        E: ToString,
    {
        let assignments = strategy.enumerate(space)?;

        if self.config.verbose {
            println!(
                "\nThis is going to take a while.\n\
                 \x20   You can check on the best-so-far solution at any time in\n\
                 \x20   {}\n\
                 \x20   The full results log is maintained in\n\
                 \x20   {}\n",
                self.config.plot_path().display(),
                self.config.history_path().display(),
            );
        }
        trace_info!(n_assignments = assignments.len(), "sweep started");

        let mut state = RunState::new();
        let mut history_path = self.config.history_path();
        let plot_path = self.config.plot_path();

        for assignment in assignments {
            if self.config.verbose {
                let shown = serde_json::to_string(&assignment).unwrap_or_default();
                println!("    Evaluating {shown}");
            }

            let (error, info) =
                evaluate(&assignment).map_err(|e| Error::Evaluation(e.to_string()))?;
            trace_debug!(error, "assignment evaluated");

            state.history.push(Record::new(assignment, error, info));
            history_path = self.store.write_all(&state.history)?;

            let reloaded = self.store.read_all()?;
            self.reporter.render(&reloaded, &plot_path)?;

            if error < state.best_error {
                state.best_error = error;
                state.best_assignment = state.history.last().map(|r| r.params.clone());
                trace_info!(best_error = state.best_error, "new best assignment");
            }
        }

        Ok(Outcome {
            best_error: state.best_error,
            best_assignment: state.best_assignment,
            n_evaluated: state.history.len(),
            history_path,
        })
    }
}
