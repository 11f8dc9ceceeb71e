//! Progress reporting.
//!
//! A [`Reporter`] consumes the reloaded run history after every
//! evaluation and produces a human-inspectable artifact, so a
//! long-running sweep can be monitored mid-run.
//!
//! The default [`HtmlReporter`] writes a self-contained HTML file with an
//! embedded [Plotly.js](https://plotly.com/javascript/) chart: error per
//! evaluation plus a best-so-far line. An internet connection is needed
//! on first load to fetch Plotly.js from a CDN.
//!
//! Reporter failures propagate and abort the run, matching the store's
//! no-silent-loss policy. Wrap a reporter that swallows its own errors if
//! advisory-only reporting is wanted.

use core::fmt::Write as _;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Record;

/// Renders the ordered run history into an artifact at `path`.
pub trait Reporter {
    /// Produces the progress artifact for the given history.
    ///
    /// Invoked after every evaluation with the full reloaded history, in
    /// evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`Report`](crate::Error::Report) if the artifact cannot be
    /// produced.
    fn render(&self, records: &[Record], path: &Path) -> Result<()>;
}

/// A reporter that writes a self-contained HTML progress chart.
///
/// # Examples
///
/// ```no_run
/// use paramsweep::report::{HtmlReporter, Reporter};
///
/// let reporter = HtmlReporter::new();
/// reporter.render(&[], "progress.html".as_ref()).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Creates an HTML reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for HtmlReporter {
    fn render(&self, records: &[Record], path: &Path) -> Result<()> {
        let html = build_html(records);
        std::fs::write(path, html).map_err(|e| Error::Report(e.to_string()))
    }
}

/// A reporter that does nothing.
///
/// Useful for tests and headless sweeps where only the durable history
/// matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn render(&self, _records: &[Record], _path: &Path) -> Result<()> {
        Ok(())
    }
}

fn build_html(records: &[Record]) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sweep Progress</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
</style>
</head>
<body>
<h1>Sweep Progress</h1>
<p class="subtitle">{n} evaluations</p>
"#,
        n = records.len(),
    );

    html.push_str("<div class=\"chart\"><div id=\"history\"></div></div>\n");
    write_history_chart(&mut html, records);

    html.push_str("</body>\n</html>\n");
    html
}

/// Error per evaluation with a best-so-far line.
fn write_history_chart(html: &mut String, records: &[Record]) {
    let mut indices = Vec::with_capacity(records.len());
    let mut errors = Vec::with_capacity(records.len());
    let mut best_so_far = Vec::with_capacity(records.len());
    let mut best = f64::INFINITY;
    let mut hover = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        indices.push(i);
        errors.push(record.error);
        best = best.min(record.error);
        best_so_far.push(best);
        hover.push(
            serde_json::to_string(&record.params)
                .unwrap_or_default()
                .replace('"', "'"),
        );
    }

    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot('history', [
  {{ x: {indices:?}, y: {errors:?}, mode: 'markers', name: 'error',
     text: {hover:?}, marker: {{ color: '#3498db', size: 7 }} }},
  {{ x: {indices:?}, y: {best_so_far:?}, mode: 'lines', name: 'best so far',
     line: {{ color: '#e74c3c', width: 2 }} }}
], {{
  xaxis: {{ title: 'evaluation' }},
  yaxis: {{ title: 'error' }},
  margin: {{ t: 16 }}
}});
</script>
"#,
    );
}
