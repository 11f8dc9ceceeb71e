//! Exhaustive grid sweep over a 2-D sinc surface.
//!
//! The error is the negated product of two shifted sinc functions, so
//! the sweep is effectively climbing a mountain centered near
//! `(1.0, 1.5)`. Run with `cargo run --example sinc_surface`, then open
//! the HTML progress chart printed at the end.

use std::f64::consts::PI;

use paramsweep::prelude::*;
use serde_json::json;

fn sinc(v: f64) -> f64 {
    if v.abs() < 1e-12 {
        1.0
    } else {
        (PI * v).sin() / (PI * v)
    }
}

fn linspace(low: f64, high: f64, n: usize) -> Vec<serde_json::Value> {
    (0..n)
        .map(|i| {
            let fraction = i as f64 / (n - 1) as f64;
            json!(low + fraction * (high - low))
        })
        .collect()
}

fn main() -> paramsweep::Result<()> {
    let space = SearchSpace::new()
        .param("x", linspace(0.0, PI, 10))
        .param("y", linspace(0.0, PI, 10));

    let driver = Driver::new(RunConfig::builder().verbose(true).build());
    let outcome = driver.optimize(&GridStrategy::new(), &space, |a| {
        let x = a["x"].as_f64().unwrap_or(0.0);
        let y = a["y"].as_f64().unwrap_or(0.0);
        let error = -sinc(x - 1.0) * sinc(y - 1.5);
        Ok::<_, Error>((error, json!(null)))
    })?;

    println!(
        "All done! The data on each condition evaluated, and its error,\n\
         are stored in {}.",
        outcome.history_path.display()
    );
    println!(
        "Best error {:.6} at {}",
        outcome.best_error,
        serde_json::to_string(&outcome.best_assignment).unwrap_or_default()
    );
    Ok(())
}
