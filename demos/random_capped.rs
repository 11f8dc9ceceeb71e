//! Seeded random search with an iteration cap.
//!
//! Sweeps a mixed numeric/categorical space in a reproducible shuffled
//! order, visiting at most 20 of the 48 possible assignments.

use paramsweep::prelude::*;
use serde_json::json;

fn main() -> paramsweep::Result<()> {
    let space = SearchSpace::new()
        .param(
            "learning_rate",
            [json!(0.0001), json!(0.001), json!(0.01), json!(0.1)],
        )
        .param("batch_size", [json!(16), json!(32), json!(64)])
        .param(
            "activation",
            [json!("relu"), json!("tanh"), json!("sigmoid"), json!("gelu")],
        );

    let strategy = ShuffledStrategy::builder().seed(42).max_iterations(20).build();
    let driver = Driver::new(RunConfig::builder().verbose(true).build());

    let outcome = driver.optimize(&strategy, &space, |a| {
        // A synthetic stand-in for a real training run.
        let lr = a["learning_rate"].as_f64().unwrap_or(0.0);
        let batch = a["batch_size"].as_f64().unwrap_or(0.0);
        let activation_bonus = match a["activation"].as_str() {
            Some("relu") => 0.0,
            Some("gelu") => 0.05,
            _ => 0.2,
        };
        let error = (lr.log10() + 2.0).powi(2) + (batch - 32.0).abs() / 64.0 + activation_bonus;
        Ok::<_, Error>((error, json!({"proxy": true})))
    })?;

    println!(
        "Evaluated {} of {} assignments; best error {:.4}",
        outcome.n_evaluated,
        space.cardinality(),
        outcome.best_error
    );
    Ok(())
}
