use anyhow::Context;
use game_harness_executor::ProcessEngine;
use game_harness_shared::config::HarnessConfig;
use game_harness_trials::{run_trials, Verdict};

use crate::output;

pub fn run(config: &HarnessConfig) -> anyhow::Result<Verdict> {
    println!(
        "Running {} trial(s) of {} with {}...",
        config.repeats,
        config.engine.display(),
        config.config_path().display(),
    );

    let start = std::time::Instant::now();
    let batch = run_trials(ProcessEngine::new(&config.engine), config)
        .context("Batch aborted, no statistics produced")?;
    let elapsed = start.elapsed();
    tracing::info!(
        trials = batch.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "batch finished"
    );

    let verdict = Verdict::evaluate(&batch, f64::from(config.win_threshold));
    output::print_results(&batch, &verdict, elapsed);
    Ok(verdict)
}
