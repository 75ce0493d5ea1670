use std::path::{Path, PathBuf};

use game_harness_executor::{parse_result_file, Engine, EngineError, MalformedResultError};
use game_harness_shared::config::{self, HarnessConfig};
use game_harness_shared::result::{TrialBatch, TrialOutcome};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Trial {trial}: engine could not be run")]
    Engine {
        trial: u32,
        #[source]
        source: EngineError,
    },
    #[error("Trial {trial}: failed to remove previous results at {}", path.display())]
    ClearResults {
        trial: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Trial {trial}: engine produced no usable result")]
    Result {
        trial: u32,
        #[source]
        source: MalformedResultError,
    },
}

impl RunError {
    /// 1-based index of the trial that aborted the batch.
    pub fn trial(&self) -> u32 {
        match self {
            RunError::Engine { trial, .. }
            | RunError::ClearResults { trial, .. }
            | RunError::Result { trial, .. } => *trial,
        }
    }
}

/// Plays trials one after another against a single config, reusing one results slot.
pub struct TrialRunner<E> {
    engine: E,
    config_path: PathBuf,
    results_path: PathBuf,
}

impl<E: Engine> TrialRunner<E> {
    pub fn new(engine: E, folder: &Path) -> Self {
        Self {
            engine,
            config_path: config::config_path(folder),
            results_path: config::results_path(folder),
        }
    }

    /// Run `repeats` trials in order. The first trial without a usable result aborts the batch.
    pub fn run(&mut self, repeats: u32) -> Result<TrialBatch, RunError> {
        let mut outcomes = Vec::new();
        for trial in 1..=repeats {
            outcomes.push(self.run_trial(trial, repeats)?);
        }
        Ok(TrialBatch::from_outcomes(outcomes))
    }

    fn run_trial(&mut self, trial: u32, repeats: u32) -> Result<TrialOutcome, RunError> {
        info!(trial, repeats, "starting trial");

        // A leftover file from the previous trial must never be read as this one's result.
        clear_results(&self.results_path).map_err(|source| RunError::ClearResults {
            trial,
            path: self.results_path.clone(),
            source,
        })?;

        let exit = self
            .engine
            .play(&self.config_path, &self.results_path)
            .map_err(|source| RunError::Engine { trial, source })?;
        if !exit.success() {
            warn!(trial, code = ?exit.code, "engine exited with failure status");
        }

        let outcome = parse_result_file(&self.results_path)
            .map_err(|source| RunError::Result { trial, source })?;
        debug!(
            trial,
            place = outcome.place,
            score = outcome.score,
            crashed = outcome.crashed,
            seed = %outcome.seed,
            "trial finished"
        );
        Ok(outcome)
    }
}

fn clear_results(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

pub fn run_trials<E: Engine>(engine: E, config: &HarnessConfig) -> Result<TrialBatch, RunError> {
    TrialRunner::new(engine, &config.folder).run(config.repeats)
}
