use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to start engine {}", binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How an engine run ended. `code` is `None` when the process was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineExit {
    pub code: Option<i32>,
}

impl EngineExit {
    pub const SUCCESS: EngineExit = EngineExit { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can play one game from a config file and write its results file.
pub trait Engine {
    fn play(&mut self, config: &Path, results: &Path) -> Result<EngineExit, EngineError>;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn play(&mut self, config: &Path, results: &Path) -> Result<EngineExit, EngineError> {
        (**self).play(config, results)
    }
}

/// The real engine binary, run in batch mode as a child process.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    binary: PathBuf,
}

impl ProcessEngine {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, config: &Path, results: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--batch-mode")
            .arg("--config")
            .arg(config)
            .arg("--save-results")
            .arg(results);
        cmd
    }
}

impl Engine for ProcessEngine {
    fn play(&mut self, config: &Path, results: &Path) -> Result<EngineExit, EngineError> {
        tracing::debug!(
            engine = %self.binary.display(),
            config = %config.display(),
            results = %results.display(),
            "spawning engine"
        );
        // No timeout: a hung engine hangs the harness.
        let status = self
            .command(config, results)
            .status()
            .map_err(|source| EngineError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;
        Ok(EngineExit {
            code: status.code(),
        })
    }
}
