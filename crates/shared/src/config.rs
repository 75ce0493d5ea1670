use std::path::{Path, PathBuf};

// Harness defaults
pub const DEFAULT_ENGINE: &str = "./aicup22";
pub const DEFAULT_REPEATS: u32 = 1;
pub const DEFAULT_WIN_THRESHOLD: u8 = 100;
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const RESULTS_FILE_NAME: &str = "res.json";
pub const WIN_PLACE_CUTOFF: u32 = 3; // place < 3 is a win (top two)

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub engine: PathBuf,
    pub folder: PathBuf,
    pub repeats: u32,
    pub win_threshold: u8,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            engine: PathBuf::from(DEFAULT_ENGINE),
            folder: PathBuf::from("."),
            repeats: DEFAULT_REPEATS,
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

impl HarnessConfig {
    pub fn config_path(&self) -> PathBuf {
        config_path(&self.folder)
    }

    pub fn results_path(&self) -> PathBuf {
        results_path(&self.folder)
    }
}

pub fn config_path(folder: &Path) -> PathBuf {
    folder.join(CONFIG_FILE_NAME)
}

pub fn results_path(folder: &Path) -> PathBuf {
    folder.join(RESULTS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.repeats, 1);
        assert_eq!(config.win_threshold, 100);
        assert_eq!(config.engine, PathBuf::from("./aicup22"));
    }

    #[test]
    fn test_artifact_paths_live_in_folder() {
        let config = HarnessConfig {
            folder: PathBuf::from("runs/smoke"),
            ..HarnessConfig::default()
        };
        assert_eq!(config.config_path(), PathBuf::from("runs/smoke/config.json"));
        assert_eq!(config.results_path(), PathBuf::from("runs/smoke/res.json"));
    }
}
