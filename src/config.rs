use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::app_dirs::AppDirs;
use crate::error::QuizError;
use crate::games::Difficulty;

pub const MAX_MATCHING_PAIRS: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub total_rounds: u32,
    pub matching_pairs: usize,
    pub difficulty: Difficulty,
    pub sound: bool,
    pub shake_ms: u64,
    pub match_delay_ms: u64,
    pub mismatch_delay_ms: u64,
    pub celebration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_rounds: 10,
            matching_pairs: 6,
            difficulty: Difficulty::Medium,
            sound: true,
            shake_ms: 500,
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
            celebration_ms: 1500,
        }
    }
}

impl Config {
    /// Pulls out-of-range values back into something playable
    pub fn sanitized(mut self) -> Self {
        if self.total_rounds == 0 {
            warn!("total_rounds of 0 is not playable, using 1");
            self.total_rounds = 1;
        }
        let pairs = self.matching_pairs.clamp(2, MAX_MATCHING_PAIRS);
        if pairs != self.matching_pairs {
            warn!(requested = self.matching_pairs, using = pairs, "matching_pairs out of range");
            self.matching_pairs = pairs;
        }
        self
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), QuizError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path().unwrap_or_else(|| PathBuf::from("quizling_config.json")),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable settings");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
