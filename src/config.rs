use crate::game::MAX_ATTEMPT_BUDGET;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Persisted defaults applied when the CLI does not override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub word_list: String,
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: "english".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// A hand-edited file must not be able to violate the engine's
    /// constructor contract, so the attempt budget is clamped on load.
    fn sanitized(mut self) -> Self {
        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPT_BUDGET {
            self.max_attempts = DEFAULT_MAX_ATTEMPTS;
        }
        self
    }
}

impl From<&crate::RuntimeSettings> for Config {
    fn from(rs: &crate::RuntimeSettings) -> Self {
        Self {
            word_list: rs.word_list.to_string().to_lowercase(),
            max_attempts: rs.max_attempts,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "gallows") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("gallows_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg.sanitized();
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
