//! Wardrobe configuration.
//!
//! Loaded from `~/.wardrobe/config.toml`. Every key is optional and a
//! missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wardrobe configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Pause before each recommendation, in milliseconds.
    /// Imitates a remote advisor. Zero (the default) means no pause.
    pub delay_ms: u64,

    /// Seed for item selection when `--seed` is not given.
    /// Unset means a fresh random choice every time.
    pub seed: Option<u64>,

    /// Log filter used when `WARDROBE_LOG` is not set, e.g. `"info"`
    /// or `"wardrobe=debug"`.
    pub log: Option<String>,
}

impl Config {
    /// Load config from `~/.wardrobe/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.wardrobe/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".wardrobe").join("config.toml"))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
