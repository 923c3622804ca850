//! Optional configuration stored in `.todo.toml` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".todo.toml";
/// Data file used when neither config nor `--file` names one.
pub const DEFAULT_DATA_FILE: &str = "todos.json";

/// Todo configuration (TOML). Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    /// Path of the JSON data file. Relative paths resolve against the
    /// working directory.
    pub data_file: PathBuf,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl TodoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must not be empty"));
        }
        Ok(())
    }

    /// Resolve the data file against `root`.
    pub fn data_file_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TodoConfig::default()`.
pub fn load_config(path: &Path) -> Result<TodoConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TodoConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TodoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
