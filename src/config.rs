use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional settings read from `config.toml` in the platform config
/// directory.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Storage target for the task list, replacing the default in the
    /// platform data directory.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// A missing config file is not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        let Some(proj) = ProjectDirs::from("com", "tasque", "tasque") else {
            return Ok(Self::default());
        };
        let path = proj.config_dir().join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }
}
