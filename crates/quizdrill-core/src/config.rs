//! Trainer configuration.
//!
//! Working paths are explicit configuration handed to the loader and the
//! store at construction; nothing in the core reads ambient globals.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Question bank JSON file.
    #[serde(default = "default_bank_path")]
    pub bank_path: PathBuf,
    /// Directory completed attempts are stored in.
    #[serde(default = "default_exams_dir")]
    pub exams_dir: PathBuf,
    /// Where the CSV statistics export is written.
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

fn default_bank_path() -> PathBuf {
    PathBuf::from("data.json")
}
fn default_exams_dir() -> PathBuf {
    PathBuf::from("exams")
}
fn default_export_path() -> PathBuf {
    PathBuf::from("statistics.csv")
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            bank_path: default_bank_path(),
            exams_dir: default_exams_dir(),
            export_path: default_export_path(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdrill.toml` in the current directory
/// 2. `~/.config/quizdrill/config.toml`
pub fn load_config() -> Result<TrainerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TrainerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global) = global_config_path() {
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(TrainerConfig::default()),
    }
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdrill").join("config.toml"))
}
