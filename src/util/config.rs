use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::fuzzy::Notation;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormatConfig {
    #[serde(default)]
    pub notation: Notation,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/timelapsed/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/timelapsed/config.toml"));
        }

        // 2. Platform-specific path from `directories`
        if let Some(proj_dirs) = ProjectDirs::from("", "", "timelapsed") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), notation = %config.format.notation, "Loaded config");
        Ok(config)
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "timelapsed") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/timelapsed/logs")
    }
}
