// src/core/config_manager.rs
//! Layered configuration: defaults, optional YAML file, environment, CLI overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_CONFIG_FILE: &str = "resume-builder.yaml";
pub const API_URL_ENV: &str = "RESUME_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub output_dir: PathBuf,
    pub typst_bin: String,
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            output_dir: PathBuf::from("out"),
            typst_bin: "typst".to_string(),
            timeout: None,
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    output_dir: Option<PathBuf>,
    typst_bin: Option<String>,
    timeout_seconds: Option<u64>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration. An explicit `config_path` must exist; the default
    /// file is optional.
    pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        let file = match config_path {
            Some(path) => Some(Self::read_file(path)?),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(Self::read_file(&default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            Self::apply_file(&mut config, file);
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        info!("Backend API: {}", config.api_base_url);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str) -> Result<ConfigFile> {
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_file(config: &mut AppConfig, file: ConfigFile) {
        if let Some(url) = file.api_base_url {
            config.api_base_url = url;
        }
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        if let Some(bin) = file.typst_bin {
            config.typst_bin = bin;
        }
        if let Some(secs) = file.timeout_seconds {
            config.timeout = Some(Duration::from_secs(secs));
        }
    }
}

impl AppConfig {
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }
}
