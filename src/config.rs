use crate::cli::Cli;
use crate::client::DEFAULT_TIMEOUT;
use crate::format::{DEFAULT_DATE_FORMAT, DEFAULT_FORMATTER};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the optional `--config` TOML file.
///
/// ```toml
/// alertmanager_url = "http://alertmanager:9093"
/// output = "extended"
/// date_format = "%H:%M:%S"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub alertmanager_url: Option<String>,
    pub output: Option<String>,
    pub date_format: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn load_config(path: Option<&Path>) -> Result<CliConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(CliConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<CliConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<CliConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

/// Effective settings: command line and environment first, then the config
/// file, then built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub alertmanager_url: Option<String>,
    pub output: String,
    pub date_format: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            alertmanager_url: cli
                .alertmanager_url
                .clone()
                .or_else(|| config.alertmanager_url.clone()),
            output: cli
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| DEFAULT_FORMATTER.to_string()),
            date_format: cli
                .date_format
                .clone()
                .or_else(|| config.date_format.clone())
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            timeout: cli
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }

    /// The Alertmanager base URL, which every alert command needs
    pub fn require_alertmanager_url(&self) -> Result<Url, crate::Error> {
        let raw = self
            .alertmanager_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(crate::Error::MissingAlertmanagerUrl)?;

        Url::parse(raw.trim()).map_err(|e| crate::Error::InvalidAlertmanagerUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }
}
