//! # Configuration
//!
//! Settings come from an optional YAML file, then environment variables:
//!
//! ```yaml
//! repository_mode: csv
//! host: 0.0.0.0
//! port: 8080
//! data_file: data.csv
//! ```
//!
//! | Variable           | Field             |
//! |--------------------|-------------------|
//! | `REPOSITORY_MODE`  | `repository_mode` |
//! | `HOST`             | `host`            |
//! | `PORT`             | `port`            |
//! | `DATA_FILE`        | `data_file`       |
//!
//! The YAML file is `$TODO_CONFIG_FILE`, or `todo-backend.yaml` in the working
//! directory. A missing file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_ENV: &str = "TODO_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "todo-backend.yaml";

pub const REPOSITORY_MODE_ENV: &str = "REPOSITORY_MODE";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_FILE_ENV: &str = "DATA_FILE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage backend token, "mem" or "csv"
    pub repository_mode: String,
    pub host: String,
    pub port: u16,
    /// Data file for the CSV backend
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repository_mode: "mem".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_file: PathBuf::from("data.csv"),
        }
    }
}

impl AppConfig {
    /// Load from the config file (if present) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.is_file() {
            Self::from_yaml_file(&path)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        info!(
            "Configuration: mode={}, listen={}:{}, data_file={}",
            config.repository_mode,
            config.host,
            config.port,
            config.data_file.display()
        );
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Apply overrides from `lookup` (the environment, in production).
    /// Unset and empty values leave the current setting alone.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(mode) = value(REPOSITORY_MODE_ENV) {
            self.repository_mode = mode;
        }
        if let Some(host) = value(HOST_ENV) {
            self.host = host;
        }
        if let Some(port) = value(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(data_file) = value(DATA_FILE_ENV) {
            self.data_file = PathBuf::from(data_file);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(address))
    }
}
