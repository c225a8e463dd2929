//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::storage::{CsvStore, MatchStore, SampleStore};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Where match records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Re-read the data file on every request
    #[default]
    Csv,
    /// Generate fresh random matches on every request
    Sample,
}

/// Match data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub source: DataSource,

    /// CSV file read by the csv source and written by uploads
    #[serde(default = "default_data_file")]
    pub file: PathBuf,

    /// Matches produced per request by the sample source
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/matches.csv")
}

fn default_sample_size() -> usize {
    30
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            file: default_data_file(),
            sample_size: default_sample_size(),
        }
    }
}

impl DataConfig {
    /// Build the store this configuration describes.
    pub fn open_store(&self) -> Arc<dyn MatchStore> {
        match self.source {
            DataSource::Csv => Arc::new(CsvStore::new(self.file.clone())),
            DataSource::Sample => Arc::new(SampleStore::new(self.sample_size)),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Front-end assets served outside `/api`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./frontend")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            static_dir: default_static_dir(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.data.source == DataSource::Sample && self.data.sample_size == 0 {
            return Err(ConfigError::ValidationError(
                "Sample size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
