use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation endpoint config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Artifact storage config
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration of the external translation endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Endpoint URL the orchestrator posts to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum number of concurrent requests per batch
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            concurrent_requests: default_concurrent_requests(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where template artifacts and filled documents are written
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding template artifacts between extract and fill
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory holding filled output documents
    #[serde(default = "default_product_dir")]
    pub product_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            product_dir: default_product_dir(),
        }
    }
}

/// Log level selection persisted in the config file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate filter for this level
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000/translate".to_string()
}

fn default_concurrent_requests() -> usize {
    20
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_product_dir() -> PathBuf {
    PathBuf::from("products")
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.translation.endpoint.is_empty() {
            return Err(anyhow!("Translation endpoint cannot be empty"));
        }

        Url::parse(&self.translation.endpoint)
            .map_err(|e| anyhow!("Invalid translation endpoint URL '{}': {}", self.translation.endpoint, e))?;

        if self.translation.concurrent_requests == 0 {
            return Err(anyhow!("concurrent_requests must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            translation: TranslationConfig::default(),
            storage: StorageConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
