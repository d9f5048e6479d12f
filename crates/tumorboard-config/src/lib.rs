//! Configuration loading for Tumorboard.
//! Reads tumorboard.toml from the current directory or the path in TUMORBOARD_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "TUMORBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tumorboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub literature: LiteratureConfig,
    #[serde(default)]
    pub recommender: RecommenderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteratureConfig {
    #[serde(default = "default_esummary_url")]
    pub esummary_url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub extra_allowed_domains: Vec<String>,
}

fn default_esummary_url() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi".to_string()
}
fn default_timeout_secs() -> u64 { 30 }

impl Default for LiteratureConfig {
    fn default() -> Self {
        Self {
            esummary_url: default_esummary_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            extra_allowed_domains: Vec::new(),
        }
    }
}

/// Identity stamped into modification entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default = "default_credentials")]
    pub credentials: String,
}

fn default_credentials() -> String { "anonymous".to_string() }

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self { credentials: default_credentials() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_reference_name_width")]
    pub reference_name_width: usize,
    #[serde(default = "default_free_text_reference_width")]
    pub free_text_reference_width: usize,
}

fn default_reference_name_width()      -> usize { 40 }
fn default_free_text_reference_width() -> usize { 200 }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reference_name_width: default_reference_name_width(),
            free_text_reference_width: default_free_text_reference_width(),
        }
    }
}

mod tests;

impl Config {
    /// Load configuration from tumorboard.toml.
    /// Checks TUMORBOARD_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
