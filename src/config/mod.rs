//! Configuration management.
//!
//! All values are read once at startup and passed into components at
//! construction; nothing here is mutated afterwards.
//!
//! # Configuration File Format
//!
//! ```toml
//! [scraping]
//! user_agent = "Mozilla/5.0 ..."
//! skip_domains = ["go.gale.com"]
//! skip_placeholder = "[PDF Document - Content available but text extraction is limited]"
//!
//! [processing]
//! timeout_secs = 30
//! request_delay_secs = 1
//! min_content_length = 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Outbound request settings
    #[serde(default)]
    pub scraping: ScrapingConfig,

    /// Pipeline settings
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Outbound request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapingConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Domains that are never fetched; matching URLs get the placeholder
    #[serde(default = "default_skip_domains")]
    pub skip_domains: Vec<String>,

    /// Text returned in place of content for skipped domains
    #[serde(default = "default_skip_placeholder")]
    pub skip_placeholder: String,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            skip_domains: default_skip_domains(),
            skip_placeholder: default_skip_placeholder(),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Politeness delay between successive URLs in a batch, in seconds
    #[serde(default = "default_request_delay_secs")]
    pub request_delay_secs: u64,

    /// Minimum character count an extraction must reach to be accepted
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            request_delay_secs: default_request_delay_secs(),
            min_content_length: default_min_content_length(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_skip_domains() -> Vec<String> {
    vec!["go.gale.com".to_string()]
}

fn default_skip_placeholder() -> String {
    "[PDF Document - Content available but text extraction is limited]".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_request_delay_secs() -> u64 {
    1
}

fn default_min_content_length() -> usize {
    100
}

impl TriageConfig {
    /// Write the configuration as TOML, e.g. to seed an editable file
    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Load configuration from a file, with `CONTENT_TRIAGE_*` environment
/// variable overrides
pub fn load_config(path: &PathBuf) -> Result<TriageConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("CONTENT_TRIAGE").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the conventional locations
pub fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("content-triage.toml"),
        PathBuf::from(".content-triage.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
}
