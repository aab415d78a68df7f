use std::sync::OnceLock;
use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const CONFIG_PATH_ENV: &str = "AVCAN_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AprsFiConfig {
    pub api_key: String,

    #[serde(default = "default_aprs_fi_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvcanConfig {
    #[serde(default = "default_avcan_url")]
    pub base_url: String,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    pub aprs_fi: AprsFiConfig,

    #[serde(default)]
    pub avcan: AvcanConfig,
}

fn default_aprs_fi_url() -> String {
    "https://api.aprs.fi".to_string()
}

fn default_avcan_url() -> String {
    "https://api.avalanche.ca".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for AvcanConfig {
    fn default() -> Self {
        Self {
            base_url: default_avcan_url(),
            language: default_language(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {}", path))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: BackendConfig = toml::from_str(content).context("Failed to parse config TOML")?;
        if config.aprs_fi.api_key.trim().is_empty() {
            anyhow::bail!("aprs_fi.api_key must not be empty");
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.avcan.request_timeout_secs)
    }
}

pub static CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Load the configuration file once for the process.
///
/// The path comes from `AVCAN_CONFIG`, falling back to `config.toml`.
pub fn read_config() -> anyhow::Result<&'static BackendConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = BackendConfig::from_file(&path)
        .with_context(|| format!("Failed to load config file {}", path))?;

    Ok(CONFIG.get_or_init(|| config))
}
