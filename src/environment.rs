// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Runtime settings for one environment (`local` or `production`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Base URL of the job-matching API, without trailing slash.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub address: String,
    pub port: u16,
    /// Lifetime of the session cookie.
    pub cookie_max_age_secs: i64,
    pub max_upload_mib: u64,
    /// JSON log output, truncated on startup.
    pub log_file: Option<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            address: "127.0.0.1".to_string(),
            port: 3000,
            cookie_max_age_secs: 86_400,
            max_upload_mib: 10,
            log_file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentConfig,
    #[serde(default)]
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration for the current environment, then apply
    /// environment variable overrides. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config = if path.exists() {
            Self::load_from_file(path, &environment)?
        } else {
            warn!(
                "{} not found, using built-in defaults",
                path.display()
            );
            Self::default()
        };

        config.with_env_overrides()
    }

    pub fn get_environment() -> String {
        std::env::var("HIREARCHY_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var("HIREARCHY_API_URL") {
            self.api_base_url = url;
        }

        if let Ok(port) = std::env::var("ROCKET_PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }

        Ok(self.normalized())
    }

    pub fn with_api_base_url(mut self, url: String) -> Self {
        self.api_base_url = url;
        self.normalized()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self
    }
}
