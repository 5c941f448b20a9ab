// src/core/config_manager.rs
//! Configuration for the recommendation service connection

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServiceSection {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ServiceSection,
    #[serde(default)]
    production: ServiceSection,
}

/// Values read from the process environment, collected up front so resolution stays pure
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    api_url: Option<String>,
    timeout_seconds: Option<String>,
}

impl ConfigManager {
    /// Load configuration from `config.yaml` (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(&PathBuf::from(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading service configuration for environment: {}", environment);

        let file = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Some(Self::parse_file(&content)?)
        } else {
            None
        };

        let env = EnvOverrides {
            api_url: std::env::var("RECOMMENDER_API_URL").ok(),
            timeout_seconds: std::env::var("RECOMMENDER_TIMEOUT_SECS").ok(),
        };

        let service = Self::resolve(file.as_ref(), &environment, env)?;
        info!("Recommendation service: {}", service.api_url);

        Ok(Self {
            environment,
            service,
        })
    }

    /// Replace the backend base URL, e.g. from a command-line flag
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.service.api_url = normalize_base_url(&api_url.into());
        self
    }

    fn get_environment() -> String {
        std::env::var("RECOMMENDER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn parse_file(content: &str) -> Result<ConfigFile> {
        serde_yaml::from_str(content).context("Failed to parse config.yaml")
    }

    fn resolve(
        file: Option<&ConfigFile>,
        environment: &str,
        env: EnvOverrides,
    ) -> Result<ServiceConfig> {
        let section = file
            .map(|f| match environment {
                "production" => f.production.clone(),
                _ => f.local.clone(),
            })
            .unwrap_or_default();

        let api_url = env
            .api_url
            .or(section.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // A zero timeout would fail every request before it is sent
        let timeout_seconds = match env.timeout_seconds {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    anyhow::anyhow!("RECOMMENDER_TIMEOUT_SECS must be a positive number of seconds")
                })?,
            None => match section.timeout_seconds {
                Some(0) => anyhow::bail!("timeout_seconds in config.yaml must be positive"),
                Some(secs) => secs,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(ServiceConfig {
            api_url: normalize_base_url(&api_url),
            timeout_seconds,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
