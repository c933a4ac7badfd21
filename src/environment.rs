// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub gateway_url: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration based on environment. Falls back to built-in
    /// defaults when no config.yaml is present; the API credential always
    /// comes from the process environment, never from the file.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using built-in defaults");
            return Ok(Self::default());
        }

        Self::load_from_file(&config_path, &environment)
    }

    fn get_environment() -> String {
        std::env::var("CVSCOPE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(config_path: &PathBuf, environment: &str) -> Result<Self> {
        let config_content =
            std::fs::read_to_string(config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }
}
