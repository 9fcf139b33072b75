// File: src/config.rs
// Purpose: Configuration parsing from binding.toml

use anyhow::{Context, Result};
use rusty_binding::ItemRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "BINDING_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Bounds for the item rules
    #[serde(default)]
    pub rules: ItemRules,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Insert a couple of sample items on startup
    #[serde(default = "default_true")]
    pub seed_data: bool,
}

/// Message catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessagesConfig {
    /// Catalog merged over the built-in one
    #[serde(default)]
    pub path: Option<String>,

    /// Show the most specific code instead of failing when nothing resolves
    #[serde(default)]
    pub use_code_as_default_message: bool,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            seed_data: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `$BINDING_CONFIG`, falling back to ./binding.toml
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "binding.toml".to_string());
        Self::load(path)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
