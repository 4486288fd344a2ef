//! Runtime configuration
//!
//! Settings come from built-in defaults, an optional JSON file named by
//! `FERRUMKV_CONFIG`, then individual `FERRUMKV_*` variables, later sources
//! overriding earlier ones.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_VAR: &str = "FERRUMKV_CONFIG";

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt printed before each line (empty disables it)
    pub prompt: String,

    /// Initial capacity of the store
    pub initial_capacity: usize,

    /// Default tracing directive, used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "ferrumkv> ".to_string(),
            initial_capacity: 1024,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load a configuration file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Resolve the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(prompt) = lookup("FERRUMKV_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(capacity) = lookup("FERRUMKV_CAPACITY") {
            config.initial_capacity = capacity
                .trim()
                .parse()
                .with_context(|| format!("invalid FERRUMKV_CAPACITY '{}'", capacity))?;
        }

        if let Some(level) = lookup("FERRUMKV_LOG") {
            config.log_level = level;
        }

        Ok(config)
    }
}
