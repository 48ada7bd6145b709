// File: src/config.rs
// Purpose: Form layout and behaviour parsing from auth-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "auth-forms.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_login")]
    pub login: FormConfig,

    #[serde(default = "default_registration")]
    pub registration: FormConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Input ids of one form, in document order
///
/// Ids the rule catalog does not know (e.g. "remember") are tracked but never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Revalidate a field on every input once the form has been submitted
    #[serde(default = "default_true")]
    pub live_revalidation: bool,

    /// Clear the target form when switching between login and registration
    #[serde(default = "default_true")]
    pub reset_on_switch: bool,
}

fn default_login() -> FormConfig {
    FormConfig {
        fields: vec!["username".to_string(), "password".to_string()],
    }
}

fn default_registration() -> FormConfig {
    FormConfig {
        fields: vec![
            "username".to_string(),
            "email".to_string(),
            "password".to_string(),
        ],
    }
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login: default_login(),
            registration: default_registration(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            live_revalidation: true,
            reset_on_switch: true,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = toml::from_str(content).context("Failed to parse form config")?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if it is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "no form config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))?;

        tracing::info!(?path, "loaded form config");
        Ok(config)
    }

    /// Load configuration from the default path (./auth-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
