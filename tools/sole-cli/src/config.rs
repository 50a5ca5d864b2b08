//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sole_commerce::CardConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Settings handed to every card.
    #[serde(default)]
    pub card: CardConfig,

    /// Page rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Page rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title and heading.
    #[serde(default = "default_title")]
    pub title: String,

    /// Fail instead of skipping listings that do not validate.
    #[serde(default)]
    pub strict: bool,
}

fn default_title() -> String {
    "Sneakers".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            strict: false,
        }
    }
}

/// Generate a default sole.toml config file.
pub fn generate_default_config() -> String {
    r#"# Sole catalog configuration

[card]
# Detail links are built as {route_prefix}/{slug}
route_prefix = "/shoe"
# How long after release a shoe shows the "Just released!" flag (seconds)
recency_window_secs = 2629800
currency = "USD"

[render]
title = "Sneakers"
strict = false
"#
    .to_string()
}
