//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use sole_commerce::Catalog;

use crate::context::Context;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog file (JSON array of listings).
    pub catalog: String,

    /// Instant to measure release recency from (RFC 3339, default: now).
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog file (JSON array of listings).
    pub catalog: String,

    /// Output HTML file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Page title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Instant to measure release recency from (RFC 3339, default: now).
    #[arg(long)]
    pub now: Option<String>,

    /// Fail on invalid listings instead of skipping them.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default sole.toml in the working directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse the `--now` override, falling back to the current time.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid --now timestamp: {}", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &str, ctx: &Context) -> Result<Catalog> {
    let path = ctx.resolve_path(path);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog = Catalog::from_json(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    ctx.output
        .debug(&format!("Loaded {} listings from {}", catalog.len(), path.display()));
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_now() {
        let now = parse_now(Some("2024-06-01T14:00:00+02:00")).unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        assert!(parse_now(Some("yesterday")).is_err());
    }
}
