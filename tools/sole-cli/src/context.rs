//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["sole.toml", ".sole.toml", "sole.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded configuration");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest loadable config file, starting at `start` and walking up.
///
/// Files that exist but fail to load are skipped with a warning.
pub fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    for dir in start.ancestors() {
        for name in &CONFIG_NAMES {
            let config_path = dir.join(name);
            if !config_path.exists() {
                continue;
            }
            match CliConfig::load(&config_path) {
                Ok(config) => return Some((config, config_path)),
                Err(e) => tracing::warn!(path = %config_path.display(), "skipping config: {e:#}"),
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("sole.toml"), "[render]\ntitle = \"Root\"\n").unwrap();
        let nested = root.path().join("catalogs").join("spring");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.render.title, "Root");
        assert_eq!(path, root.path().join("sole.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("sole.toml"), "[render]\ntitle = \"Root\"\n").unwrap();
        let child = root.path().join("child");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join(".sole.toml"), "[render]\ntitle = \"Child\"\n").unwrap();

        let (config, _) = find_config(&child).unwrap();
        assert_eq!(config.render.title, "Child");
    }

    #[test]
    fn test_find_config_skips_broken_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("sole.toml"), "[render]\ntitle = \"Root\"\n").unwrap();
        let child = root.path().join("child");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join("sole.toml"), "[render\ntitle = ").unwrap();

        let (config, path) = find_config(&child).unwrap();
        assert_eq!(config.render.title, "Root");
        assert_eq!(path, root.path().join("sole.toml"));
    }
}
