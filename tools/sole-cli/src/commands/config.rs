//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let card = &ctx.config.card;
    ctx.output.info("[card]");
    ctx.output.kv("route_prefix", &card.route_prefix);
    ctx.output
        .kv("recency_window_secs", &card.recency.as_secs().to_string());
    ctx.output.kv("currency", card.currency.code());

    let render = &ctx.config.render;
    ctx.output.info("[render]");
    ctx.output.kv("title", &render.title);
    ctx.output.kv("strict", &render.strict.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = write_default_config(&ctx.cwd, force)?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}

/// Write the default config file into `dir`, refusing to replace an
/// existing one unless `force` is set.
fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_default_config(dir.path(), false).unwrap();
        assert_eq!(path, dir.path().join("sole.toml"));

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.card.route_prefix, "/shoe");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sole.toml");
        fs::write(&path, "[render]\ntitle = \"Mine\"\n").unwrap();

        let err = write_default_config(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[render]\ntitle = \"Mine\"\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sole.toml");
        fs::write(&path, "[render]\ntitle = \"Mine\"\n").unwrap();

        write_default_config(dir.path(), true).unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.render.title, "Sneakers");
    }
}
