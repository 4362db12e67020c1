//! Helpers shared across CLI commands.

use anyhow::{Context, Result, bail};

use super::Cli;
use crate::config::{SiteConfig, find_config_file};
use crate::debug;
use crate::plugin::PluginRegistry;

/// Locate the descriptor from the current directory and build it.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    let Some(path) = find_config_file(&cli.config, &cwd) else {
        bail!(
            "Descriptor '{}' not found. Run 'sarabi-docs init' to create a new docs site.",
            cli.config.display()
        );
    };
    debug!("config"; "using {}", path.display());

    let registry = PluginRegistry::builtin();
    let config = SiteConfig::load(&path, cli.root.clone(), &registry)?;
    Ok(config)
}
