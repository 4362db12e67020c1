//! sarabi-docs - documentation site descriptor tool.
//!
//! Validates `docs.toml`, resolves its sidebar against the content tree,
//! and exports the result for the site tool.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod nav;
mod plugin;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::init::InitMode;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => {
            let cwd = std::env::current_dir()?;
            let (root, mode) = match name {
                Some(name) => (cwd.join(name), InitMode::NewDir),
                None => (cwd, InitMode::CurrentDir),
            };
            cli::init::new_site(&root, mode, *dry)
        }
        Commands::Check => cli::check::run_check(&cli),
        Commands::Nav { args } => cli::nav::run_nav(&cli, args),
        Commands::Export { args } => cli::export::run_export(&cli, args),
    }
}
