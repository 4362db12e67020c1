//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site descriptor tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Descriptor file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docs.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Content root override (relative to the descriptor, `~` is expanded)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a starter descriptor and content directories
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the descriptor template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the descriptor and everything it references
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved sidebar navigation
    #[command(visible_alias = "n")]
    Nav {
        #[command(flatten)]
        args: NavArgs,
    },

    /// Write the validated descriptor as JSON for the site tool
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Nav command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NavArgs {
    /// Include draft pages
    #[arg(short, long)]
    pub drafts: bool,

    /// Output JSON instead of a tree
    #[arg(short, long)]
    pub json: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
