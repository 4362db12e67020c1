//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod export;
pub mod init;
pub mod nav;

pub use args::{Cli, Commands, ExportArgs, NavArgs};
