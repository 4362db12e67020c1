//! Pre-initialization checks on the target directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `init` writes, which decides what counts as a safe target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `sarabi-docs init`: use the current directory
    CurrentDir,
    /// `sarabi-docs init <name>`: create a new subdirectory
    NewDir,
}

/// Refuse targets where `init` could overwrite something.
///
/// - `CurrentDir`: only hidden entries (`.git`, `.editorconfig`) may exist
/// - `NewDir`: path must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if let Some(name) = first_visible_entry(root)? {
                bail!(
                    "Current directory is not empty (found '{name}').\n\
                     Use `sarabi-docs init <name>` to create the site in a new subdirectory."
                );
            }
        }
        InitMode::NewDir if root.exists() => {
            bail!(
                "'{}' already exists.\n\
                 Choose a different name or remove the existing directory.",
                root.display()
            );
        }
        InitMode::NewDir => {}
    }
    Ok(())
}

/// First non-hidden entry of `dir`, if any. A missing dir counts as empty.
fn first_visible_entry(dir: &Path) -> Result<Option<String>> {
    if !dir.exists() {
        return Ok(None);
    }
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names.into_iter().next())
}
