//! Content directory creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use super::template::STARTER_GROUPS;
use crate::config::DEFAULT_CONTENT_DIR;

/// Create the content directories with one starter page each.
///
/// Returns the number of pages written. The root directory
/// is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<usize> {
    let content_dir = root.join(DEFAULT_CONTENT_DIR);

    for (label, directory) in STARTER_GROUPS {
        let dir = content_dir.join(directory);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

        let page = dir.join("index.md");
        fs::write(&page, starter_page(label))
            .with_context(|| format!("Failed to write '{}'", page.display()))?;
    }

    Ok(STARTER_GROUPS.len())
}

fn starter_page(label: &str) -> String {
    format!("---\ntitle: {label}\n---\n\nWrite the {label} pages here.\n")
}
