//! Descriptor template generation.
//!
//! Creates `docs.toml` for new sites.

use anyhow::{Context, Result};
use std::fmt::Write;
use std::{fs, path::Path, path::PathBuf};

use crate::config::DEFAULT_CONTENT_DIR;

/// Default descriptor filename
pub const CONFIG_FILE: &str = "docs.toml";

/// Starter sidebar groups: (label, directory under the content root).
pub const STARTER_GROUPS: &[(&str, &str)] = &[
    ("Introduction", "guides/introduction"),
    ("Getting Started", "guides/getting-started"),
    ("Core Concepts", "guides/core-concepts"),
    ("Reference", "reference"),
];

/// Generate `docs.toml` content with comments
pub fn generate_template() -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "# Documentation site descriptor (sarabi-docs v{})\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str("title = \"Documentation\"\n");
    out.push_str("# description = \"\"\n");
    let _ = writeln!(out, "# content_dir = \"{DEFAULT_CONTENT_DIR}\"\n");

    out.push_str("[social]\n");
    out.push_str("github = \"https://github.com/adxgun/sarabi\"\n");

    for (label, directory) in STARTER_GROUPS {
        let _ = write!(
            out,
            "\n[[sidebar]]\nlabel = \"{label}\"\nautogenerate = {{ directory = \"/{directory}\" }}\n"
        );
    }

    out.push_str("\n[[integrations]]\nkind = \"docs-theme\"\n");
    out.push_str("\n[[integrations]]\nkind = \"markdoc\"\n");
    out
}

/// Write `docs.toml` to `root`, returning its path.
pub fn write_template(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_template())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}
