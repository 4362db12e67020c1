//! `docs-theme`: the documentation theme integration.

use super::{PluginHandle, parse_options};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

pub const KIND: &str = "docs-theme";

const EXTENSIONS: &[&str] = &["md", "mdx"];

/// Theme options.
///
/// ```toml
/// [integrations.options]
/// custom_css = ["styles/custom.css"]
/// last_updated = true
/// table_of_contents = { min_heading_level = 2, max_heading_level = 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOptions {
    /// Extra stylesheets, relative to the site root.
    pub custom_css: Vec<String>,

    /// Show the "last updated" date in page footers.
    pub last_updated: bool,

    /// Show previous/next links.
    pub pagination: bool,

    pub table_of_contents: TocOptions,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            custom_css: Vec::new(),
            last_updated: false,
            pagination: true,
            table_of_contents: TocOptions::default(),
        }
    }
}

/// Heading levels included in the on-page table of contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocOptions {
    pub min_heading_level: u8,
    pub max_heading_level: u8,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_heading_level: 2,
            max_heading_level: 3,
        }
    }
}

impl ThemeOptions {
    fn validate(&self) -> Result<(), String> {
        let toc = &self.table_of_contents;
        for level in [toc.min_heading_level, toc.max_heading_level] {
            if !(1..=6).contains(&level) {
                return Err(format!("heading level {level} out of range 1..=6"));
            }
        }
        if toc.min_heading_level > toc.max_heading_level {
            return Err(format!(
                "min_heading_level ({}) is greater than max_heading_level ({})",
                toc.min_heading_level, toc.max_heading_level
            ));
        }

        for css in &self.custom_css {
            let path = Path::new(css);
            let escapes = path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
            if css.is_empty() || escapes {
                return Err(format!(
                    "custom_css entry `{css}` must be a path relative to the site root"
                ));
            }
        }
        Ok(())
    }
}

pub fn create(options: &toml::Table) -> Result<PluginHandle, String> {
    let options: ThemeOptions = parse_options(options)?;
    options.validate()?;
    PluginHandle::new(KIND, &options, EXTENSIONS)
}
