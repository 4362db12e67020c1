//! `markdoc`: the markup-extension integration, adds `.mdoc` pages.

use super::{PluginHandle, parse_options};
use serde::{Deserialize, Serialize};

pub const KIND: &str = "markdoc";

const EXTENSIONS: &[&str] = &["mdoc"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdocOptions {
    /// Render raw HTML inside markdoc content.
    pub allow_html: bool,

    /// Treat indented lines as paragraphs instead of code blocks.
    pub ignore_indentation: bool,
}

pub fn create(options: &toml::Table) -> Result<PluginHandle, String> {
    let options: MarkdocOptions = parse_options(options)?;
    PluginHandle::new(KIND, &options, EXTENSIONS)
}
