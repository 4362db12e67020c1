//! Integrations: tagged plugin specs resolved through an explicit registry.
//!
//! A descriptor lists integrations as `PluginSpec { kind, options }`:
//!
//! ```toml
//! [[integrations]]
//! kind = "docs-theme"
//!
//! [integrations.options]
//! last_updated = true
//!
//! [[integrations]]
//! kind = "markdoc"
//! ```
//!
//! [`PluginRegistry`] maps each `kind` to a factory that validates the
//! options and returns a resolved [`PluginHandle`].

mod markdoc;
mod registry;
mod theme;

pub use registry::PluginRegistry;

use serde::{Deserialize, Serialize};

/// Integration as written in the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub kind: String,

    /// Plugin-defined options, opaque to the descriptor.
    #[serde(default)]
    pub options: toml::Table,
}

impl PluginSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: toml::Table::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}

/// Resolved integration handed to the site tool.
///
/// `options` is the factory's normalized view (defaults filled in).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginHandle {
    pub kind: String,
    pub options: serde_json::Value,

    /// Content file extensions this integration renders.
    #[serde(skip)]
    pub extensions: Vec<&'static str>,
}

impl PluginHandle {
    pub fn new(
        kind: &str,
        options: &impl Serialize,
        extensions: &[&'static str],
    ) -> Result<Self, String> {
        let options = serde_json::to_value(options).map_err(|e| e.to_string())?;
        Ok(Self {
            kind: kind.to_string(),
            options,
            extensions: extensions.to_vec(),
        })
    }
}

/// Deserialize plugin options from the raw table, rejecting unknown keys.
fn parse_options<T: serde::de::DeserializeOwned>(options: &toml::Table) -> Result<T, String> {
    toml::Value::Table(options.clone())
        .try_into()
        .map_err(|e: toml::de::Error| e.message().to_string())
}
