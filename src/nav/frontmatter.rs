//! Page front matter: YAML (`---`) or TOML (`+++`).
//!
//! Only the keys navigation needs are read, everything else is ignored:
//!
//! ```yaml
//! ---
//! title: Installing Sarabi
//! draft: false
//! sidebar:
//!   order: 2
//!   label: Install
//!   hidden: false
//! ---
//! ```

use anyhow::{Result, anyhow};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub draft: bool,
    pub sidebar: SidebarMeta,
}

/// Per-page sidebar overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarMeta {
    /// Lower sorts first; pages without an order come after ordered ones.
    pub order: Option<i64>,
    pub label: Option<String>,
    pub hidden: bool,
}

impl Frontmatter {
    /// Parse front matter from page source. Pages without fences get defaults.
    pub fn parse(content: &str) -> Result<Self> {
        match detect(content) {
            Some((fm, _)) if fm.trim().is_empty() => Ok(Self::default()),
            Some((fm, false)) => {
                serde_yaml::from_str(fm).map_err(|e| anyhow!("invalid YAML front matter: {e}"))
            }
            Some((fm, true)) => {
                toml::from_str(fm).map_err(|e| anyhow!("invalid TOML front matter: {e}"))
            }
            None => Ok(Self::default()),
        }
    }
}

/// Locate the front matter block. Returns `(frontmatter, is_toml)`.
fn detect(content: &str) -> Option<(&str, bool)> {
    // A UTF-8 BOM would otherwise hide the opening fence.
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && rest.starts_with(['\n', '\r'])
        {
            let closing = format!("\n{fence}");
            return rest.find(&closing).map(|end| (&rest[..end], is_toml));
        }
    }
    None
}
