//! Documentation site descriptor (`docs.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor sections
//! │   ├── sidebar    # [[sidebar]]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # config discovery, directory normalization
//! └── mod.rs         # SiteDescriptor -> SiteConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! [`SiteDescriptor`] is what the user wrote. [`SiteDescriptor::build`]
//! validates it and produces an immutable [`SiteConfig`], or a
//! [`ConfigError`] listing every problem found. Nothing partial is
//! returned, and there is no global config: callers pass the
//! `SiteConfig` by reference.
//!
//! # Example
//!
//! ```toml
//! title = "Documentation"
//!
//! [social]
//! github = "https://github.com/adxgun/sarabi"
//!
//! [[sidebar]]
//! label = "Introduction"
//! autogenerate = { directory = "/guides/introduction" }
//!
//! [[integrations]]
//! kind = "docs-theme"
//!
//! [[integrations]]
//! kind = "markdoc"
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{
    AutogenerateEntry, SidebarEntry, SidebarGroup, SidebarItem, SidebarSource, SocialLinks,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};
pub use util::find_config_file;

use crate::nav::{collect_page_paths, slug_for};
use crate::plugin::{PluginHandle, PluginRegistry, PluginSpec};
use crate::utils::path::{expand_path, normalize_path};
use crate::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use section::SidebarContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Content root used when the descriptor does not name one.
pub const DEFAULT_CONTENT_DIR: &str = "src/content/docs";

/// Page extensions when no integration contributes any.
const DEFAULT_EXTENSIONS: &[&str] = &["md", "mdx"];

// ============================================================================
// descriptor (as written)
// ============================================================================

/// Root of `docs.toml`, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDescriptor {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Documentation content root, relative to the descriptor file.
    pub content_dir: PathBuf,

    pub social: SocialLinks,

    pub sidebar: Vec<SidebarEntry>,

    pub integrations: Vec<PluginSpec>,
}

impl Default for SiteDescriptor {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            social: SocialLinks::new(),
            sidebar: Vec::new(),
            integrations: Vec::new(),
        }
    }
}

/// Inputs `build()` needs besides the descriptor itself.
#[derive(Debug, Clone)]
pub struct BuildContext<'a> {
    /// Directory of the descriptor file; relative paths resolve against it.
    pub root: PathBuf,
    /// `--root` override for the content directory.
    pub content_override: Option<PathBuf>,
    pub registry: &'a PluginRegistry,
}

impl<'a> BuildContext<'a> {
    pub fn new(root: impl Into<PathBuf>, registry: &'a PluginRegistry) -> Self {
        Self {
            root: root.into(),
            content_override: None,
            registry,
        }
    }

    pub fn with_content_override(mut self, content_dir: Option<PathBuf>) -> Self {
        self.content_override = content_dir;
        self
    }

    fn content_dir(&self, configured: &Path) -> PathBuf {
        let path = self.content_override.as_deref().unwrap_or(configured);
        expand_path(path, &self.root)
    }
}

impl SiteDescriptor {
    /// Parse descriptor TOML, ignoring unknown fields.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse descriptor TOML, collecting unknown field paths.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let descriptor = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((descriptor, ignored))
    }

    /// Validate and build the immutable [`SiteConfig`].
    ///
    /// Fails fast with every collected problem; the only I/O is checking
    /// that referenced directories and pages exist.
    pub fn build(&self, ctx: &BuildContext<'_>) -> Result<SiteConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let config = self.assemble(ctx, &mut diag);
        diag.into_result()?;
        Ok(config)
    }

    /// Validate every section into `diag` and assemble the result.
    ///
    /// The returned value is only meaningful when `diag` has no errors.
    fn assemble(&self, ctx: &BuildContext<'_>, diag: &mut ConfigDiagnostics) -> SiteConfig {
        let title = self.title.trim();
        if title.is_empty() {
            diag.error_with_hint(
                ErrorKind::Schema,
                FieldPath::new("title"),
                "title must not be empty",
                "set title = \"Documentation\"",
            );
        }

        let description = self.description.as_deref().map(str::trim);
        if description.is_some_and(str::is_empty) {
            diag.warn(FieldPath::new("description"), "description is empty");
        }

        section::validate_social(&self.social, diag);

        let integrations = ctx.registry.resolve_all(&self.integrations, diag);

        let content_dir = ctx.content_dir(&self.content_dir);
        let content_exists = content_dir.is_dir();
        if !content_exists {
            diag.error_with_hint(
                ErrorKind::Reference,
                FieldPath::new("content_dir"),
                format!("content directory `{}` does not exist", content_dir.display()),
                format!("create it or set content_dir (default: {DEFAULT_CONTENT_DIR})"),
            );
        }

        let known_slugs = if content_exists {
            let extensions = merge_extensions(&integrations);
            index_slugs(&content_dir, &extensions, diag)
        } else {
            FxHashSet::default()
        };
        let sidebar_ctx = SidebarContext {
            content_dir: content_exists.then_some(content_dir.as_path()),
            known_slugs: &known_slugs,
        };

        let mut labels = FxHashSet::default();
        let mut sidebar = Vec::with_capacity(self.sidebar.len());
        for (index, entry) in self.sidebar.iter().enumerate() {
            let label = entry.label.trim();
            if !label.is_empty() && !labels.insert(label) {
                diag.error_with_hint(
                    ErrorKind::Schema,
                    FieldPath::new("sidebar").index(index).field("label"),
                    format!("duplicate sidebar label `{label}`"),
                    "sidebar group labels must be unique",
                );
            }
            if let Some(group) = entry.build(index, &sidebar_ctx, diag) {
                sidebar.push(group);
            }
        }

        debug!("config"; "built {} sidebar group(s), {} integration(s)",
            sidebar.len(), integrations.len());

        SiteConfig {
            title: title.to_string(),
            description: description.filter(|d| !d.is_empty()).map(String::from),
            social: self.social.clone(),
            sidebar,
            integrations,
            content_dir,
        }
    }

}

/// Slugs of every page under the content root.
///
/// Two files with one slug (`setup.md` and `setup/index.md`) would share a
/// link, so each collision is a reference error naming both files.
fn index_slugs(
    content_dir: &Path,
    extensions: &[&str],
    diag: &mut ConfigDiagnostics,
) -> FxHashSet<String> {
    let mut owners: FxHashMap<String, PathBuf> = FxHashMap::default();
    for rel in collect_page_paths(content_dir, Path::new(""), extensions) {
        let slug = slug_for(&rel);
        if let Some(first) = owners.get(&slug) {
            diag.error_with_hint(
                ErrorKind::Reference,
                FieldPath::new("content_dir"),
                format!(
                    "`{}` and `{}` both map to slug `{slug}`",
                    first.display(),
                    rel.display()
                ),
                "rename or remove one of the pages",
            );
            continue;
        }
        owners.insert(slug, rel);
    }
    owners.into_keys().collect()
}

/// Union of integration extensions in declaration order.
///
/// An extension claimed by several integrations belongs to the last one.
fn merge_extensions(integrations: &[PluginHandle]) -> Vec<&'static str> {
    let mut owners: Vec<(&'static str, usize)> = Vec::new();
    for (i, handle) in integrations.iter().enumerate() {
        for ext in &handle.extensions {
            match owners.iter_mut().find(|(e, _)| e == ext) {
                Some(slot) => slot.1 = i,
                None => owners.push((*ext, i)),
            }
        }
    }
    if owners.is_empty() {
        return DEFAULT_EXTENSIONS.to_vec();
    }
    owners.into_iter().map(|(ext, _)| ext).collect()
}

// ============================================================================
// built configuration
// ============================================================================

/// Validated, immutable site configuration.
///
/// Serializes to the handoff shape consumed by the site tool:
/// `{ title, social, sidebar, integrations }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub social: SocialLinks,

    pub sidebar: Vec<SidebarGroup>,

    pub integrations: Vec<PluginHandle>,

    /// Absolute content root (internal use only)
    #[serde(skip)]
    pub content_dir: PathBuf,
}

impl SiteConfig {
    /// Read, parse and build the descriptor at `path`.
    ///
    /// Unknown fields and other warnings are logged, not fatal.
    pub fn load(
        path: &Path,
        content_override: Option<PathBuf>,
        registry: &PluginRegistry,
    ) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (descriptor, ignored) = SiteDescriptor::parse_with_ignored(&content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(
                FieldPath::from(field),
                "field is not recognized and will be ignored",
            );
        }

        let root = path
            .parent()
            .map(normalize_path)
            .unwrap_or_else(|| normalize_path(Path::new(".")));
        let ctx = BuildContext::new(root, registry).with_content_override(content_override);

        let config = descriptor.assemble(&ctx, &mut diag);
        diag.print_warnings();
        diag.into_result()?;
        Ok(config)
    }

    /// Page extensions rendered by the configured integrations.
    pub fn content_extensions(&self) -> Vec<&'static str> {
        merge_extensions(&self.integrations)
    }

    /// JSON value handed to the site tool.
    pub fn to_handoff(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Build a descriptor with `title = "Test"` prepended, using `content_dir`
/// as content root and the built-in registry.
#[cfg(test)]
pub fn test_build_config(content_dir: &Path, extra: &str) -> Result<SiteConfig, ConfigError> {
    let content = format!("title = \"Test\"\n{extra}");
    let (descriptor, ignored) = SiteDescriptor::parse_with_ignored(&content)?;
    assert!(
        ignored.is_empty(),
        "test descriptor has unknown fields: {:?}",
        ignored
    );
    let registry = PluginRegistry::builtin();
    let ctx = BuildContext::new(content_dir, &registry)
        .with_content_override(Some(content_dir.to_path_buf()));
    descriptor.build(&ctx)
}

// ============================================================================
// tests
// ============================================================================
