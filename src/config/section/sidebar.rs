//! `[[sidebar]]` section: navigation groups.
//!
//! Each group is either an explicit list of items or an auto-discovery
//! directive naming a directory under the content root, never both.
//!
//! ```toml
//! [[sidebar]]
//! label = "Introduction"
//! autogenerate = { directory = "/guides/introduction" }
//!
//! [[sidebar]]
//! label = "Links"
//! collapsed = true
//! items = [
//!     "guides/example",
//!     { slug = "reference/cli", label = "CLI" },
//!     { label = "Repository", link = "https://github.com/adxgun/sarabi" },
//! ]
//! ```

use crate::config::util::normalize_content_dir;
use crate::config::{ConfigDiagnostics, ErrorKind, FieldPath};
use crate::nav::normalize_slug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// descriptor form
// ============================================================================

/// Sidebar group as written in the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarEntry {
    pub label: String,

    /// Explicit ordered page references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SidebarItem>>,

    /// Auto-discovery directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autogenerate: Option<AutogenerateEntry>,

    /// Render the group collapsed initially.
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutogenerateEntry {
    /// Directory relative to the content root.
    pub directory: String,
}

/// Explicit sidebar item.
///
/// Tables are checked key by key on deserialization, so a misspelled key
/// or a table mixing `slug` and `link` fails instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawSidebarItem")]
pub enum SidebarItem {
    /// `"guides/example"` - a content page, labelled by its title.
    Slug(String),

    /// `{ label, link }` - custom entry, absolute URL or site path.
    Link { label: String, link: String },

    /// `{ slug, label? }` - a content page with an optional label override.
    Page {
        slug: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

/// Sidebar item before its table keys are checked.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSidebarItem {
    Slug(String),
    Table(toml::Table),
}

impl TryFrom<RawSidebarItem> for SidebarItem {
    type Error = String;

    fn try_from(raw: RawSidebarItem) -> Result<Self, Self::Error> {
        let mut table = match raw {
            RawSidebarItem::Slug(slug) => return Ok(Self::Slug(slug)),
            RawSidebarItem::Table(table) => table,
        };

        let mut take = |key: &str| match table.remove(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(format!(
                "sidebar item `{key}` must be a string, found {}",
                other.type_str()
            )),
        };
        let slug = take("slug")?;
        let label = take("label")?;
        let link = take("link")?;

        if let Some(key) = table.keys().next() {
            return Err(format!(
                "unknown sidebar item field `{key}`, expected `slug`, `label` or `link`"
            ));
        }

        match (slug, link, label) {
            (Some(_), Some(_), _) => Err("sidebar item sets both `slug` and `link`".into()),
            (Some(slug), None, label) => Ok(Self::Page { slug, label }),
            (None, Some(link), Some(label)) => Ok(Self::Link { label, link }),
            (None, Some(link), None) => Err(format!("link item `{link}` needs a `label`")),
            (None, None, _) => Err("sidebar item needs a `slug` or a `link`".into()),
        }
    }
}

impl SidebarItem {
    /// Page slug for content references, `None` for custom links.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Slug(slug) | Self::Page { slug, .. } => Some(slug),
            Self::Link { .. } => None,
        }
    }
}

// ============================================================================
// built form
// ============================================================================

/// Validated sidebar group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarGroup {
    pub label: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,

    #[serde(flatten)]
    pub source: SidebarSource,
}

/// Where a group's pages come from. Serializes as `items` or `autogenerate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarSource {
    Items(Vec<SidebarItem>),
    Autogenerate {
        /// Normalized: no leading/trailing `/`.
        directory: String,
    },
}

impl SidebarGroup {
    pub fn is_autogenerated(&self) -> bool {
        matches!(self.source, SidebarSource::Autogenerate { .. })
    }

    pub fn items(&self) -> Option<&[SidebarItem]> {
        match &self.source {
            SidebarSource::Items(items) => Some(items),
            SidebarSource::Autogenerate { .. } => None,
        }
    }

    pub fn directory(&self) -> Option<&str> {
        match &self.source {
            SidebarSource::Autogenerate { directory } => Some(directory),
            SidebarSource::Items(_) => None,
        }
    }
}

/// Lookup data for reference checks.
///
/// `content_dir` is `None` when the content root itself is missing; the
/// caller reports that once instead of once per group.
pub(crate) struct SidebarContext<'a> {
    pub content_dir: Option<&'a Path>,
    pub known_slugs: &'a FxHashSet<String>,
}

impl SidebarEntry {
    /// Validate this entry and build the group.
    ///
    /// Returns `None` when the entry is unusable; the reasons are in `diag`.
    pub(crate) fn build(
        &self,
        index: usize,
        ctx: &SidebarContext<'_>,
        diag: &mut ConfigDiagnostics,
    ) -> Option<SidebarGroup> {
        let field = FieldPath::new("sidebar").index(index);

        let label = self.label.trim();
        if label.is_empty() {
            diag.error(
                ErrorKind::Schema,
                field.field("label"),
                "sidebar group label must not be empty",
            );
        }

        let source = match (&self.items, &self.autogenerate) {
            (Some(_), Some(_)) => {
                diag.error_with_hint(
                    ErrorKind::Schema,
                    field.clone(),
                    "group sets both `items` and `autogenerate`",
                    "keep only one of them",
                );
                return None;
            }
            (None, None) => {
                diag.error_with_hint(
                    ErrorKind::Schema,
                    field.clone(),
                    "group sets neither `items` nor `autogenerate`",
                    "add `autogenerate = { directory = \"...\" }` or an `items` list",
                );
                return None;
            }
            (Some(items), None) => {
                SidebarSource::Items(Self::build_items(items, &field.field("items"), ctx, diag)?)
            }
            (None, Some(auto)) => {
                let dir_field = field.field("autogenerate").field("directory");
                let directory = match normalize_content_dir(&auto.directory) {
                    Ok(directory) => directory,
                    Err(reason) => {
                        diag.error(
                            ErrorKind::Schema,
                            dir_field,
                            format!("`{}`: {reason}", auto.directory),
                        );
                        return None;
                    }
                };
                if let Some(content_dir) = ctx.content_dir
                    && !content_dir.join(&directory).is_dir()
                {
                    diag.error_with_hint(
                        ErrorKind::Reference,
                        dir_field,
                        format!("directory `{}` does not exist", auto.directory),
                        format!("create {}", content_dir.join(&directory).display()),
                    );
                    return None;
                }
                SidebarSource::Autogenerate { directory }
            }
        };

        if label.is_empty() {
            return None;
        }
        Some(SidebarGroup {
            label: label.to_string(),
            collapsed: self.collapsed,
            source,
        })
    }

    fn build_items(
        items: &[SidebarItem],
        field: &FieldPath,
        ctx: &SidebarContext<'_>,
        diag: &mut ConfigDiagnostics,
    ) -> Option<Vec<SidebarItem>> {
        if items.is_empty() {
            diag.warn(field.clone(), "group has no items");
        }

        let errors_before = diag.len();
        let mut built = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let item_field = field.index(i);
            match item {
                SidebarItem::Slug(slug) => {
                    let slug = normalize_slug(slug);
                    Self::check_slug(&slug, &item_field, ctx, diag);
                    built.push(SidebarItem::Slug(slug));
                }
                SidebarItem::Page { slug, label } => {
                    let slug = normalize_slug(slug);
                    Self::check_slug(&slug, &item_field.field("slug"), ctx, diag);
                    if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                        diag.error(
                            ErrorKind::Schema,
                            item_field.field("label"),
                            "label override must not be empty",
                        );
                    }
                    built.push(SidebarItem::Page {
                        slug,
                        label: label.clone(),
                    });
                }
                SidebarItem::Link { label, link } => {
                    if label.trim().is_empty() {
                        diag.error(
                            ErrorKind::Schema,
                            item_field.field("label"),
                            "link label must not be empty",
                        );
                    }
                    if !is_valid_link(link) {
                        diag.error_with_hint(
                            ErrorKind::Schema,
                            item_field.field("link"),
                            format!("invalid link `{link}`"),
                            "use an absolute URL or a site path starting with `/`",
                        );
                    }
                    built.push(item.clone());
                }
            }
        }

        (diag.len() == errors_before).then_some(built)
    }

    fn check_slug(
        slug: &str,
        field: &FieldPath,
        ctx: &SidebarContext<'_>,
        diag: &mut ConfigDiagnostics,
    ) {
        if slug.split('/').any(|part| part == "..") {
            diag.error(
                ErrorKind::Schema,
                field.clone(),
                format!("slug `{slug}` must not contain `..`"),
            );
            return;
        }
        if ctx.content_dir.is_some() && !ctx.known_slugs.contains(slug) {
            diag.error_with_hint(
                ErrorKind::Reference,
                field.clone(),
                format!("no page with slug `{slug}`"),
                "slugs are content paths without extension, e.g. `guides/example`",
            );
        }
    }
}

/// Absolute http(s) URL or a site path starting with `/`.
fn is_valid_link(link: &str) -> bool {
    if link.starts_with('/') {
        return !link.starts_with("//");
    }
    url::Url::parse(link).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

// ============================================================================
// tests
// ============================================================================
