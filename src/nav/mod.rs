//! Sidebar navigation resolution.
//!
//! Turns the sidebar groups of a [`SiteConfig`] into a concrete tree of
//! page references, doing the same auto-discovery the site tool performs
//! at build time:
//!
//! - `autogenerate` groups walk their directory, nested directories
//!   become nested groups
//! - explicit `items` are looked up by slug
//! - hidden pages are skipped, drafts are skipped unless requested
//!
//! Ordering rules are in [`order`].

mod frontmatter;
mod order;
mod page;

pub use page::{Page, collect_page_paths, normalize_slug, slug_for};

use crate::config::{SidebarGroup, SidebarItem, SidebarSource, SiteConfig};
use crate::debug;
use anyhow::{Result, bail};
use order::SortKey;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    pub include_drafts: bool,
}

/// Resolved sidebar, one group per descriptor group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub groups: Vec<NavGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavGroup {
    pub label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    pub entries: Vec<NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry {
    Page(PageRef),
    Link { label: String, link: String },
    Group(NavGroup),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRef {
    pub label: String,
    pub slug: String,
    pub link: String,
    /// Source file relative to the content root.
    #[serde(skip)]
    pub source: PathBuf,
}

impl From<&Page> for PageRef {
    fn from(page: &Page) -> Self {
        Self {
            label: page.label(),
            slug: page.slug.clone(),
            link: page.link(),
            source: page.rel.clone(),
        }
    }
}

impl Navigation {
    /// Total page references across all groups.
    pub fn page_count(&self) -> usize {
        self.groups.iter().map(NavGroup::page_count).sum()
    }
}

impl NavGroup {
    /// Page references in this group, nested groups included.
    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Page references in display order, depth first.
    pub fn pages(&self) -> Vec<&PageRef> {
        let mut out = Vec::new();
        for entry in &self.entries {
            match entry {
                NavEntry::Page(page) => out.push(page),
                NavEntry::Group(group) => out.extend(group.pages()),
                NavEntry::Link { .. } => {}
            }
        }
        out
    }
}

/// Resolve every sidebar group of `config`.
pub fn resolve(config: &SiteConfig, options: &ResolveOptions) -> Result<Navigation> {
    let extensions = config.content_extensions();
    let content_dir = config.content_dir.as_path();

    // slug index is only needed for explicit items
    let needs_index = config.sidebar.iter().any(|g| g.items().is_some());
    let index = if needs_index {
        index_pages(content_dir, &extensions)?
    } else {
        FxHashMap::default()
    };

    let groups = config
        .sidebar
        .iter()
        .map(|group| resolve_group(group, content_dir, &extensions, &index, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(Navigation { groups })
}

fn resolve_group(
    group: &SidebarGroup,
    content_dir: &Path,
    extensions: &[&str],
    index: &FxHashMap<String, Page>,
    options: &ResolveOptions,
) -> Result<NavGroup> {
    let entries = match &group.source {
        SidebarSource::Autogenerate { directory } => {
            let base = Path::new(directory);
            let mut pages = Vec::new();
            for rel in collect_page_paths(content_dir, base, extensions) {
                let page = Page::load(content_dir, rel)?;
                if is_listed(&page, options) {
                    pages.push(page);
                }
            }
            debug!("nav"; "`{}`: {} page(s) under {}", group.label, pages.len(), directory);
            build_tree(base, pages, group.collapsed)
        }
        SidebarSource::Items(items) => items
            .iter()
            .map(|item| resolve_item(item, index))
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(NavGroup {
        label: group.label.clone(),
        collapsed: group.collapsed,
        entries,
    })
}

fn resolve_item(item: &SidebarItem, index: &FxHashMap<String, Page>) -> Result<NavEntry> {
    let (slug, label) = match item {
        SidebarItem::Link { label, link } => {
            return Ok(NavEntry::Link {
                label: label.clone(),
                link: link.clone(),
            });
        }
        SidebarItem::Slug(slug) => (slug, None),
        SidebarItem::Page { slug, label } => (slug, label.as_ref()),
    };

    let Some(page) = index.get(slug.as_str()) else {
        bail!("sidebar item `{slug}` does not match any page");
    };
    let mut page_ref = PageRef::from(page);
    if let Some(label) = label {
        page_ref.label = label.clone();
    }
    Ok(NavEntry::Page(page_ref))
}

fn is_listed(page: &Page, options: &ResolveOptions) -> bool {
    if page.meta.sidebar.hidden {
        debug!("nav"; "skip hidden page {}", page.rel.display());
        return false;
    }
    if page.meta.draft && !options.include_drafts {
        debug!("nav"; "skip draft page {}", page.rel.display());
        return false;
    }
    true
}

/// Build entries for pages under `base`; sub-directories become groups.
fn build_tree(base: &Path, pages: Vec<Page>, collapsed: bool) -> Vec<NavEntry> {
    let mut direct = Vec::new();
    let mut nested: BTreeMap<String, Vec<Page>> = BTreeMap::new();

    for page in pages {
        let rest = page.rel.strip_prefix(base).unwrap_or(&page.rel);
        let mut components = rest.components();
        let first = components.next();
        match (first, components.next()) {
            (Some(dir), Some(_)) => {
                let name = dir.as_os_str().to_string_lossy().into_owned();
                nested.entry(name).or_default().push(page);
            }
            _ => direct.push(page),
        }
    }

    let mut keyed: Vec<(Option<i64>, String, NavEntry)> =
        Vec::with_capacity(direct.len() + nested.len());

    for page in &direct {
        let key = page
            .rel
            .strip_prefix(base)
            .unwrap_or(&page.rel)
            .to_string_lossy()
            .to_lowercase();
        keyed.push((page.meta.sidebar.order, key, NavEntry::Page(page.into())));
    }

    for (name, pages) in nested {
        let entries = build_tree(&base.join(&name), pages, collapsed);
        let key = name.to_lowercase();
        let group = NavGroup {
            label: name,
            collapsed,
            entries,
        };
        keyed.push((None, key, NavEntry::Group(group)));
    }

    keyed.sort_by(|(oa, ka, _), (ob, kb, _)| {
        SortKey { order: *oa, key: ka }.cmp(&SortKey { order: *ob, key: kb })
    });
    keyed.into_iter().map(|(_, _, entry)| entry).collect()
}

/// Load every page under the content root, keyed by slug.
fn index_pages(content_dir: &Path, extensions: &[&str]) -> Result<FxHashMap<String, Page>> {
    let mut index = FxHashMap::default();
    for rel in collect_page_paths(content_dir, Path::new(""), extensions) {
        let page = Page::load(content_dir, rel)?;
        index.insert(page.slug.clone(), page);
    }
    Ok(index)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_build_config;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn labels(group: &NavGroup) -> Vec<String> {
        group
            .entries
            .iter()
            .map(|e| match e {
                NavEntry::Page(p) => p.label.clone(),
                NavEntry::Link { label, .. } => label.clone(),
                NavEntry::Group(g) => format!("[{}]", g.label),
            })
            .collect()
    }

    const INTRO: &str = r#"
[[sidebar]]
label = "Introduction"
autogenerate = { directory = "/guides/introduction" }
"#;

    #[test]
    fn test_autogenerate_two_pages() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/overview.md", "---\ntitle: Overview\n---\n");
        write(temp.path(), "guides/introduction/why.md", "---\ntitle: Why Sarabi\n---\n");

        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();

        assert_eq!(nav.groups.len(), 1);
        assert_eq!(nav.groups[0].label, "Introduction");
        assert_eq!(nav.groups[0].page_count(), 2);
        let links: Vec<_> = nav.groups[0].pages().iter().map(|p| p.link.clone()).collect();
        assert_eq!(
            links,
            vec!["/guides/introduction/overview/", "/guides/introduction/why/"]
        );
    }

    #[test]
    fn test_frontmatter_order_wins() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/a.md", "---\ntitle: A\n---\n");
        write(
            temp.path(),
            "guides/introduction/b.md",
            "---\ntitle: B\nsidebar:\n  order: 1\n---\n",
        );
        write(temp.path(), "guides/introduction/step-10.md", "# ten");
        write(temp.path(), "guides/introduction/step-2.md", "# two");

        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(labels(&nav.groups[0]), vec!["B", "A", "step-2", "step-10"]);
    }

    #[test]
    fn test_nested_directories_become_groups() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/index.md", "---\ntitle: Start\n---\n");
        write(temp.path(), "guides/introduction/advanced/deep.md", "---\ntitle: Deep\n---\n");

        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        let group = &nav.groups[0];

        assert_eq!(labels(group), vec!["[advanced]", "Start"]);
        assert_eq!(group.page_count(), 2);
        assert_eq!(group.pages()[1].link, "/guides/introduction/");
    }

    #[test]
    fn test_hidden_and_draft_pages() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/shown.md", "# shown");
        write(
            temp.path(),
            "guides/introduction/hidden.md",
            "---\nsidebar:\n  hidden: true\n---\n",
        );
        write(temp.path(), "guides/introduction/wip.md", "---\ndraft: true\n---\n");

        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(labels(&nav.groups[0]), vec!["shown"]);

        let nav = resolve(&config, &ResolveOptions { include_drafts: true }).unwrap();
        assert_eq!(labels(&nav.groups[0]), vec!["shown", "wip"]);
    }

    #[test]
    fn test_mdoc_pages_need_markdoc_integration() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/a.md", "# a");
        write(temp.path(), "guides/introduction/b.mdoc", "# b");

        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(nav.page_count(), 1);

        let with_markdoc = format!("{INTRO}\n[[integrations]]\nkind = \"docs-theme\"\n\n[[integrations]]\nkind = \"markdoc\"\n");
        let config = test_build_config(temp.path(), &with_markdoc).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(nav.page_count(), 2);
    }

    #[test]
    fn test_explicit_items() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/example.md", "---\ntitle: Example Guide\n---\n");
        write(temp.path(), "reference/cli.md", "---\ntitle: CLI Reference\n---\n");

        let config = test_build_config(
            temp.path(),
            r#"
[[sidebar]]
label = "Guides"
items = [
    "reference/cli",
    { slug = "guides/example", label = "Example" },
    { label = "GitHub", link = "https://github.com/adxgun/sarabi" },
]
"#,
        )
        .unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(labels(&nav.groups[0]), vec!["CLI Reference", "Example", "GitHub"]);
        assert_eq!(nav.page_count(), 2);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let temp = TempDir::new().unwrap();
        for name in ["c", "a", "b", "d"] {
            write(temp.path(), &format!("guides/introduction/{name}.md"), "# page");
        }
        let config = test_build_config(temp.path(), INTRO).unwrap();
        let first = resolve(&config, &ResolveOptions::default()).unwrap();
        let second = resolve(&config, &ResolveOptions::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(labels(&first.groups[0]), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_serialized_shape() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guides/introduction/a.md", "---\ntitle: A\n---\n");
        let config = test_build_config(temp.path(), INTRO).unwrap();
        let nav = resolve(&config, &ResolveOptions::default()).unwrap();

        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "groups": [{
                    "label": "Introduction",
                    "entries": [{
                        "type": "page",
                        "label": "A",
                        "slug": "guides/introduction/a",
                        "link": "/guides/introduction/a/"
                    }]
                }]
            })
        );
    }
}
