//! Content pages: discovery, slugs, links.

use super::frontmatter::Frontmatter;
use crate::log;
use anyhow::{Context, Result};
use jwalk::WalkDir;
use std::path::{Component, Path, PathBuf};

/// Files never treated as pages.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A content page discovered under the content root.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Path relative to the content root, e.g. `guides/intro/install.md`.
    pub rel: PathBuf,
    pub slug: String,
    pub meta: Frontmatter,
}

impl Page {
    /// Read and parse one page.
    pub fn load(content_dir: &Path, rel: PathBuf) -> Result<Self> {
        let abs = content_dir.join(&rel);
        let source = std::fs::read_to_string(&abs)
            .with_context(|| format!("failed to read page `{}`", abs.display()))?;
        let meta = Frontmatter::parse(&source)
            .with_context(|| format!("in `{}`", rel.display()))?;
        Ok(Self {
            slug: slug_for(&rel),
            rel,
            meta,
        })
    }

    /// Sidebar label: `sidebar.label`, then `title`, then the file stem.
    pub fn label(&self) -> String {
        if let Some(label) = self.meta.sidebar.label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        if let Some(title) = self.meta.title.as_deref().filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        self.rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn link(&self) -> String {
        link_for(&self.slug)
    }
}

/// Collect content files under `dir` (relative to `content_dir`) whose
/// extension is in `extensions`, sorted for deterministic output.
/// Entries that cannot be read are logged and skipped.
pub fn collect_page_paths(content_dir: &Path, dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let root = content_dir.join(dir);
    let mut paths: Vec<PathBuf> = WalkDir::new(&root)
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|e| log!("warning"; "skipping unreadable entry: {}", e))
                .ok()
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name) && !name.starts_with('_')
        })
        .map(|e| e.path())
        .filter(|p| has_extension(p, extensions))
        .filter_map(|p| p.strip_prefix(content_dir).ok().map(Path::to_path_buf))
        .collect();
    paths.sort();
    paths
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// Slug of a content-relative path.
///
/// # Examples
/// ```ignore
/// slug_for("guides/Getting Started.md")   // "guides/getting-started"
/// slug_for("guides/introduction/index.md") // "guides/introduction"
/// slug_for("index.mdoc")                   // ""
/// ```
pub fn slug_for(rel: &Path) -> String {
    let stem = rel.with_extension("");
    let segments = stem.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy()),
        _ => None,
    });
    join_segments(segments)
}

/// Canonical form of a slug written by hand, e.g. in a sidebar item.
///
/// Same segment rules as [`slug_for`], so `guides/Getting Started` and
/// `guides/introduction/index` match the pages they name.
pub fn normalize_slug(raw: &str) -> String {
    join_segments(raw.trim().split('/'))
}

fn join_segments<S: AsRef<str>>(segments: impl Iterator<Item = S>) -> String {
    let mut segments: Vec<String> = segments
        .map(|s| slugify_segment(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect();

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }
    segments.join("/")
}

/// Site link for a slug: `/guides/intro/`, or `/` for the root index.
pub fn link_for(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_string()
    } else {
        format!("/{slug}/")
    }
}

/// Transliterate, lowercase, and collapse non-alphanumeric runs into `-`.
fn slugify_segment(segment: &str) -> String {
    let ascii = deunicode::deunicode(segment).to_lowercase();
    let mut out = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for(Path::new("guides/Getting Started.md")), "guides/getting-started");
        assert_eq!(slug_for(Path::new("guides/introduction/index.md")), "guides/introduction");
        assert_eq!(slug_for(Path::new("index.mdoc")), "");
        assert_eq!(slug_for(Path::new("reference/v1.2-notes.mdx")), "reference/v1.2-notes");
        assert_eq!(slug_for(Path::new("reference/Über.md")), "reference/uber");
    }

    #[test]
    fn test_normalize_slug_matches_slug_for() {
        assert_eq!(normalize_slug("/guides/introduction/index"), "guides/introduction");
        assert_eq!(normalize_slug("guides/Getting Started/"), "guides/getting-started");
        assert_eq!(normalize_slug("Reference/CLI"), "reference/cli");
        assert_eq!(
            normalize_slug("reference/v1.2-notes"),
            slug_for(Path::new("reference/v1.2-notes.md"))
        );
    }

    #[test]
    fn test_link_for() {
        assert_eq!(link_for(""), "/");
        assert_eq!(link_for("guides/intro"), "/guides/intro/");
    }

    #[test]
    fn test_collect_filters_extensions() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("guides");
        fs::create_dir_all(dir.join("deep")).unwrap();
        fs::write(dir.join("a.md"), "").unwrap();
        fs::write(dir.join("b.mdoc"), "").unwrap();
        fs::write(dir.join("image.png"), "").unwrap();
        fs::write(dir.join("_partial.md"), "").unwrap();
        fs::write(dir.join("deep/c.MD"), "").unwrap();

        let paths = collect_page_paths(temp.path(), Path::new("guides"), &["md"]);
        assert_eq!(
            paths,
            vec![PathBuf::from("guides/a.md"), PathBuf::from("guides/deep/c.MD")]
        );

        let paths = collect_page_paths(temp.path(), Path::new(""), &["md", "mdoc"]);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_collect_skips_unreadable_root() {
        let temp = TempDir::new().unwrap();
        let paths = collect_page_paths(temp.path(), Path::new("missing"), &["md"]);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_page_label_fallbacks() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("plain.md"), "# no front matter").unwrap();
        fs::write(temp.path().join("titled.md"), "---\ntitle: Titled\n---\n").unwrap();
        fs::write(
            temp.path().join("labelled.md"),
            "---\ntitle: Titled\nsidebar:\n  label: Short\n---\n",
        )
        .unwrap();

        let load = |name: &str| Page::load(temp.path(), PathBuf::from(name)).unwrap();
        assert_eq!(load("plain.md").label(), "plain");
        assert_eq!(load("titled.md").label(), "Titled");
        assert_eq!(load("labelled.md").label(), "Short");
        assert_eq!(load("titled.md").link(), "/titled/");
    }

    #[test]
    fn test_page_load_reports_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.md"), "---\nsidebar: [\n---\n").unwrap();
        let err = Page::load(temp.path(), PathBuf::from("broken.md")).unwrap_err();
        assert!(format!("{err:#}").contains("broken.md"));
    }
}
