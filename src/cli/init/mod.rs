//! Site initialization module.
//!
//! Creates a starter descriptor and content tree.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Content directory creation
//! - [`template`]: Descriptor template generation

mod structure;
mod template;
mod validate;

use crate::config::SiteConfig;
use crate::plugin::PluginRegistry;
use crate::utils::plural_count;
use crate::log;
use anyhow::{Context, Result};
use std::path::Path;

pub use validate::InitMode;

/// Create a new docs site at `root`.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create content directories with a starter page each
/// 3. Write the descriptor
/// 4. Load it back to make sure the result validates
///
/// If `dry_run` is true, only prints the descriptor template to stdout
pub fn new_site(root: &Path, mode: InitMode, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", template::generate_template());
        return Ok(());
    }

    validate::validate_target(root, mode)?;

    let pages = structure::create_structure(root)?;
    let descriptor = template::write_template(root)?;

    let config = SiteConfig::load(&descriptor, None, &PluginRegistry::builtin())
        .context("Generated descriptor failed validation")?;

    log!(
        "init";
        "created `{}` with {} and {}",
        descriptor.display(),
        plural_count(config.sidebar.len(), "sidebar group"),
        plural_count(pages, "starter page")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{self, ResolveOptions};
    use tempfile::TempDir;

    #[test]
    fn test_new_site_resolves() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");

        new_site(&root, InitMode::NewDir, false).unwrap();

        let config = SiteConfig::load(
            &root.join(template::CONFIG_FILE),
            None,
            &PluginRegistry::builtin(),
        )
        .unwrap();
        let navigation = nav::resolve(&config, &ResolveOptions::default()).unwrap();

        assert_eq!(navigation.groups.len(), template::STARTER_GROUPS.len());
        for group in &navigation.groups {
            assert_eq!(group.page_count(), 1, "group `{}`", group.label);
        }
    }

    #[test]
    fn test_new_site_refuses_non_empty_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("notes.txt"), "keep").unwrap();

        assert!(new_site(temp.path(), InitMode::CurrentDir, false).is_err());
        assert!(!temp.path().join(template::CONFIG_FILE).exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");

        new_site(&root, InitMode::NewDir, true).unwrap();
        assert!(!root.exists());
    }
}
