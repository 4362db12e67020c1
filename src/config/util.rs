//! Descriptor path helpers.

use std::path::{Component, Path, PathBuf};

/// Find the descriptor by searching upward from `start`.
///
/// Absolute `config_name` is returned as-is if it exists.
///
/// # Example
/// ```text
/// /home/user/site/src/content/docs/  ← start
/// /home/user/site/docs.toml          ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Normalize a content-relative directory as written in the descriptor.
///
/// Leading and trailing `/` are ignored, so `/guides/intro` and
/// `guides/intro/` name the same directory. Empty paths and `..`
/// components are rejected because they would escape the content root.
pub fn normalize_content_dir(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err("directory must not be empty");
    }

    let mut parts = Vec::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => parts.push(part),
                None => return Err("directory must be valid UTF-8"),
            },
            Component::CurDir => {}
            Component::ParentDir => return Err("directory must not contain `..`"),
            Component::RootDir | Component::Prefix(_) => {
                return Err("directory must be relative to the content root");
            }
        }
    }

    if parts.is_empty() {
        return Err("directory must not be empty");
    }
    Ok(parts.join("/"))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_content_dir() {
        assert_eq!(
            normalize_content_dir("/guides/introduction"),
            Ok("guides/introduction".to_string())
        );
        assert_eq!(normalize_content_dir("reference"), Ok("reference".to_string()));
        assert_eq!(
            normalize_content_dir("guides/core-concepts/"),
            Ok("guides/core-concepts".to_string())
        );
        assert_eq!(
            normalize_content_dir("./guides//intro"),
            Ok("guides/intro".to_string())
        );
    }

    #[test]
    fn test_normalize_content_dir_rejects_escapes() {
        assert!(normalize_content_dir("").is_err());
        assert!(normalize_content_dir("/").is_err());
        assert!(normalize_content_dir("guides/../../etc").is_err());
        assert!(normalize_content_dir(".").is_err());
    }

    #[test]
    fn test_find_config_file_walks_upward() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docs.toml"), "title = \"Docs\"").unwrap();
        let nested = temp.path().join("src/content/docs");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("docs.toml"), &nested).unwrap();
        assert_eq!(found, temp.path().join("docs.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("nonexistent-descriptor.toml"), temp.path()).is_none());
    }
}
