//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `expand_path` - `~` expansion for user supplied paths

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` and resolve relative paths against `base`.
///
/// # Example
/// ```ignore
/// expand_path(Path::new("~/docs"), root)    // -> /home/user/docs
/// expand_path(Path::new("content"), root)   // -> <root>/content
/// ```
pub fn expand_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    };
    normalize_path(&full)
}
