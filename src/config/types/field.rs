//! Descriptor field paths used in diagnostics.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a descriptor field, e.g. `sidebar[2].autogenerate.directory`.
///
/// Top-level fields are `'static`; entries inside arrays are built with
/// [`FieldPath::index`] and [`FieldPath::field`].
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("sidebar").index(1).field("label");
/// assert_eq!(path.as_str(), "sidebar[1].label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Append an array index: `sidebar` -> `sidebar[3]`.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Append a child field: `sidebar[3]` -> `sidebar[3].label`.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        f.write_str(&paint(quoted, Stream::Stderr, Style::new().bright_blue()))
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
