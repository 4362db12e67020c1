//! Configuration error types.

use super::FieldPath;
use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Descriptor loading and building errors.
///
/// Every variant aborts the build: no partial `SiteConfig` is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from]/#[source] on the diagnostic variants - the display
    // already lists every problem and a source would print them twice.
    /// Required field missing, empty or malformed.
    #[error("{0}")]
    Schema(ConfigDiagnostics),

    /// A referenced directory or page does not exist.
    #[error("{0}")]
    Reference(ConfigDiagnostics),

    /// An integration is unknown or rejected its options.
    #[error("{0}")]
    PluginConfig(ConfigDiagnostics),
}

impl ConfigError {
    /// Error category, `None` for I/O failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Io(..) => None,
            Self::Toml(_) | Self::Schema(_) => Some(ErrorKind::Schema),
            Self::Reference(_) => Some(ErrorKind::Reference),
            Self::PluginConfig(_) => Some(ErrorKind::PluginConfig),
        }
    }

    /// Collected diagnostics for validation failures.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Schema(diag) | Self::Reference(diag) | Self::PluginConfig(diag) => Some(diag),
            Self::Io(..) | Self::Toml(_) => None,
        }
    }
}

/// Category of a single diagnostic.
///
/// Declaration order is the precedence used when one build collects
/// problems of several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Schema,
    PluginConfig,
    Reference,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::PluginConfig => "plugin",
            Self::Reference => "reference",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub kind: ErrorKind,
    /// Descriptor field path (e.g., "sidebar[0].autogenerate.directory")
    pub field: FieldPath,
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = Style::new().dimmed();
        writeln!(
            f,
            "{}{}{} {}",
            paint("[", Stream::Stderr, dim),
            paint(self.field.as_str(), Stream::Stderr, Style::new().cyan()),
            paint("]", Stream::Stderr, dim),
            paint(format!("({})", self.kind.label()), Stream::Stderr, dim)
        )?;
        write!(f, "{} {}", paint("→", Stream::Stderr, Style::new().red()), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", paint("hint:", Stream::Stderr, Style::new().yellow()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Problems collected while building one descriptor.
///
/// Errors abort the build, warnings (unknown fields, empty groups) do not.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "descriptor has {} warning{}:",
            self.warnings.len(), crate::utils::plural_s(self.warnings.len()));
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Whether any collected error has the given category.
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Convert to Result, classifying by the highest-precedence category.
    pub fn into_result(self) -> Result<(), ConfigError> {
        match self.errors.iter().map(|e| e.kind).min() {
            None => Ok(()),
            Some(ErrorKind::Schema) => Err(ConfigError::Schema(self)),
            Some(ErrorKind::PluginConfig) => Err(ConfigError::PluginConfig(self)),
            Some(ErrorKind::Reference) => Err(ConfigError::Reference(self)),
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alert = Style::new().red().bold();
        writeln!(f, "{}\n", paint("config validation failed:", Stream::Stderr, alert))?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", Stream::Stderr, Style::new().dimmed()),
                paint(self.errors.len(), Stream::Stderr, alert),
                paint("errors", Stream::Stderr, Style::new().dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind as IoErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docs.toml"),
            Error::new(IoErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docs.toml"));
        assert_eq!(io_err.kind(), None);
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("sidebar"), "empty group");
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_precedence_schema_over_reference() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ErrorKind::Reference, FieldPath::new("sidebar"), "missing");
        diag.error(ErrorKind::Schema, FieldPath::new("title"), "empty");

        let err = diag.into_result().unwrap_err();
        assert!(matches!(err, ConfigError::Schema(_)));
        // every problem is kept regardless of the chosen variant
        let diag = err.diagnostics().unwrap();
        assert_eq!(diag.len(), 2);
        assert!(diag.has_kind(ErrorKind::Reference));
    }

    #[test]
    fn test_precedence_plugin_over_reference() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ErrorKind::Reference, FieldPath::new("sidebar"), "missing");
        diag.error(ErrorKind::PluginConfig, FieldPath::new("integrations"), "unknown");

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::PluginConfig));
    }

    #[test]
    fn test_display_lists_all_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ErrorKind::Schema, FieldPath::new("title"), "title must not be empty");
        diag.error_with_hint(
            ErrorKind::Schema,
            FieldPath::new("social").field("github"),
            "invalid URL",
            "use format like https://github.com/org/repo",
        );

        let display = format!("{diag}");
        assert!(display.contains("title must not be empty"));
        assert!(display.contains("social.github"));
        assert!(display.contains("https://github.com/org/repo"));
    }
}
