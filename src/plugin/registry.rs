//! Plugin registry: `kind` -> factory.

use super::{PluginHandle, PluginSpec, markdoc, theme};
use crate::config::{ConfigDiagnostics, ErrorKind, FieldPath};
use rustc_hash::FxHashSet;

/// Builds a handle from raw options, or explains why the options are rejected.
pub type PluginFactory = fn(&toml::Table) -> Result<PluginHandle, String>;

/// Statically enumerable set of supported integrations.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    factories: Vec<(&'static str, PluginFactory)>,
}

impl PluginRegistry {
    /// Registry without any integration.
    pub const fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with the built-in theme and markdoc integrations.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(theme::KIND, theme::create);
        registry.register(markdoc::KIND, markdoc::create);
        registry
    }

    /// Register a factory. A second registration of `kind` replaces the first.
    pub fn register(&mut self, kind: &'static str, factory: PluginFactory) {
        match self.factories.iter_mut().find(|(k, _)| *k == kind) {
            Some(slot) => slot.1 = factory,
            None => self.factories.push((kind, factory)),
        }
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.iter().map(|(kind, _)| *kind)
    }

    fn factory(&self, kind: &str) -> Option<PluginFactory> {
        self.factories
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, factory)| *factory)
    }

    /// Resolve every spec in order, recording failures in `diag`.
    ///
    /// Only successfully resolved handles are returned; the caller must
    /// check `diag` before using them.
    pub fn resolve_all(
        &self,
        specs: &[PluginSpec],
        diag: &mut ConfigDiagnostics,
    ) -> Vec<PluginHandle> {
        let base = FieldPath::new("integrations");
        let mut seen = FxHashSet::default();
        let mut handles = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            let field = base.index(index).field("kind");

            let Some(factory) = self.factory(&spec.kind) else {
                let known: Vec<_> = self.kinds().collect();
                diag.error_with_hint(
                    ErrorKind::PluginConfig,
                    field,
                    format!("unknown integration `{}`", spec.kind),
                    format!("known integrations: {}", known.join(", ")),
                );
                continue;
            };

            if !seen.insert(spec.kind.as_str()) {
                diag.error_with_hint(
                    ErrorKind::PluginConfig,
                    field,
                    format!("integration `{}` is registered more than once", spec.kind),
                    "merge the options into a single entry",
                );
                continue;
            }

            match factory(&spec.options) {
                Ok(handle) => handles.push(handle),
                Err(reason) => diag.error(
                    ErrorKind::PluginConfig,
                    base.index(index).field("options"),
                    format!("`{}` rejected its options: {reason}", spec.kind),
                ),
            }
        }

        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_kinds() {
        let registry = PluginRegistry::builtin();
        let kinds: Vec<_> = registry.kinds().collect();
        assert_eq!(kinds, vec!["docs-theme", "markdoc"]);
    }

    #[test]
    fn test_resolve_preserves_order() {
        let registry = PluginRegistry::builtin();
        let specs = vec![PluginSpec::new("markdoc"), PluginSpec::new("docs-theme")];
        let mut diag = ConfigDiagnostics::new();

        let handles = registry.resolve_all(&specs, &mut diag);
        assert!(diag.is_empty());
        let kinds: Vec<_> = handles.iter().map(|h| h.kind.as_str()).collect();
        assert_eq!(kinds, vec!["markdoc", "docs-theme"]);
    }

    #[test]
    fn test_unknown_kind() {
        let registry = PluginRegistry::builtin();
        let mut diag = ConfigDiagnostics::new();
        let handles = registry.resolve_all(&[PluginSpec::new("mdx")], &mut diag);

        assert!(handles.is_empty());
        let err = &diag.errors()[0];
        assert_eq!(err.kind, ErrorKind::PluginConfig);
        assert_eq!(err.field.as_str(), "integrations[0].kind");
        assert!(err.hint.as_deref().unwrap().contains("markdoc"));
    }

    #[test]
    fn test_duplicate_kind() {
        let registry = PluginRegistry::builtin();
        let mut diag = ConfigDiagnostics::new();
        let specs = vec![PluginSpec::new("markdoc"), PluginSpec::new("markdoc")];
        let handles = registry.resolve_all(&specs, &mut diag);

        assert_eq!(handles.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "integrations[1].kind");
    }

    #[test]
    fn test_rejected_options() {
        let registry = PluginRegistry::builtin();
        let mut diag = ConfigDiagnostics::new();
        let spec = PluginSpec::new("markdoc").with_option("allow_html", "yes");
        registry.resolve_all(&[spec], &mut diag);

        assert!(diag.has_kind(ErrorKind::PluginConfig));
        assert_eq!(diag.errors()[0].field.as_str(), "integrations[0].options");
    }

    #[test]
    fn test_register_replaces_factory() {
        fn stub(_: &toml::Table) -> Result<PluginHandle, String> {
            Err("disabled".into())
        }
        let mut registry = PluginRegistry::builtin();
        registry.register("markdoc", stub);

        assert_eq!(registry.kinds().count(), 2);
        let mut diag = ConfigDiagnostics::new();
        registry.resolve_all(&[PluginSpec::new("markdoc")], &mut diag);
        assert!(diag.has_errors());
    }
}
