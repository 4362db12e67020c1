//! `[social]` section: provider identifier → absolute URL.
//!
//! ```toml
//! [social]
//! github = "https://github.com/adxgun/sarabi"
//! discord = "https://discord.gg/example"
//! ```

use crate::config::{ConfigDiagnostics, ErrorKind, FieldPath};
use std::collections::BTreeMap;

/// Keys are unique by construction. `BTreeMap` keeps output deterministic.
pub type SocialLinks = BTreeMap<String, String>;

/// Check provider identifiers and URLs.
///
/// # Checks
/// - provider is non-empty lowercase `[a-z0-9-]`
/// - URL parses, has an `http`/`https` scheme and a host
pub fn validate_social(links: &SocialLinks, diag: &mut ConfigDiagnostics) {
    let base = FieldPath::new("social");

    for (provider, url_str) in links {
        let field = base.field(provider);

        let valid_provider = !provider.is_empty()
            && provider
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_provider {
            diag.error_with_hint(
                ErrorKind::Schema,
                field.clone(),
                format!("invalid provider identifier `{provider}`"),
                "use a lowercase name such as `github` or `mastodon`",
            );
        }

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        ErrorKind::Schema,
                        field.clone(),
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/org/repo",
                    );
                }
                if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(
                        ErrorKind::Schema,
                        field,
                        "URL must have a valid host",
                        "use format like https://github.com/org/repo",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    ErrorKind::Schema,
                    field,
                    format!("invalid URL `{url_str}`: {e}"),
                    "social links must be absolute URLs, e.g. https://github.com/org/repo",
                );
            }
        }
    }
}
