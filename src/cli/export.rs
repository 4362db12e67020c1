//! `export`: write the handoff JSON for the site tool.

use std::fs;

use anyhow::{Context, Result};

use super::{Cli, ExportArgs, common::load_config};
use crate::config::SiteConfig;
use crate::log;

pub fn run_export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let config = load_config(cli)?;
    let json = render(&config, args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn render(config: &SiteConfig, pretty: bool) -> Result<String> {
    let value = config.to_handoff()?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_build_config;
    use tempfile::TempDir;

    #[test]
    fn test_render_compact_and_pretty() {
        let temp = TempDir::new().unwrap();
        let config = test_build_config(temp.path(), "").unwrap();

        let compact = render(&config, false).unwrap();
        assert_eq!(
            compact,
            r#"{"title":"Test","social":{},"sidebar":[],"integrations":[]}"#
        );

        let pretty = render(&config, true).unwrap();
        assert!(pretty.contains("\n  \"title\": \"Test\""));
    }
}
