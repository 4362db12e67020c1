//! `check`: build the descriptor and resolve its navigation.

use anyhow::Result;

use super::{Cli, common::load_config};
use crate::log;
use crate::nav::{self, ResolveOptions};
use crate::utils::plural_count;

/// Validate descriptor, referenced directories and page front matter.
pub fn run_check(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let navigation = nav::resolve(&config, &ResolveOptions::default())?;

    for (group, declared) in navigation.groups.iter().zip(&config.sidebar) {
        if declared.is_autogenerated() && group.entries.is_empty() {
            log!("warning"; "sidebar group `{}` has no pages", group.label);
        }
    }

    log!(
        "check";
        "`{}`: {}, {}, {}",
        config.title,
        plural_count(config.sidebar.len(), "sidebar group"),
        plural_count(navigation.page_count(), "page"),
        plural_count(config.integrations.len(), "integration")
    );
    Ok(())
}
