//! `nav`: print the resolved sidebar.

use std::fmt::Write;

use anyhow::Result;
use owo_colors::{Stream, Style};

use super::{Cli, NavArgs, common::load_config};
use crate::logger::paint;
use crate::nav::{self, NavEntry, NavGroup, Navigation, ResolveOptions};

pub fn run_nav(cli: &Cli, args: &NavArgs) -> Result<()> {
    let config = load_config(cli)?;
    let options = ResolveOptions {
        include_drafts: args.drafts,
    };
    let navigation = nav::resolve(&config, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&navigation)?);
    } else {
        print!("{}", render_tree(&navigation));
    }
    Ok(())
}

/// Render the navigation as an indented tree.
fn render_tree(navigation: &Navigation) -> String {
    let mut out = String::new();
    for group in &navigation.groups {
        let marker = if group.collapsed { " (collapsed)" } else { "" };
        let _ = writeln!(
            out,
            "{}{}",
            paint(&group.label, Stream::Stdout, Style::new().bold()),
            paint(marker, Stream::Stdout, Style::new().dimmed())
        );
        render_entries(&mut out, group, "");
    }
    out
}

fn render_entries(out: &mut String, group: &NavGroup, indent: &str) {
    let count = group.entries.len();
    for (i, entry) in group.entries.iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        match entry {
            NavEntry::Page(page) => {
                let link = paint(&page.link, Stream::Stdout, Style::new().bright_blue());
                let _ = writeln!(out, "{indent}{branch}{}  {link}", page.label);
            }
            NavEntry::Link { label, link } => {
                let link = paint(link, Stream::Stdout, Style::new().cyan());
                let _ = writeln!(out, "{indent}{branch}{label}  {link}");
            }
            NavEntry::Group(nested) => {
                let name = paint(&nested.label, Stream::Stdout, Style::new().bold());
                let _ = writeln!(out, "{indent}{branch}{name}/");
                let child = format!("{indent}{}", if last { "    " } else { "│   " });
                render_entries(out, nested, &child);
            }
        }
    }
}
