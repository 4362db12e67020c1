//! Descriptor section definitions.
//!
//! | Module    | TOML key        | Purpose                              |
//! |-----------|-----------------|--------------------------------------|
//! | `social`  | `[social]`      | Provider → URL links                 |
//! | `sidebar` | `[[sidebar]]`   | Navigation groups                    |
//!
//! Integrations (`[[integrations]]`) live in `crate::plugin`.

mod sidebar;
mod social;

pub use sidebar::{
    AutogenerateEntry, SidebarEntry, SidebarGroup, SidebarItem, SidebarSource,
};
pub use social::{SocialLinks, validate_social};

pub(crate) use sidebar::SidebarContext;
