//! Shared helpers.
//!
//! - [`path`]: filesystem path normalization and `~` expansion
//! - [`plural`]: count formatting for log output

pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
