//! Path utilities.
//!
//! Pure functions for path manipulation, plus `canonicalize` fallbacks.
//!
//! - [`fs`]: filesystem path normalization (`normalize_path`, `expand_path`)

pub mod fs;

pub use fs::{expand_path, normalize_path};
