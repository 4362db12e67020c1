//! Configuration utility types.
//!
//! | Module  | Purpose                                        |
//! |---------|------------------------------------------------|
//! | `error` | `ConfigError`, collected `ConfigDiagnostics`   |
//! | `field` | `FieldPath` for pointing at descriptor fields  |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind};
pub use field::FieldPath;
