//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//!
//! Messages go to stderr so `export` and `nav --json` keep stdout clean.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} sidebar groups", count);
//! debug!("nav"; "skip draft page {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    if stderr.is_terminal() {
        execute!(stderr, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let color = match module_lower {
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        "hint" => Style::new().bright_cyan(),
        "check" | "init" => Style::new().bright_green(),
        "nav" | "export" => Style::new().bright_blue(),
        _ => Style::new().bright_yellow(),
    };
    paint(format!("[{module}]"), Stream::Stderr, color.bold())
}

/// Render `value` with `style` if `stream` takes colors.
///
/// Goes through `if_supports_color`, so `--color never` and pipes get
/// plain text.
pub fn paint<T: fmt::Display>(value: T, stream: Stream, style: Style) -> String {
    value
        .if_supports_color(stream, |v| v.style(style))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        let prefix = colorize_prefix("Check", "check");
        assert!(prefix.contains("[Check]"));
    }

    #[test]
    fn test_paint_respects_color_override() {
        owo_colors::set_override(false);
        assert_eq!(paint("plain", Stream::Stdout, Style::new().red().bold()), "plain");
        assert_eq!(colorize_prefix("Nav", "nav"), "[Nav]");
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
