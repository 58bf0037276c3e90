//! Warning and status messages for CLI output.

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation after a clipboard copy - suppressed in quiet mode.
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        let plural = if count == 1 { "" } else { "s" };
        println!("Copied {count} string{plural} to clipboard.");
    }
}
