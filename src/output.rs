//! User-facing diagnostics on stderr
//!
//! Kept apart from `log` so a failure reads as one clean, colored line
//! instead of a timestamped log record. Nothing here touches stdout.

use owo_colors::OwoColorize;

/// Display an error message to the user in red with padding
///
/// Format: blank line + red message + blank line
///
/// # Example
/// ```ignore
/// output::error("Error: Failed to read apis.txt: No such file or directory (os error 2)");
/// ```
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}
