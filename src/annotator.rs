//! Line annotation: extract the first parenthesized group from every line
//!
//! The annotator reads a whole file into memory, walks it line by line and
//! records the contents of the first `(`...`)` group on each line. Matching is
//! non-greedy, so the group ends at the first `)` after the opening `(`:
//!
//! - `foo(bar)`      → `bar`
//! - `qux(a(b)c)`    → `a(b`
//! - `x(1) y(2)`     → `1` (later groups on the same line are ignored)
//! - `open(` / `baz` → no annotation
//!
//! # Byte semantics
//!
//! Lines are scanned as raw bytes, not as UTF-8. `.` in the pattern matches
//! any byte except `\n`, so a file with invalid UTF-8 is still annotated and
//! the matched bytes are echoed back unchanged.

use anyhow::{Context, Result};
use regex::bytes::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::models::Annotation;

/// Shortest span from a `(` to the next `)`, capturing what lies between
pub const GROUP_PATTERN: &str = r"(?-u)\((.*?)\)";

static GROUP_REGEX: OnceLock<Regex> = OnceLock::new();

fn group_regex() -> &'static Regex {
    GROUP_REGEX.get_or_init(|| Regex::new(GROUP_PATTERN).expect("GROUP_PATTERN is a valid regex"))
}

/// Return the contents of the first parenthesized group on a line
///
/// # Returns
/// `None` if the line has no `(`, or no `)` after its first matching `(`
pub fn first_group(line: &[u8]) -> Option<&[u8]> {
    group_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

/// Split content into lines, keeping each `\n` terminator
///
/// A trailing terminator does not open an extra empty line, and empty
/// content has no lines at all.
pub fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split_inclusive(|&b| b == b'\n')
}

/// Annotate in-memory content
///
/// Produces one [`Annotation`] per line that contains a group, in line order.
pub fn annotate_bytes(content: &[u8]) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut total_lines = 0;

    for (idx, line) in lines(content).enumerate() {
        total_lines += 1;
        if let Some(text) = first_group(line) {
            log::trace!("Line {}: matched {:?}", idx + 1, String::from_utf8_lossy(text));
            annotations.push(Annotation::new(idx + 1, text));
        }
    }

    log::debug!(
        "Scanned {} lines, {} annotated",
        total_lines,
        annotations.len()
    );

    annotations
}

/// Read a file fully and annotate its lines
pub fn annotate_file(path: impl AsRef<Path>) -> Result<Vec<Annotation>> {
    let path = path.as_ref();
    log::info!("Annotating {}", path.display());

    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(annotate_bytes(&content))
}
