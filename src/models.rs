//! Core data models for apinamemap
//!
//! An [`Annotation`] is the unit the annotator produces and the formatter
//! consumes: one line number paired with the text found on that line.

use std::borrow::Cow;

/// The first parenthesized group found on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Raw bytes between the opening `(` and the first `)` after it
    pub text: Vec<u8>,
}

impl Annotation {
    pub fn new(line: usize, text: impl Into<Vec<u8>>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }

    /// Matched text as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    /// Mapping key for this annotation (the line number as a string)
    pub fn key(&self) -> String {
        self.line.to_string()
    }
}
