//! Pseudo-YAML output for annotations
//!
//! ```text
//! apinamemap:
//!   "1": bar
//!   "3": a(b
//! ```
//!
//! Values are written verbatim. Nothing is quoted or escaped, so a value
//! containing `:`, `#`, quotes or brackets produces a line that a YAML parser
//! may reject or read differently.

use std::io::{self, Write};

use crate::models::Annotation;

/// Top-level key of the generated mapping
pub const HEADER: &str = "apinamemap";

/// Write the header and one entry per annotation, in the order given
pub fn write_mapping<W: Write>(writer: &mut W, annotations: &[Annotation]) -> io::Result<()> {
    writeln!(writer, "{}:", HEADER)?;
    for annotation in annotations {
        write_entry(writer, annotation)?;
    }
    Ok(())
}

fn write_entry<W: Write>(writer: &mut W, annotation: &Annotation) -> io::Result<()> {
    write!(writer, "  \"{}\": ", annotation.line)?;
    writer.write_all(&annotation.text)?;
    writer.write_all(b"\n")
}

/// Render the mapping into a byte buffer
pub fn render_mapping(annotations: &[Annotation]) -> Vec<u8> {
    let mut buf = Vec::new();
    write_mapping(&mut buf, annotations).expect("writing to a Vec cannot fail");
    buf
}
