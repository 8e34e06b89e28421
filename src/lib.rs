//! apinamemap: build an API name map from a text file
//!
//! Scans each line of a file for its first parenthesized group and emits a
//! YAML-style mapping from the 1-based line number to the group's contents.
//! The result is pasted into a collector configuration, where it translates
//! numeric API ids back into API names.
//!
//! # Architecture
//!
//! - **Annotator**: reads the file and extracts one group per line
//! - **Formatter**: writes the `apinamemap:` block to any writer
//! - **Name map**: parses a generated block back into an id lookup table
//!
//! # Example Usage
//!
//! ```no_run
//! use apinamemap::{annotate_file, write_mapping};
//!
//! let annotations = annotate_file("apis.txt").unwrap();
//! write_mapping(&mut std::io::stdout().lock(), &annotations).unwrap();
//! ```

pub mod annotator;
pub mod cli;
pub mod formatter;
pub mod models;
pub mod name_map;
pub mod output;

// Re-export commonly used types
pub use annotator::{annotate_bytes, annotate_file, first_group};
pub use formatter::{render_mapping, write_mapping};
pub use models::Annotation;
pub use name_map::ApiNameMap;
