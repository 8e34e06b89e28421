//! Shared helpers for fixture-based tests

#![allow(dead_code)]

use apinamemap::Annotation;
use std::path::PathBuf;

/// Absolute path to a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Annotations as (line, text) pairs for easy comparison
pub fn entries(annotations: &[Annotation]) -> Vec<(usize, String)> {
    annotations
        .iter()
        .map(|a| (a.line, a.text().into_owned()))
        .collect()
}
