//! Test fixture utilities for loading IR dumps
//!
//! Fixtures live in `tests/fixtures/ttir/`. Their bare anchors use paths
//! relative to the crate root, which is the working directory for tests.

use std::path::PathBuf;

/// Get the path to a fixture IR dump
///
/// # Panics
/// Panics if the fixture file doesn't exist.
pub fn get_fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("ttir")
        .join(format!("{}.ttir", name));

    if !path.exists() {
        panic!("Fixture '{}' not found at {}", name, path.display());
    }

    path
}

/// Load a fixture IR dump as text
pub fn load_fixture(name: &str) -> String {
    let path = get_fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("Failed to read fixture '{}' from {}: {}", name, path.display(), e);
    })
}

/// Available fixture dumps
#[allow(dead_code)]
pub mod names {
    /// Vector add kernel with a full location table
    pub const ADD_KERNEL: &str = "add_kernel";
    /// Dump without a bare `#loc` anchor
    pub const NO_ANCHOR: &str = "no_anchor";
}

/// Source path recorded in the add kernel's bare anchor
#[allow(dead_code)]
pub const ADD_KERNEL_SOURCE: &str = "tests/fixtures/ttir/add_kernel.py";
