//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

/// Directory holding the LAS fixtures
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

pub fn fixture(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// All `.las` fixtures, sorted by name
pub fn all_fixtures() -> Vec<PathBuf> {
    let pattern = data_dir().join("*.las");
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .expect("valid glob pattern")
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();
    paths
}

/// Route `tracing` output to the test harness so diagnostics show with --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
