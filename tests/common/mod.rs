//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Create a temporary settings file with the given intervals.
pub fn temp_settings(address: &str, project: &str, intervals: &[i64]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");

    let intervals = intervals
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let content = format!(
        "[settings]\naddress = \"{}\"\nproject = \"{}\"\nintervals = [{}]\n",
        address, project, intervals
    );
    std::fs::write(&path, content).expect("Failed to write settings");

    (temp_dir, path)
}
