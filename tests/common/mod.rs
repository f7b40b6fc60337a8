//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory with a _tasks.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("_tasks.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config with a nested subdirectory below it
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, config_path) = create_test_config(content);
    let sub_dir = temp_dir.path().join("subdir").join("deeper");
    fs::create_dir_all(&sub_dir).unwrap();
    (temp_dir, config_path, sub_dir)
}

/// Write a package.json with the given scripts object
pub fn write_manifest(dir: &Path, scripts_json: &str) {
    fs::write(
        dir.join("package.json"),
        format!(r#"{{"name": "fixture", "scripts": {}}}"#, scripts_json),
    )
    .unwrap();
}
