//! `package.json` script support
//!
//! Every entry in a manifest's `scripts` table becomes a task that delegates
//! back to the package manager.

use crate::config::model::Task;
use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Manifest file recognized next to (or instead of) a task file
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Program that runs manifest scripts
pub const MANIFEST_RUNNER: &str = "npm";

/// Description given to synthesized tasks
pub const MANIFEST_DESCRIPTION: &str = "<none>";

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

/// Parse manifest contents into synthesized tasks, sorted by name
pub fn parse_manifest(contents: &str, path: &Path) -> ConfigResult<Vec<Task>> {
    let manifest: Manifest =
        serde_json::from_str(contents).map_err(|source| ConfigError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(manifest.scripts.into_keys().map(script_task).collect())
}

/// Build the task standing in for a manifest script
pub fn script_task(name: String) -> Task {
    Task {
        command: Some(format!("{} run {}", MANIFEST_RUNNER, name)),
        description: MANIFEST_DESCRIPTION.to_string(),
        name,
        pipeline: Vec::new(),
    }
}
