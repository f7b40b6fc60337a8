//! `.env` loading

use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Environment file loaded from the project root
pub const ENV_FILE_NAME: &str = ".env";

/// Load `<root_dir>/.env` into the process environment.
///
/// Returns `Ok(false)` when there is no such file. Variables already present
/// in the environment are not overridden.
pub fn load_env_file(root_dir: &Path) -> ConfigResult<bool> {
    let path = root_dir.join(ENV_FILE_NAME);
    if !path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path(&path).map_err(|e| ConfigError::Environment {
        path: path.clone(),
        error: e.to_string(),
    })?;

    Ok(true)
}
