//! Task file discovery and decoding

use crate::config::manifest::{parse_manifest, MANIFEST_FILE_NAME};
use crate::config::model::Config;
use crate::config::schema::finalize;
use crate::config::types::TaskFile;
use crate::error::{ConfigError, ConfigResult};
use crate::fs::{FileSystem, RealFileSystem};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Task file names to search for, in order of preference
pub const TASK_FILE_NAMES: &[&str] = &["_tasks.yml", "_tasks.yaml"];

/// Locate the configuration starting from the current directory
pub fn locate_from_current_dir() -> ConfigResult<Config> {
    let cwd = env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    locate(&cwd)
}

/// Locate the configuration starting from `start_dir` on the real filesystem
pub fn locate(start_dir: &Path) -> ConfigResult<Config> {
    locate_with(&RealFileSystem, start_dir)
}

/// Walk from `start_dir` towards the root and load the first directory that
/// holds a task file, a manifest, or both.
///
/// `start_dir` should be absolute; a relative path stops at its first component.
pub fn locate_with(fs: &dyn FileSystem, start_dir: &Path) -> ConfigResult<Config> {
    for dir in start_dir.ancestors() {
        let task_file = find_task_file(fs, dir)?;

        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let has_manifest = fs
            .is_file(&manifest_path)
            .map_err(|e| io_error(&manifest_path, e))?;

        if task_file.is_none() && !has_manifest {
            continue;
        }

        let file = match task_file {
            Some(path) => Some(read_task_file(fs, &path)?),
            None => None,
        };

        let manifest_tasks = if has_manifest {
            let contents = fs
                .read_to_string(&manifest_path)
                .map_err(|e| io_error(&manifest_path, e))?;
            parse_manifest(&contents, &manifest_path)?
        } else {
            Vec::new()
        };

        return finalize(file, manifest_tasks, dir.to_path_buf());
    }

    Err(ConfigError::NotFound(start_dir.to_path_buf()))
}

/// Load a specific task file, bypassing discovery and manifests
pub fn load_task_file(path: &Path) -> ConfigResult<Config> {
    load_task_file_with(&RealFileSystem, path)
}

pub fn load_task_file_with(fs: &dyn FileSystem, path: &Path) -> ConfigResult<Config> {
    let file = read_task_file(fs, path)?;
    let root_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    finalize(Some(file), Vec::new(), root_dir)
}

/// Parse a configuration from a string, rooted at the current directory
pub fn parse_config(yaml: &str) -> ConfigResult<Config> {
    let file = decode_task_file(yaml, Path::new("<inline>"))?;
    finalize(Some(file), Vec::new(), PathBuf::from("."))
}

/// Decode task file contents
pub fn decode_task_file(contents: &str, path: &Path) -> ConfigResult<TaskFile> {
    // An empty document decodes to null, treat it as a file with no tasks
    if contents.trim().is_empty() {
        return Ok(TaskFile::default());
    }

    serde_yaml::from_str(contents).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn find_task_file(fs: &dyn FileSystem, dir: &Path) -> ConfigResult<Option<PathBuf>> {
    for file_name in TASK_FILE_NAMES {
        let path = dir.join(file_name);
        if fs.is_file(&path).map_err(|e| io_error(&path, e))? {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn read_task_file(fs: &dyn FileSystem, path: &Path) -> ConfigResult<TaskFile> {
    let contents = fs.read_to_string(path).map_err(|e| io_error(path, e))?;
    decode_task_file(&contents, path)
}

fn io_error(path: &Path, source: io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}
