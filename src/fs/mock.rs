//! In-memory filesystem for tests

use super::FileSystem;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
    denied: RefCell<HashSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Make every access under `dir` fail with `PermissionDenied`.
    pub fn deny(&self, dir: impl AsRef<Path>) {
        self.denied.borrow_mut().insert(dir.as_ref().to_path_buf());
    }

    fn check_access(&self, path: &Path) -> io::Result<()> {
        let denied = self.denied.borrow();
        if path.ancestors().any(|a| denied.contains(a)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> io::Result<bool> {
        self.check_access(path)?;
        Ok(self.files.borrow().contains_key(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.check_access(path)?;
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
        })
    }
}
