//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use trellis_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TouchOutcome},
    },
    error::TrellisResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while a service owns
/// another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    read_only: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file with content, creating its parents (testing helper).
    pub fn write_file(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Make every mutation at or below `prefix` fail with permission denied.
    pub fn set_read_only(&self, prefix: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        inner.read_only.push(prefix.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// `true` if `path` is a file or directory.
    pub fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    /// `true` if `path` is a file.
    pub fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path, operation: &'static str) -> TrellisResult<()> {
        if self.read_only.iter().any(|p| path.starts_with(p)) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                operation,
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if !ancestor.as_os_str().is_empty() {
            directories.insert(ancestor.to_path_buf());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.directories.contains(path) {
            return Ok(());
        }
        inner.check_writable(path, "create directory")?;

        if let Some(file) = path.ancestors().find(|a| inner.files.contains_key(*a)) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                operation: "create directory",
                reason: format!("{} is a file", file.display()),
            }
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn touch(&self, path: &Path) -> TrellisResult<TouchOutcome> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.directories.contains(path) {
            return Err(ApplicationError::PathConflict {
                path: path.to_path_buf(),
            }
            .into());
        }
        if inner.files.contains_key(path) {
            return Ok(TouchOutcome::AlreadyPresent);
        }

        inner.check_writable(path, "create file")?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    operation: "create file",
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), Vec::new());
        Ok(TouchOutcome::Created)
    }

    /// No links exist in memory, so a path resolves to itself.
    fn resolve(&self, path: &Path) -> TrellisResult<PathBuf> {
        Ok(path.to_path_buf())
    }

    fn walk_files(&self, root: &Path) -> TrellisResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(root) {
            return Err(ApplicationError::Filesystem {
                path: root.to_path_buf(),
                operation: "read directory",
                reason: "No such file or directory".into(),
            }
            .into());
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect())
    }
}
