//! Local filesystem adapter using std::fs and walkdir.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

use trellis_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TouchOutcome},
    },
    error::{TrellisError, TrellisResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn touch(&self, path: &Path) -> TrellisResult<TouchOutcome> {
        // create_new is atomic: a concurrent creator shows up as AlreadyExists
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(TouchOutcome::Created),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let metadata = fs::symlink_metadata(path)
                    .map_err(|e| map_io_error(path, e, "read metadata"))?;
                let file_type = metadata.file_type();

                // a link to a file counts as present; its target is never touched
                if file_type.is_symlink() && path.is_file() {
                    return Ok(TouchOutcome::AlreadyPresent);
                }
                if !file_type.is_file() {
                    return Err(ApplicationError::PathConflict {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                refresh_modified(path);
                Ok(TouchOutcome::AlreadyPresent)
            }
            Err(e) => Err(map_io_error(path, e, "create file")),
        }
    }

    fn resolve(&self, path: &Path) -> TrellisResult<PathBuf> {
        let absolute =
            std::path::absolute(path).map_err(|e| map_io_error(path, e, "resolve path"))?;

        for existing in absolute.ancestors() {
            match fs::canonicalize(existing) {
                Ok(mut resolved) => {
                    // nothing below `existing` is on disk yet, so no links to follow
                    let missing = absolute.strip_prefix(existing).unwrap_or(Path::new(""));
                    for component in missing.components() {
                        match component {
                            Component::ParentDir => {
                                resolved.pop();
                            }
                            Component::CurDir => {}
                            other => resolved.push(other),
                        }
                    }
                    return Ok(resolved);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(map_io_error(existing, e, "resolve path")),
            }
        }

        Ok(absolute)
    }

    fn walk_files(&self, root: &Path) -> TrellisResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                let reason = e.to_string();
                ApplicationError::Filesystem {
                    path,
                    operation: "read directory",
                    reason,
                }
            })?;

            let file_type = entry.file_type();
            // symlinks count when they point at a regular file
            if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Bump mtime like `touch(1)`. Content is never opened for writing.
fn refresh_modified(path: &Path) {
    let result = File::open(path).and_then(|f| f.set_modified(SystemTime::now()));
    if let Err(e) = result {
        debug!(path = %path.display(), error = %e, "could not refresh modification time");
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> TrellisError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
