//! In-crate filesystem fake for service tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TouchOutcome},
    },
    error::TrellisResult,
};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    denied: Vec<PathBuf>,
    links: Vec<(PathBuf, PathBuf)>,
    touches: usize,
}

impl State {
    /// `path` with the first matching link prefix swapped for its target.
    fn follow(&self, path: &Path) -> PathBuf {
        self.links
            .iter()
            .find_map(|(from, to)| path.strip_prefix(from).ok().map(|rest| to.join(rest)))
            .unwrap_or_else(|| path.to_path_buf())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeFilesystem {
    state: Arc<Mutex<State>>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every mutation at or below `prefix`.
    pub fn deny(&self, prefix: impl Into<PathBuf>) {
        self.state.lock().unwrap().denied.push(prefix.into());
    }

    /// Make `from` behave like a symlink to the directory `to`.
    pub fn link(&self, from: impl Into<PathBuf>, to: impl Into<PathBuf>) {
        self.state.lock().unwrap().links.push((from.into(), to.into()));
    }

    pub fn put_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            for ancestor in parent.ancestors() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        state.files.insert(path, content.to_string());
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.files.is_empty() && state.dirs.is_empty()
    }

    pub fn touch_count(&self) -> usize {
        self.state.lock().unwrap().touches
    }

    fn check(state: &State, path: &Path, operation: &'static str) -> TrellisResult<()> {
        if state.denied.iter().any(|d| path.starts_with(d)) {
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

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        let mut state = self.state.lock().unwrap();
        let path = &state.follow(path);
        Self::check(&state, path, "create directory")?;
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn touch(&self, path: &Path) -> TrellisResult<TouchOutcome> {
        let mut state = self.state.lock().unwrap();
        let path = &state.follow(path);
        Self::check(&state, path, "create file")?;
        state.touches += 1;

        if state.dirs.contains(path) {
            return Err(ApplicationError::PathConflict {
                path: path.to_path_buf(),
            }
            .into());
        }
        if state.files.contains_key(path) {
            return Ok(TouchOutcome::AlreadyPresent);
        }
        state.files.insert(path.to_path_buf(), String::new());
        Ok(TouchOutcome::Created)
    }

    fn resolve(&self, path: &Path) -> TrellisResult<PathBuf> {
        Ok(self.state.lock().unwrap().follow(path))
    }

    fn walk_files(&self, root: &Path) -> TrellisResult<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(root) {
            return Err(ApplicationError::Filesystem {
                path: root.to_path_buf(),
                operation: "read directory",
                reason: "No such file or directory".into(),
            }
            .into());
        }
        Ok(state
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect())
    }
}
