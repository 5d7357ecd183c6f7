//! Materializer - turns a scaffold definition into directories and empty files.
//!
//! Workflow:
//! 1. Validate the definition and resolve repeated folders
//! 2. Ensure each folder exists (parents included)
//! 3. Touch each file without truncating anything already there
//!
//! There is no rollback. Every step is idempotent, so a run that stops
//! halfway is completed by running again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TouchOutcome},
    domain::{
        DomainError, DomainValidator as validator, DuplicateFolders, RelativePath,
        ScaffoldDefinition,
    },
    error::{TrellisError, TrellisResult},
};

/// What a materialize run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub root: PathBuf,
    /// Files that did not exist before this run.
    pub created: Vec<RelativePath>,
    /// Files that were already present and left untouched.
    pub existing: Vec<RelativePath>,
    /// Folders ensured (one per effective entry).
    pub directories: usize,
}

impl MaterializeReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            created: Vec::new(),
            existing: Vec::new(),
            directories: 0,
        }
    }

    /// Number of files ensured, created or not.
    pub fn file_count(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

/// Creates the skeleton described by a [`ScaffoldDefinition`].
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    duplicates: DuplicateFolders,
}

impl Materializer {
    /// Create a materializer over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use trellis_core::application::{Materializer, ports::*};
    ///
    /// let materializer = Materializer::new(filesystem); // impl Filesystem
    /// let report = materializer.materialize("./site", &definition)?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            duplicates: DuplicateFolders::default(),
        }
    }

    /// Choose how repeated folders are handled (default: union).
    pub fn with_duplicate_folders(mut self, policy: DuplicateFolders) -> Self {
        self.duplicates = policy;
        self
    }

    /// Paths a run would touch, without touching anything.
    pub fn plan(&self, definition: &ScaffoldDefinition) -> TrellisResult<Vec<RelativePath>> {
        validator::validate_definition(definition)?;
        Ok(definition.planned_files(self.duplicates)?)
    }

    /// Ensure every folder and file of `definition` exists under `root`.
    ///
    /// Every folder and file is checked against the resolved root before it
    /// is created, so a symlink under the root cannot redirect a write
    /// outside it. The first error aborts the run and is returned unchanged.
    #[instrument(
        skip_all,
        fields(definition = %definition.name(), root = %root.as_ref().display())
    )]
    pub fn materialize(
        &self,
        root: impl AsRef<Path>,
        definition: &ScaffoldDefinition,
    ) -> TrellisResult<MaterializeReport> {
        let root = root.as_ref();

        validator::validate_definition(definition).map_err(TrellisError::Domain)?;
        let entries = definition.effective_entries(self.duplicates)?;

        let resolved_root = self.filesystem.resolve(root)?;
        let mut report = MaterializeReport::new(root);
        let mut touched = HashSet::new();

        for entry in &entries {
            let dir = if entry.folder().is_root() {
                root.to_path_buf()
            } else {
                root.join(entry.folder())
            };
            self.ensure_inside(&resolved_root, &dir)?;
            self.filesystem.create_dir_all(&dir)?;
            report.directories += 1;

            for file in entry.files() {
                let relative = entry.folder().join(file)?;
                if !touched.insert(relative.clone()) {
                    continue;
                }

                let path = dir.join(file);
                validator::ensure_contained(root, &path)?;

                if let Some(parent) = path.parent() {
                    if parent != dir {
                        self.ensure_inside(&resolved_root, parent)?;
                        self.filesystem.create_dir_all(parent)?;
                    }
                }
                self.ensure_inside(&resolved_root, &path)?;

                match self.filesystem.touch(&path)? {
                    TouchOutcome::Created => {
                        debug!(path = %relative, "created");
                        report.created.push(relative);
                    }
                    TouchOutcome::AlreadyPresent => {
                        debug!(path = %relative, "already present");
                        report.existing.push(relative);
                    }
                }
            }
        }

        info!(
            created = report.created.len(),
            existing = report.existing.len(),
            directories = report.directories,
            "Materialize completed"
        );
        Ok(report)
    }

    fn ensure_inside(&self, resolved_root: &Path, path: &Path) -> TrellisResult<()> {
        let resolved = self.filesystem.resolve(path)?;
        if resolved.starts_with(resolved_root) {
            Ok(())
        } else {
            debug!(path = %path.display(), resolved = %resolved.display(), "outside root");
            Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            }
            .into())
        }
    }
}
