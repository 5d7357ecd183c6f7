//! Scaffold definitions: which folders and files a skeleton consists of.

use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Column header used when a definition does not name its own.
pub const DEFAULT_COLUMN: &str = "Created Files";

/// One folder and the files to ensure inside it.
///
/// File names may contain sub-folders (`panels/titlePanel.js`); the
/// materializer creates the missing parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldEntry {
    folder: RelativePath,
    files: Vec<RelativePath>,
}

impl ScaffoldEntry {
    pub fn new(folder: RelativePath, files: Vec<RelativePath>) -> Self {
        Self { folder, files }
    }

    pub fn folder(&self) -> &RelativePath {
        &self.folder
    }

    pub fn files(&self) -> &[RelativePath] {
        &self.files
    }
}

/// What to do when the same folder is listed twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateFolders {
    /// Append the later file list to the first occurrence.
    #[default]
    Union,
    /// The later file list replaces the earlier one; the folder keeps its
    /// first position.
    LastWins,
    /// Treat the repeat as a configuration error.
    Reject,
}

/// An ordered sequence of scaffold entries.
///
/// Kept as a sequence rather than a map so a repeated folder is visible to
/// [`ScaffoldDefinition::effective_entries`] instead of silently replacing
/// the earlier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldDefinition {
    name: String,
    column: String,
    entries: Vec<ScaffoldEntry>,
}

impl ScaffoldDefinition {
    pub fn builder(name: impl Into<String>) -> ScaffoldDefinitionBuilder {
        ScaffoldDefinitionBuilder {
            name: name.into(),
            column: None,
            entries: Vec::new(),
        }
    }

    /// Human-facing title, also used as the listing title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header of the single listing column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Entries in declaration order, repeats included.
    pub fn entries(&self) -> &[ScaffoldEntry] {
        &self.entries
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyDefinition {
                name: self.name.clone(),
            });
        }

        for entry in &self.entries {
            if entry.files.iter().any(RelativePath::is_root) {
                return Err(DomainError::EmptyFileName {
                    folder: display_folder(&entry.folder),
                });
            }
        }

        Ok(())
    }

    /// Entries with repeated folders resolved according to `policy`.
    pub fn effective_entries(
        &self,
        policy: DuplicateFolders,
    ) -> Result<Vec<ScaffoldEntry>, DomainError> {
        let mut merged: Vec<ScaffoldEntry> = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            match (merged.iter_mut().find(|e| e.folder == entry.folder), policy) {
                (None, _) => {
                    merged.push(ScaffoldEntry::new(entry.folder.clone(), unique(&entry.files)));
                }
                (Some(_), DuplicateFolders::Reject) => {
                    return Err(DomainError::DuplicateFolder {
                        folder: display_folder(&entry.folder),
                    });
                }
                (Some(existing), DuplicateFolders::LastWins) => {
                    existing.files = unique(&entry.files);
                }
                (Some(existing), DuplicateFolders::Union) => {
                    for file in &entry.files {
                        if !existing.files.contains(file) {
                            existing.files.push(file.clone());
                        }
                    }
                }
            }
        }

        Ok(merged)
    }

    /// Every root-relative file path this definition yields, de-duplicated,
    /// in declaration order.
    pub fn planned_files(&self, policy: DuplicateFolders) -> Result<Vec<RelativePath>, DomainError> {
        let mut seen = HashSet::new();
        let mut planned = Vec::new();

        for entry in self.effective_entries(policy)? {
            for file in entry.files() {
                let path = entry.folder.join(file)?;
                if seen.insert(path.clone()) {
                    planned.push(path);
                }
            }
        }

        Ok(planned)
    }

    /// Total number of file names across all raw entries.
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }
}

fn unique(files: &[RelativePath]) -> Vec<RelativePath> {
    let mut seen = HashSet::new();
    files.iter().filter(|f| seen.insert(*f)).cloned().collect()
}

fn display_folder(folder: &RelativePath) -> String {
    if folder.is_root() {
        "<root>".to_string()
    } else {
        folder.to_string()
    }
}

/// Builder that collects raw strings and validates everything in `build`.
#[derive(Debug)]
pub struct ScaffoldDefinitionBuilder {
    name: String,
    column: Option<String>,
    entries: Vec<(String, Vec<String>)>,
}

impl ScaffoldDefinitionBuilder {
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn entry<I, S>(mut self, folder: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((folder.into(), files.into_iter().map(Into::into).collect()));
        self
    }

    pub fn build(self) -> Result<ScaffoldDefinition, DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidDefinition(
                "definition name cannot be empty".into(),
            ));
        }

        let mut entries = Vec::with_capacity(self.entries.len());
        for (folder, files) in self.entries {
            let folder = RelativePath::try_new(folder)?;
            let files = files
                .into_iter()
                .map(|f| {
                    if f.trim().is_empty() {
                        return Err(DomainError::EmptyFileName {
                            folder: display_folder(&folder),
                        });
                    }
                    RelativePath::try_new(f)
                })
                .collect::<Result<Vec<_>, _>>()?;
            entries.push(ScaffoldEntry::new(folder, files));
        }

        let definition = ScaffoldDefinition {
            name: self.name,
            column: self.column.unwrap_or_else(|| DEFAULT_COLUMN.to_string()),
            entries,
        };
        definition.validate()?;
        Ok(definition)
    }
}
