use std::path::{Component, Path, PathBuf};

use crate::domain::{entities::ScaffoldDefinition, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_definition(definition: &ScaffoldDefinition) -> Result<(), DomainError> {
        definition.validate()
    }

    /// Lexically check that `path` stays inside `root`.
    ///
    /// Neither path is touched on disk; `..` is resolved against the
    /// components seen so far.
    pub fn ensure_contained(root: &Path, path: &Path) -> Result<(), DomainError> {
        let root = lexical_normalize(root);
        let candidate = lexical_normalize(path);

        match candidate.strip_prefix(&root) {
            Ok(rest) if !rest.components().any(|c| c == Component::ParentDir) => Ok(()),
            _ => Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            }),
        }
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
