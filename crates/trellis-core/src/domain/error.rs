// ============================================================================
// domain/error.rs - DEFINITION & PATH ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid scaffold definition: {0}")]
    InvalidDefinition(String),

    #[error("Scaffold definition '{name}' has no entries")]
    EmptyDefinition { name: String },

    #[error("Empty file name in folder '{folder}'")]
    EmptyFileName { folder: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the scaffold root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Folder '{folder}' appears more than once in the definition")]
    DuplicateFolder { folder: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No built-in definition named '{0}'")]
    UnknownDefinition(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDefinition(msg) => vec![
                "Check your definition file".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyDefinition { name } => vec![
                format!("Definition '{}' must list at least one folder", name),
                "Add an [[entries]] table with a folder and files".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Offending path: {}", path),
                "Folders and files must be relative to the scaffold root".into(),
                "Remove leading '/' and any '..' components".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("Offending path: {}", path),
                "Remove any '..' components from the definition".into(),
                "Check for symlinks under the root that point outside it".into(),
            ],
            Self::DuplicateFolder { folder } => vec![
                format!("Merge the file lists for '{}' into one entry", folder),
                "Or pass --duplicates union or --duplicates last-wins".into(),
            ],
            Self::UnknownDefinition(_) => vec![
                "List built-in definitions: trellis list".into(),
                "Or load one from a file with --definition".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDefinition(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
