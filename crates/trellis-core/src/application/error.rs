//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the definition
//! itself. Definition errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing or reporting.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permission denied, invalid path, disk full).
    #[error("Filesystem error at {path}: failed to {operation}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Target path exists but is not a regular file.
    #[error("Path exists and is not a regular file: {path}")]
    PathConflict { path: PathBuf },

    /// The listing sink could not display the listing.
    #[error("Failed to display listing: {reason}")]
    SinkFailed { reason: String },

    /// Shared state lock poisoned (in-memory adapters).
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files created so far are kept; re-running is safe".into(),
            ],
            Self::PathConflict { path } => vec![
                format!("Move or remove '{}' and run again", path.display()),
                "Trellis never replaces existing directories with files".into(),
            ],
            Self::SinkFailed { .. } => vec![
                "The skeleton was created; only the listing failed".into(),
                "Try --output-format plain".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::SinkFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
            Self::PathConflict { .. } => ErrorCategory::Validation,
        }
    }
}
