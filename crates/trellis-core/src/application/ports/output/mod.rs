//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `trellis-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Listing;
use crate::error::TrellisResult;

/// Result of ensuring a file exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The file did not exist and was created empty.
    Created,
    /// The file was already there; its content was left alone.
    AlreadyPresent,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `trellis_adapters::filesystem::LocalFilesystem` (production)
/// - `trellis_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every operation is idempotent; the materializer relies on it to make
///   re-runs safe.
/// - Errors are `ApplicationError::Filesystem` or `ApplicationError::PathConflict`.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()>;

    /// Ensure an empty regular file exists at `path` without truncating an
    /// existing one. The parent directory must exist.
    fn touch(&self, path: &Path) -> TrellisResult<TouchOutcome>;

    /// Absolute form of `path` with every symlink that already exists
    /// followed. Components that do not exist yet are appended as written.
    fn resolve(&self, path: &Path) -> TrellisResult<PathBuf>;

    /// Every regular file below `root`, recursively, in traversal order.
    ///
    /// Returned paths are `root` joined with the file's relative location.
    fn walk_files(&self, root: &Path) -> TrellisResult<Vec<PathBuf>>;
}

/// Port for the display collaborator that shows a listing to a human.
///
/// Implemented by:
/// - `trellis_adapters::sink::MemorySink` (testing)
/// - the CLI's terminal renderer
#[cfg_attr(test, mockall::automock)]
pub trait ListingSink {
    /// Render the listing.
    fn display(&self, listing: &Listing) -> TrellisResult<()>;
}
