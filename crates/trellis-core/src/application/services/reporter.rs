//! Reporter - lists what exists under a scaffold root.
//!
//! Separated from the materializer: it does not know which definition was
//! used and reports every regular file under the root, including files that
//! were there before the run.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, ListingSink},
    domain::{Listing, RelativePath},
    error::TrellisResult,
};

/// Service for listing and displaying the files under a root.
pub struct Reporter {
    filesystem: Box<dyn Filesystem>,
}

impl Reporter {
    /// Create a new reporter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Every regular file under `root`, relative to `root`.
    ///
    /// Order is whatever the filesystem traversal yields; callers that need
    /// determinism sort explicitly.
    pub fn list_created_files(&self, root: impl AsRef<Path>) -> TrellisResult<Vec<RelativePath>> {
        let root = root.as_ref();
        let mut listed = Vec::new();

        for path in self.filesystem.walk_files(root)? {
            let relative = path
                .strip_prefix(root)
                .ok()
                .and_then(|rel| RelativePath::try_new(rel).ok())
                .filter(|rel| !rel.is_root());

            match relative {
                Some(rel) => listed.push(rel),
                None => warn!(path = %path.display(), "skipping path outside root"),
            }
        }

        Ok(listed)
    }

    /// Build a listing of `root` and hand it to `sink`.
    ///
    /// Returns the number of rows displayed.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn report(
        &self,
        root: impl AsRef<Path>,
        title: &str,
        column: &str,
        sink: &dyn ListingSink,
    ) -> TrellisResult<usize> {
        let files = self.list_created_files(root)?;
        let listing = Listing::new(title, column).with_paths(files.iter());

        sink.display(&listing)?;
        info!(rows = listing.len(), "Listing displayed");
        Ok(listing.len())
    }
}
