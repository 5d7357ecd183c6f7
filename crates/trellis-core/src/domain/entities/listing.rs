use serde::{Deserialize, Serialize};

use crate::domain::entities::common::RelativePath;

/// Single-column tabular payload handed to a listing sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub column: String,
    pub rows: Vec<String>,
}

impl Listing {
    pub fn new(title: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            column: column.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_paths<'a>(mut self, paths: impl IntoIterator<Item = &'a RelativePath>) -> Self {
        self.rows
            .extend(paths.into_iter().map(RelativePath::to_slash_string));
        self
    }

    /// Sort rows lexically; traversal order is not stable across platforms.
    pub fn sorted(mut self) -> Self {
        self.rows.sort();
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
