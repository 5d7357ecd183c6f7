pub mod common;
pub mod definition;
pub mod listing;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use definition::{DuplicateFolders, ScaffoldDefinition, ScaffoldEntry};
pub use listing::Listing;
