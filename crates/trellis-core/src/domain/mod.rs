// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Trellis.
//!
//! This module contains the pure description of a skeleton with ZERO I/O.
//! Creating directories, touching files and walking trees are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem calls; paths are only built and checked
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Invariants at construction**: a `RelativePath` can never escape its root
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    definition::{
        DEFAULT_COLUMN, DuplicateFolders, ScaffoldDefinition, ScaffoldDefinitionBuilder,
        ScaffoldEntry,
    },
    listing::Listing,
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn web_app() -> ScaffoldDefinition {
        ScaffoldDefinition::builder("Web App")
            .entry("", ["index.html"])
            .entry("styles", ["main.css"])
            .entry("scripts", ["main.js", "panels/titlePanel.js"])
            .entry("", ["manifest.json"])
            .build()
            .unwrap()
    }

    // ========================================================================
    // RelativePath Tests
    // ========================================================================

    #[test]
    fn relative_path_accepts_nested() {
        let p = RelativePath::try_new("scripts/panels/titlePanel.js").unwrap();
        assert_eq!(p.to_string(), "scripts/panels/titlePanel.js");
        assert!(!p.is_root());
    }

    #[test]
    fn relative_path_drops_current_dir() {
        assert_eq!(
            RelativePath::try_new("./styles/./main.css").unwrap(),
            RelativePath::new("styles/main.css")
        );
    }

    #[test]
    fn relative_path_empty_is_root() {
        assert!(RelativePath::try_new("").unwrap().is_root());
        assert!(RelativePath::try_new(".").unwrap().is_root());
        assert_eq!(RelativePath::root(), RelativePath::new(""));
    }

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_rejects_traversal() {
        assert!(matches!(
            RelativePath::try_new("../outside.txt"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("scripts/../../outside.txt"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn relative_path_join_keeps_invariant() {
        let base = RelativePath::new("scripts");
        assert_eq!(
            base.join("panels/buttonsPanel.js").unwrap().to_string(),
            "scripts/panels/buttonsPanel.js"
        );
        assert!(base.join("../x").is_err());
        assert!(base.join("/x").is_err());
    }

    #[test]
    fn root_join_is_the_file_itself() {
        assert_eq!(
            RelativePath::root().join("index.html").unwrap(),
            RelativePath::new("index.html")
        );
    }

    #[test]
    #[should_panic]
    fn relative_path_new_panics_on_traversal() {
        RelativePath::new("../nope");
    }

    // ========================================================================
    // Definition Builder Tests
    // ========================================================================

    #[test]
    fn builder_keeps_declaration_order_and_repeats() {
        let def = web_app();
        assert_eq!(def.name(), "Web App");
        assert_eq!(def.column(), DEFAULT_COLUMN);
        assert_eq!(def.entries().len(), 4);
        assert!(def.entries()[0].folder().is_root());
        assert!(def.entries()[3].folder().is_root());
        assert_eq!(def.file_count(), 5);
    }

    #[test]
    fn builder_custom_column() {
        let def = ScaffoldDefinition::builder("x")
            .column("Files")
            .entry("", ["a"])
            .build()
            .unwrap();
        assert_eq!(def.column(), "Files");
    }

    #[test]
    fn builder_rejects_empty_definition() {
        let result = ScaffoldDefinition::builder("nothing").build();
        assert!(matches!(result, Err(DomainError::EmptyDefinition { .. })));
    }

    #[test]
    fn builder_rejects_blank_name() {
        let result = ScaffoldDefinition::builder("  ").entry("", ["a"]).build();
        assert!(matches!(result, Err(DomainError::InvalidDefinition(_))));
    }

    #[test]
    fn builder_rejects_empty_file_name() {
        for bad in ["", " ", "."] {
            let result = ScaffoldDefinition::builder("x").entry("styles", [bad]).build();
            assert!(
                matches!(result, Err(DomainError::EmptyFileName { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn builder_rejects_escaping_paths() {
        assert!(
            ScaffoldDefinition::builder("x")
                .entry("..", ["a.txt"])
                .build()
                .is_err()
        );
        assert!(
            ScaffoldDefinition::builder("x")
                .entry("styles", ["../../a.txt"])
                .build()
                .is_err()
        );
        assert!(
            ScaffoldDefinition::builder("x")
                .entry("/abs", ["a.txt"])
                .build()
                .is_err()
        );
    }

    #[test]
    fn folder_without_files_is_allowed() {
        let def = ScaffoldDefinition::builder("x")
            .entry("assets", Vec::<String>::new())
            .build()
            .unwrap();
        assert!(def.planned_files(DuplicateFolders::Union).unwrap().is_empty());
    }

    // ========================================================================
    // Duplicate Folder Tests
    // ========================================================================

    #[test]
    fn union_merges_repeated_root() {
        let merged = web_app().effective_entries(DuplicateFolders::Union).unwrap();
        assert_eq!(merged.len(), 3);

        let root = &merged[0];
        assert!(root.folder().is_root());
        assert_eq!(
            root.files(),
            &[RelativePath::new("index.html"), RelativePath::new("manifest.json")]
        );
    }

    #[test]
    fn union_drops_repeated_file_names() {
        let def = ScaffoldDefinition::builder("x")
            .entry("styles", ["a.css", "a.css"])
            .entry("styles", ["a.css", "b.css"])
            .build()
            .unwrap();
        let merged = def.effective_entries(DuplicateFolders::Union).unwrap();
        assert_eq!(
            merged[0].files(),
            &[RelativePath::new("a.css"), RelativePath::new("b.css")]
        );
    }

    #[test]
    fn last_wins_replaces_earlier_files_in_place() {
        let merged = web_app()
            .effective_entries(DuplicateFolders::LastWins)
            .unwrap();
        assert_eq!(merged.len(), 3);
        assert!(merged[0].folder().is_root());
        assert_eq!(merged[0].files(), &[RelativePath::new("manifest.json")]);
    }

    #[test]
    fn reject_flags_repeated_folder() {
        let err = web_app()
            .effective_entries(DuplicateFolders::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateFolder {
                folder: "<root>".into()
            }
        );
    }

    #[test]
    fn reject_passes_when_folders_are_unique() {
        let def = ScaffoldDefinition::builder("x")
            .entry("a", ["1"])
            .entry("b", ["2"])
            .build()
            .unwrap();
        assert_eq!(
            def.effective_entries(DuplicateFolders::Reject).unwrap().len(),
            2
        );
    }

    #[test]
    fn planned_files_are_root_relative_and_unique() {
        let def = ScaffoldDefinition::builder("x")
            .entry("scripts", ["panels/a.js"])
            .entry("scripts/panels", ["a.js", "b.js"])
            .build()
            .unwrap();
        let planned: Vec<String> = def
            .planned_files(DuplicateFolders::Union)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(planned, ["scripts/panels/a.js", "scripts/panels/b.js"]);
    }

    #[test]
    fn planned_files_follow_declaration_order() {
        let planned: Vec<String> = web_app()
            .planned_files(DuplicateFolders::Union)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            planned,
            [
                "index.html",
                "manifest.json",
                "styles/main.css",
                "scripts/main.js",
                "scripts/panels/titlePanel.js",
            ]
        );
    }

    // ========================================================================
    // Containment Tests
    // ========================================================================

    #[test]
    fn contained_paths_pass() {
        let root = Path::new("/tmp/site");
        assert!(DomainValidator::ensure_contained(root, &root.join("index.html")).is_ok());
        assert!(DomainValidator::ensure_contained(root, &root.join("a/./b/../c.js")).is_ok());
    }

    #[test]
    fn escaping_paths_fail() {
        let root = Path::new("/tmp/site");
        let escaped = PathBuf::from("/tmp/site/../other/x");
        assert!(matches!(
            DomainValidator::ensure_contained(root, &escaped),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn relative_root_containment() {
        assert!(DomainValidator::ensure_contained(Path::new("."), Path::new("./styles/a.css")).is_ok());
        assert!(DomainValidator::ensure_contained(Path::new("."), Path::new("../a.css")).is_err());
    }

    // ========================================================================
    // Listing Tests
    // ========================================================================

    #[test]
    fn listing_renders_slash_paths_and_sorts() {
        let paths = [RelativePath::new("styles/main.css"), RelativePath::new("index.html")];
        let listing = Listing::new("Web App", DEFAULT_COLUMN)
            .with_paths(paths.iter())
            .sorted();
        assert_eq!(listing.rows, ["index.html", "styles/main.css"]);
        assert_eq!(listing.len(), 2);
        assert!(!listing.is_empty());
    }

    #[test]
    fn errors_carry_suggestions_and_categories() {
        let err = DomainError::UnknownDefinition("nope".into());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("trellis list")));

        let err = DomainError::PathEscapesRoot { path: "../x".into() };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("..")));
    }
}
