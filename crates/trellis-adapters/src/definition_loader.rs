//! TOML scaffold definition loader.
//!
//! Parses a definition file into a domain [`ScaffoldDefinition`] so users can
//! lay down their own skeletons instead of a built-in one.
//!
//! # Definition file format
//!
//! ```toml
//! [scaffold]
//! name   = "FlowLoops Vanilla Scaffold"
//! column = "Created Files"          # optional listing column header
//!
//! [[entries]]
//! folder = ""                       # "" is the root
//! files  = ["index.html"]
//!
//! [[entries]]
//! folder = "scripts"
//! files  = ["main.js", "panels/titlePanel.js"]
//! ```
//!
//! Entries keep their order. A folder may appear more than once; how repeats
//! are resolved is up to the materializer's policy, not the loader.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};

use trellis_core::{
    application::ApplicationError,
    domain::{DomainError, ScaffoldDefinition},
    error::TrellisResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a definition file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DefinitionManifest {
    pub scaffold: ScaffoldSection,
    /// Folder entries, in order.
    #[serde(default)]
    pub entries: Vec<EntrySection>,
}

/// `[scaffold]` section: identity of the definition.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldSection {
    /// Display name, used as the listing title.
    pub name: String,
    /// Header of the listing column.
    pub column: Option<String>,
}

/// One entry under `[[entries]]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct EntrySection {
    /// Folder relative to the root; `""` or omitted is the root itself.
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl DefinitionManifest {
    /// Convert into a validated domain definition.
    pub fn into_definition(self) -> Result<ScaffoldDefinition, DomainError> {
        let mut builder = ScaffoldDefinition::builder(self.scaffold.name);
        if let Some(column) = self.scaffold.column {
            builder = builder.column(column);
        }
        for entry in self.entries {
            builder = builder.entry(entry.folder, entry.files);
        }
        builder.build()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Parse a definition from TOML text.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDefinition`] for malformed TOML or unknown
/// keys, and the builder's own error for invalid paths.
pub fn from_toml_str(raw: &str) -> Result<ScaffoldDefinition, DomainError> {
    let manifest: DefinitionManifest = toml::from_str(raw)
        .map_err(|e| DomainError::InvalidDefinition(e.message().to_string()))?;
    manifest.into_definition()
}

/// Read and parse a definition file.
///
/// # Errors
///
/// - `ApplicationError::Filesystem` if the file cannot be read.
/// - `DomainError` if it cannot be parsed or validated.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>) -> TrellisResult<ScaffoldDefinition> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation: "read definition",
        reason: e.to_string(),
    })?;

    let definition = from_toml_str(&raw).map_err(|e| match e {
        DomainError::InvalidDefinition(msg) => {
            DomainError::InvalidDefinition(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    debug!(
        name = %definition.name(),
        entries = definition.entries().len(),
        "loaded definition"
    );
    Ok(definition)
}
