//! Built-in scaffold definitions.
//!
//! These ship inside the binary, so `trellis new` works with no files on
//! disk. Each is addressed by a short kebab-case name.

use tracing::debug;

use trellis_core::domain::{DomainError, ScaffoldDefinition};

/// Name used when the caller does not pick a definition.
pub const DEFAULT_BUILTIN: &str = "flowloops-vanilla";

/// Catalogue entry for one built-in definition.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDefinition {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Result<ScaffoldDefinition, DomainError>,
}

impl BuiltinDefinition {
    pub fn definition(&self) -> Result<ScaffoldDefinition, DomainError> {
        (self.build)()
    }
}

const BUILTINS: &[BuiltinDefinition] = &[BuiltinDefinition {
    name: DEFAULT_BUILTIN,
    description: "Vanilla HTML/CSS/JS timer app: styles, scripts with panels, sounds, icons, PWA manifest",
    build: flowloops_vanilla,
}];

/// Every built-in definition, in display order.
pub fn all() -> &'static [BuiltinDefinition] {
    BUILTINS
}

/// Look up a built-in by name (case-insensitive).
pub fn get(name: &str) -> Result<ScaffoldDefinition, DomainError> {
    let wanted = name.trim().to_ascii_lowercase();
    let builtin = BUILTINS
        .iter()
        .find(|b| b.name == wanted)
        .ok_or_else(|| DomainError::UnknownDefinition(name.to_string()))?;

    debug!(name = builtin.name, "using built-in definition");
    builtin.definition()
}

/// The FlowLoops vanilla web-app skeleton.
///
/// The root folder is listed twice. Under the default union policy both
/// entries apply and the skeleton has 15 files; under last-wins the second
/// root entry replaces the first, `index.html` is dropped and 14 remain.
pub fn flowloops_vanilla() -> Result<ScaffoldDefinition, DomainError> {
    ScaffoldDefinition::builder("FlowLoops Vanilla Scaffold")
        .column("Created Files")
        .entry("", ["index.html"])
        .entry("styles", ["tailwind.css", "animations.css", "main.css"])
        .entry(
            "scripts",
            [
                "main.js",
                "timerManager.js",
                "notificationManager.js",
                "panels/titlePanel.js",
                "panels/buttonsPanel.js",
                "panels/historySidebar.js",
            ],
        )
        // placeholder only, no media
        .entry("sounds", ["click.mp3"])
        .entry("icons", ["icon-192.png", "icon-512.png"])
        .entry("", ["manifest.json", "service-worker.js"])
        .build()
}
