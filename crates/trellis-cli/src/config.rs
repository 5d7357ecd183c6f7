//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TRELLIS_<SECTION>__<KEY>`, e.g.
//!    `TRELLIS_DEFAULTS__DUPLICATES=last-wins`
//! 3. File given with `--config`
//! 4. `./.trellis.toml`
//! 5. Global file (`trellis config path`)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use trellis_adapters::builtin_definitions::DEFAULT_BUILTIN;

use crate::cli::{DuplicatePolicy, OutputFormat};

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".trellis.toml";

const ENV_PREFIX: &str = "TRELLIS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `new` and `show`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Scaffold root when `new` gets no ROOT argument.
    pub root: Option<PathBuf>,
    /// Built-in definition used when neither `--builtin` nor
    /// `--definition` is given.
    pub builtin: String,
    /// Definition file used instead of a built-in, if set.
    pub definition: Option<PathBuf>,
    /// How a folder listed more than once is handled.
    pub duplicates: DuplicatePolicy,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root: None,
            builtin: DEFAULT_BUILTIN.into(),
            definition: None,
            duplicates: DuplicatePolicy::Union,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

/// Value shape of a settable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Text,
    Path,
    Bool,
    Format,
    Duplicates,
}

/// Every key `config get` and `config set` understand.
pub const KEYS: &[(&str, KeyKind)] = &[
    ("defaults.root", KeyKind::Path),
    ("defaults.builtin", KeyKind::Text),
    ("defaults.definition", KeyKind::Path),
    ("defaults.duplicates", KeyKind::Duplicates),
    ("output.no_color", KeyKind::Bool),
    ("output.format", KeyKind::Format),
];

/// Kind of a known key, `None` if the key is unknown.
pub fn key_kind(key: &str) -> Option<KeyKind> {
    KEYS.iter().find(|(k, _)| *k == key).map(|(_, kind)| *kind)
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path passed via `--config`; unlike the global
    /// and local files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    /// Load with explicit file locations.
    pub fn load_from(global: &Path, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(toml_file(global).required(false))
            .add_source(toml_file(local).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "using explicit config file");
            builder = builder.add_source(toml_file(path).required(true));
        }

        let merged = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        merged
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.trellis.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "trellis", "trellis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key. `Ok(None)` for a known key with no value.
    pub fn get(&self, key: &str) -> Option<Option<String>> {
        key_kind(key)?;
        let tree = serde_json::to_value(self).ok()?;
        let pointer = format!("/{}", key.replace('.', "/"));
        Some(match tree.pointer(&pointer)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }
}

fn toml_file(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path).format(config::FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_in(tmp: &TempDir, explicit: Option<&Path>) -> AppConfig {
        AppConfig::load_from(
            &tmp.path().join("global.toml"),
            &tmp.path().join(LOCAL_CONFIG_FILE),
            explicit,
        )
        .unwrap()
    }

    #[test]
    fn defaults_without_files() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_in(&tmp, None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.defaults.builtin, DEFAULT_BUILTIN);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn local_file_overrides_global() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("global.toml"),
            "[defaults]\nduplicates = \"last-wins\"\nroot = \"g\"\n",
        )
        .unwrap();
        fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "[defaults]\nroot = \"l\"\n").unwrap();

        let cfg = load_in(&tmp, None);
        assert_eq!(cfg.defaults.duplicates, DuplicatePolicy::LastWins);
        assert_eq!(cfg.defaults.root, Some(PathBuf::from("l")));
    }

    #[test]
    fn explicit_file_wins_over_local() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "[output]\nformat = \"csv\"\n").unwrap();
        let explicit = tmp.path().join("custom.conf");
        fs::write(&explicit, "[output]\nformat = \"json\"\n").unwrap();

        let cfg = load_in(&tmp, Some(&explicit));
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = AppConfig::load_from(
            &tmp.path().join("global.toml"),
            &tmp.path().join(LOCAL_CONFIG_FILE),
            Some(&tmp.path().join("absent.toml")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn bad_value_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("global.toml"), "[output]\nformat = \"fancy\"\n").unwrap();
        let result = AppConfig::load_from(
            &tmp.path().join("global.toml"),
            &tmp.path().join(LOCAL_CONFIG_FILE),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.get("defaults.builtin"),
            Some(Some(DEFAULT_BUILTIN.to_string()))
        );
        assert_eq!(cfg.get("defaults.duplicates"), Some(Some("union".into())));
        assert_eq!(cfg.get("defaults.root"), Some(None));
        assert_eq!(cfg.get("output.format"), Some(Some("auto".into())));
        assert_eq!(cfg.get("defaults.lang"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
