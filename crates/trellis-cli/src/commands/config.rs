//! `trellis config`: read and write configuration values.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use crate::{
    cli::{ConfigCommands, DuplicatePolicy, OutputFormat},
    config::{AppConfig, KEYS, KeyKind, LOCAL_CONFIG_FILE, key_kind},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` file, which `set` edits instead of the
/// global file.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            output.data(&format!("{}\n", value.unwrap_or_default()))?;
        }

        ConfigCommands::Set { key, value, local } => {
            let path = if local {
                PathBuf::from(LOCAL_CONFIG_FILE)
            } else {
                explicit.unwrap_or_else(AppConfig::config_path)
            };
            set_value(&path, &key, &value)?;
            output.success(&format!("{key} = {value} ({})", path.display()))?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current Configuration:")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&format!("{}\n", AppConfig::config_path().display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    let known: Vec<&str> = KEYS.iter().map(|(k, _)| *k).collect();
    CliError::ConfigError {
        message: format!("Unknown config key '{key}' (known: {})", known.join(", ")),
        source: None,
    }
}

/// Update one key in the TOML file at `path`, creating the file if needed.
///
/// The edited document must still deserialise as an [`AppConfig`] before
/// it is written. An empty value removes a path key.
fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let kind = key_kind(key).ok_or_else(|| unknown_key(key))?;

    let mut document: toml::Table = if path.exists() {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&text).with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        toml::Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let table = document
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        })?;

    match parse_value(kind, raw)? {
        Some(value) => {
            table.insert(field.to_string(), value);
        }
        None => {
            table.remove(field);
        }
    }

    toml::Value::Table(document.clone())
        .try_into::<AppConfig>()
        .with_cli_context(|| format!("'{key}' cannot be '{raw}'"))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }

    let text = toml::to_string_pretty(&document).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!(key, path = %path.display(), "config updated");
    Ok(())
}

fn parse_value(kind: KeyKind, raw: &str) -> CliResult<Option<toml::Value>> {
    let invalid = |expected: &str| CliError::InvalidInput {
        message: format!("expected {expected}, got '{raw}'"),
        source: None,
    };

    Ok(match kind {
        KeyKind::Bool => Some(toml::Value::Boolean(
            raw.trim().parse().map_err(|_| invalid("true or false"))?,
        )),
        KeyKind::Format => {
            let format = OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| invalid("auto, human, plain, json or csv"))?;
            Some(toml::Value::String(format.to_string()))
        }
        KeyKind::Duplicates => {
            let policy = DuplicatePolicy::from_str(raw.trim(), true)
                .map_err(|_| invalid("union, last-wins or reject"))?;
            Some(toml::Value::String(policy.to_string()))
        }
        KeyKind::Path if raw.trim().is_empty() => None,
        KeyKind::Path | KeyKind::Text => {
            if raw.trim().is_empty() {
                return Err(invalid("a non-empty value"));
            }
            Some(toml::Value::String(raw.to_string()))
        }
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
