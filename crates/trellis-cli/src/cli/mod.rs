//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use trellis_core::domain::DuplicateFolders;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Empty web-app skeletons in one command",
    long_about = "Trellis lays down the folder and file skeleton of a web app: \
                  every folder is created, every file is touched empty, and \
                  nothing that already exists is overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 trellis new ./flowloops\n\
        \x20 trellis new site --definition my-skeleton.toml\n\
        \x20 trellis show --builtin flowloops-vanilla\n\
        \x20 trellis completions bash > /usr/share/bash-completion/completions/trellis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a skeleton and list what is under its root.
    #[command(
        visible_alias = "n",
        about = "Create a skeleton",
        after_help = "EXAMPLES:\n\
            \x20 trellis new                       # current directory\n\
            \x20 trellis new ./flowloops --strict\n\
            \x20 trellis new site -d skeleton.toml --dry-run"
    )]
    New(NewArgs),

    /// Show the files a definition would create.
    #[command(
        about = "Preview a definition",
        after_help = "EXAMPLES:\n\
            \x20 trellis show\n\
            \x20 trellis show --definition skeleton.toml --output-format json"
    )]
    Show(ShowArgs),

    /// List built-in definitions.
    #[command(
        visible_alias = "ls",
        about = "List built-in definitions",
        after_help = "EXAMPLES:\n\
            \x20 trellis list\n\
            \x20 trellis list --output-format csv"
    )]
    List(ListArgs),

    /// Initialise a Trellis configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 trellis init           # global config\n\
            \x20 trellis init --local   # .trellis.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trellis completions bash > ~/.local/share/bash-completion/completions/trellis\n\
            \x20 trellis completions zsh  > ~/.zfunc/_trellis\n\
            \x20 trellis completions fish > ~/.config/fish/completions/trellis.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Trellis configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trellis config get defaults.builtin\n\
            \x20 trellis config set defaults.duplicates last-wins\n\
            \x20 trellis config list"
    )]
    Config(ConfigCommands),
}

// ── definition selection ──────────────────────────────────────────────────────

/// Which definition to use. Shared by `new` and `show`.
#[derive(Debug, Clone, Default, Args)]
pub struct DefinitionArgs {
    /// Built-in definition name.
    #[arg(
        short = 'b',
        long = "builtin",
        value_name = "NAME",
        help = "Built-in definition (default: flowloops-vanilla)"
    )]
    pub builtin: Option<String>,

    /// TOML definition file.
    #[arg(
        short = 'd',
        long = "definition",
        value_name = "FILE",
        conflicts_with = "builtin",
        help = "Load the definition from a TOML file"
    )]
    pub definition: Option<PathBuf>,

    /// How a folder listed more than once is handled.
    #[arg(
        long = "duplicates",
        value_enum,
        value_name = "POLICY",
        help = "Repeated folders: union, last-wins or reject (default: config or union)"
    )]
    pub duplicates: Option<DuplicatePolicy>,

    /// Shorthand for `--duplicates reject`.
    #[arg(
        long = "strict",
        conflicts_with = "duplicates",
        help = "Treat a repeated folder as an error"
    )]
    pub strict: bool,
}

/// What to do with a folder that a definition lists more than once.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Every entry's files are created.
    #[default]
    Union,
    /// The later entry's files replace the earlier ones.
    LastWins,
    /// A repeated folder is an error.
    Reject,
}

impl From<DuplicatePolicy> for DuplicateFolders {
    fn from(policy: DuplicatePolicy) -> Self {
        match policy {
            DuplicatePolicy::Union => Self::Union,
            DuplicatePolicy::LastWins => Self::LastWins,
            DuplicatePolicy::Reject => Self::Reject,
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Union => "union",
            Self::LastWins => "last-wins",
            Self::Reject => "reject",
        };
        f.write_str(s)
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `trellis new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Scaffold root. Created if missing.
    #[arg(
        value_name = "ROOT",
        help = "Directory to scaffold into (default: config or current directory)"
    )]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub selection: DefinitionArgs,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the listing after materializing.
    #[arg(long = "no-report", help = "Do not list the files under the root")]
    pub no_report: bool,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: DefinitionArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Also print each definition's file count.
    #[arg(long = "long", short = 'l', help = "Include file counts")]
    pub long: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.trellis.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `trellis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `trellis config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.builtin`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
        /// Edit `./.trellis.toml` instead of the global file.
        #[arg(long = "local")]
        local: bool,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
