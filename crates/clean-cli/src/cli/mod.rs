//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "clean",
    bin_name = "clean",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean Architecture boilerplate for Go projects",
    long_about = "clean creates the directory tree of a Clean Architecture Go project \
                  and grows its controllers, presenters, views, interactors, validators \
                  and models one use case at a time.",
    after_help = "EXAMPLES:\n\
        \x20 clean init\n\
        \x20 clean add interactor OrderHandler\n\
        \x20 clean add usecase AddItemToOrder to OrderHandler\n\
        \x20 clean set folder",
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
    /// Create the project tree in the current directory.
    #[command(
        about = "Initialise a project in the current directory",
        after_help = "The current directory must lie below a 'src' directory,\n\
            e.g. ~/go/src/github.com/ann/shop.\n\n\
            EXAMPLES:\n\
            \x20 clean init\n\
            \x20 clean init --yes"
    )]
    Init(InitArgs),

    /// Change project settings.
    #[command(subcommand, about = "Change project settings")]
    Set(SetCommands),

    /// Add an interactor or a use case.
    #[command(
        subcommand,
        about = "Add an interactor or a use case",
        after_help = "EXAMPLES:\n\
            \x20 clean add interactor OrderHandler\n\
            \x20 clean add usecase AddItemToOrder to OrderHandler"
    )]
    Add(AddCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 clean completions bash > ~/.local/share/bash-completion/completions/clean\n\
            \x20 clean completions zsh  > ~/.zfunc/_clean\n\
            \x20 clean completions fish > ~/.config/fish/completions/clean.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tool configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 clean config get project.record\n\
            \x20 clean config list\n\
            \x20 clean config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `clean init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── set ───────────────────────────────────────────────────────────────────────

/// Subcommands for `clean set`.
#[derive(Debug, Subcommand)]
pub enum SetCommands {
    /// Point the configuration record at the current directory.
    #[command(about = "Use the current directory as project root")]
    Folder,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Subcommands for `clean add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Declare an interactor and its controller, presenter, view and validator.
    #[command(visible_alias = "i", about = "Declare an interactor")]
    Interactor(AddInteractorArgs),

    /// Attach a use case to an interactor.
    #[command(
        visible_aliases = ["uc", "use-case"],
        about = "Attach a use case to an interactor"
    )]
    Usecase(AddUsecaseArgs),
}

/// Arguments for `clean add interactor`.
#[derive(Debug, Args)]
pub struct AddInteractorArgs {
    /// Interactor name; a trailing `.go` is ignored.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `clean add usecase <USECASE> to <INTERACTOR>`.
#[derive(Debug, Args)]
pub struct AddUsecaseArgs {
    /// Use case name.
    #[arg(value_name = "USECASE")]
    pub use_case: String,

    /// The keyword `to`, in any letter case.
    #[arg(value_name = "to", value_parser = parse_connective, hide_possible_values = true)]
    pub connective: String,

    /// Interactor the use case belongs to.
    #[arg(value_name = "INTERACTOR")]
    pub interactor: String,
}

fn parse_connective(value: &str) -> Result<String, String> {
    if value.eq_ignore_ascii_case("to") {
        Ok(value.to_string())
    } else {
        Err(format!(
            "expected the keyword 'to' between use case and interactor, found '{value}'"
        ))
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `clean completions`.
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

/// Subcommands for `clean config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the paths of the tool configuration and the project record.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
