//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Serializable CLI - run the Serializable behavior over stored documents
///
/// Loads a schema document describing record types and their associations,
/// then decodes (fetch) or encodes (save) the configured fields of a JSON or
/// YAML document the way a host ORM would around reads and writes.
#[derive(Parser, Debug)]
#[command(
    name = "serializable",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a configuration document holding the global Serializable block
    #[arg(short, long, global = true, env = "SERIALIZABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode configured fields in a fetched result set
    Fetch(FetchArgs),

    /// Encode configured fields in data about to be saved
    Save(SaveArgs),

    /// Show every alias a record type's fields are searched under
    Aliases(AliasesArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Schema selection shared by every transform command
#[derive(Parser, Debug)]
pub struct ModelArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(short, long, value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Alias or name of the record type to run as
    #[arg(short, long)]
    pub model: String,
}

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Path to the result set document (JSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the save command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Path to the data document (JSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Run the after-save hook too, restoring the in-memory form
    #[arg(long)]
    pub restore: bool,

    /// Treat the save as creating a new record
    #[arg(long, requires = "restore")]
    pub created: bool,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the aliases command
#[derive(Parser, Debug)]
pub struct AliasesArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fetch_parsing() {
        let cli = Cli::parse_from([
            "serializable",
            "fetch",
            "results.json",
            "--schema",
            "schema.yaml",
            "--model",
            "Category",
        ]);

        match cli.command {
            Commands::Fetch(args) => {
                assert_eq!(args.document, PathBuf::from("results.json"));
                assert_eq!(args.model.schema, PathBuf::from("schema.yaml"));
                assert_eq!(args.model.model, "Category");
                assert!(args.output_file.is_none());
            }
            other => panic!("Expected fetch command, got {:?}", other),
        }
        assert_eq!(cli.output, OutputFormat::Human);
    }

    #[test]
    fn test_save_parsing() {
        let cli = Cli::parse_from([
            "serializable",
            "-o",
            "yaml",
            "save",
            "data.yaml",
            "-s",
            "schema.json",
            "-m",
            "Item",
            "--restore",
            "--created",
        ]);

        match cli.command {
            Commands::Save(args) => {
                assert!(args.restore);
                assert!(args.created);
                assert_eq!(args.model.model, "Item");
            }
            other => panic!("Expected save command, got {:?}", other),
        }
        assert_eq!(cli.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_created_requires_restore() {
        let result = Cli::try_parse_from([
            "serializable",
            "save",
            "data.json",
            "--schema",
            "schema.json",
            "--model",
            "Item",
            "--created",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from([
            "serializable",
            "-vv",
            "aliases",
            "--schema",
            "schema.yaml",
            "--model",
            "Category",
        ]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from([
            "serializable",
            "--quiet",
            "aliases",
            "--schema",
            "schema.yaml",
            "--model",
            "Category",
        ]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["serializable", "-q", "-v", "completions", "bash"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_completions_parsing() {
        let cli = Cli::parse_from(["serializable", "completions", "zsh"]);
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell.to_clap_shell(), clap_complete::Shell::Zsh);
            }
            other => panic!("Expected completions command, got {:?}", other),
        }
    }
}
