//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fieldcheck CLI - Rule-based form field validation
///
/// Validate single values against serialized rule lists, check Brazilian CPF
/// tax IDs, and run submit-time validation over whole form definitions.
#[derive(Parser, Debug)]
#[command(
    name = "fieldcheck",
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

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FIELDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: from config, else human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

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
    /// Validate a single value against a rule list
    Check(CheckArgs),

    /// Validate every field of a form definition, as on submit
    Form(FormArgs),

    /// Check a Brazilian CPF tax ID and explain any rejection
    TaxId(TaxIdArgs),

    /// List the available validation rules
    Rules,

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Value to validate
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Serialized rule list, e.g. "required|minLength:5|email"
    #[arg(short, long, value_name = "RULES")]
    pub rules: String,

    /// Reject unknown rules and malformed parameters instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the form command
#[derive(Parser, Debug)]
pub struct FormArgs {
    /// Path to the form definition (JSON, YAML, or TOML)
    #[arg(value_name = "DEFINITION")]
    pub definition: PathBuf,

    /// File with field values overriding those in the definition
    #[arg(long, value_name = "VALUES_FILE")]
    pub values: Option<PathBuf>,

    /// Reject unknown rules and malformed parameters instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the tax-id command
#[derive(Parser, Debug)]
pub struct TaxIdArgs {
    /// Tax ID to check; punctuation is ignored
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Destination file; the extension picks the format
    #[arg(long, default_value = ".fieldcheck.yaml")]
    pub path: PathBuf,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
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
    pub fn use_color(&self, configured: bool) -> bool {
        !self.no_color && configured && std::io::stdout().is_terminal()
    }

    /// Output format from the command line, falling back to the configured one
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        self.output.unwrap_or(configured)
    }
}

impl Commands {
    /// Subcommand name as typed on the command line
    ///
    /// Safe to record in logs; the arguments may carry field values.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Check(_) => "check",
            Commands::Form(_) => "form",
            Commands::TaxId(_) => "tax-id",
            Commands::Rules => "rules",
            Commands::Config(_) => "config",
            Commands::Completions(_) => "completions",
        }
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
