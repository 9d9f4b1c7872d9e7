//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, ExtnameCommand, RelationCommand,
    RelativeCommand, ResolveCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use segpath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for resolving and relating slash-separated paths.
#[derive(Parser)]
#[command(name = "segpath")]
#[command(version, about = "Resolve and relate slash-separated paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from this file instead of discovering one
    #[arg(long, value_name = "PATH", global = true, env = "SEGPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve every path within this base
    #[arg(long, value_name = "PATH", global = true, env = "SEGPATH_BASE")]
    pub base: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve segments into a canonical path
    Resolve(ResolveCommand),

    /// Compute the relative path from one path to another
    Relative(RelativeCommand),

    /// Describe how two paths relate
    Relation(RelationCommand),

    /// Print every component except the last
    Dirname(DirnameCommand),

    /// Print the last component
    Basename(BasenameCommand),

    /// Print the extension of the last component
    Extname(ExtnameCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Plain text, one value per line
    Text,
    /// A JSON object with the inputs and the result
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
