//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve key expressions against the translation catalog
//! - `complete`: List completion candidates for a partially typed key
//! - `init`: Initialize keyref configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all lookup commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Namespace used by keys without one (overrides config file)
    #[arg(long)]
    pub default_namespace: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Literal key expressions, e.g. `common:title` or `menu.items.save`
    pub keys: Vec<String>,

    /// JSON file holding an array of fragment arrays for template keys
    #[arg(long)]
    pub fragments: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CompleteCommand {
    /// Partially typed key expression
    pub key: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve translation keys and report how far each one resolves
    Resolve(ResolveCommand),
    /// List completion candidates for a partially typed key
    Complete(CompleteCommand),
    /// Initialize a new .keyrefrc.json configuration file
    Init,
}
