//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with error/warning counts
//! - `Err` if the command fails (e.g., invalid config, missing messages root)

use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary, OutputFormat},
    commands::{complete::complete, resolve::resolve},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Complete(cmd)) => complete(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                format: OutputFormat::Text,
                error_count: 0,
                warning_count: 0,
            })
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
