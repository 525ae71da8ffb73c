pub mod complete;
mod context;
mod key_report;
pub mod resolve;

pub use super::args::OutputFormat;
pub use context::ResolveContext;
pub use key_report::KeyReport;

use super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Resolve(ResolveSummary),
    Complete(CompleteSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub reports: Vec<KeyReport>,
    /// Number of translation documents the keys were resolved against.
    pub document_count: usize,
}

#[derive(Debug)]
pub struct CompleteSummary {
    /// The key as typed.
    pub key: String,
    /// Completion remainders, de-duplicated in first-seen order.
    pub variants: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running keyref commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
    pub error_count: usize,
    pub warning_count: usize,
}

impl CommandResult {
    /// Errors fail the run; warnings alone do not.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
