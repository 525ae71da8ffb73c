use std::process::ExitCode;

/// Process exit status of a keyref run.
///
/// - `Success` (0): every key resolved, or only warnings were reported
/// - `Failure` (1): at least one key has an error-severity status
/// - `Error` (2): the run itself failed (bad config, missing messages root, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
