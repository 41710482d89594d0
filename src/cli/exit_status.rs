use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): The report was produced. Missing variables alone do not fail the run.
/// - `Failure` (1): Strict mode found missing variables, or `init` found an existing config.
/// - `Error` (2): The run was aborted (bad paths, unreadable values or manifest, bad config).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The report was produced.
    Success,
    /// The command completed but strict checks failed.
    Failure,
    /// The command was aborted before producing a report.
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
