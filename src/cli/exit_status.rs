use std::process::ExitCode;

use crate::core::RunReport;

/// Exit status of a `bundlegen` run.
///
/// - `Success` (0): every set was written, or the user chose to quit
/// - `Failure` (1): at least one translation set failed
/// - `Error` (2): the run could not start (config error, missing root, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&RunReport> for ExitStatus {
    fn from(report: &RunReport) -> Self {
        if report.failed_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
