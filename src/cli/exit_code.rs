use super::{
    commands::{CommandResult, CommandSummary},
    exit_status::ExitStatus,
};

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(init) if !init.created => ExitStatus::Failure,
        CommandSummary::Init(_) => ExitStatus::Success,
        CommandSummary::Check(check) => {
            if result.exit_on_missing && check.report.missing().next().is_some() {
                ExitStatus::Failure
            } else {
                ExitStatus::Success
            }
        }
    }
}
