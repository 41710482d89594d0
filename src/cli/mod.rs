use anyhow::Result;

use crate::cli::exit_code::exit_status_from_result;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result)?;

    Ok(exit_status_from_result(&result))
}

/// Initialize logging on stderr from the `-v` count. `RUST_LOG` is honoured.
///
/// Progress lines are logged at info level and shown by default. Records
/// carry no timestamp so that repeated runs print the same stderr.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
