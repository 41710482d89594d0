use std::process::ExitCode;

use clap::Parser;
use helmvars::cli::{Arguments, ExitStatus, init_logging};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match helmvars::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
