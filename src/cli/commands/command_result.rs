use std::path::PathBuf;

use crate::{
    cli::args::OutputFormat,
    core::{ChartRoot, Report},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Chart roots in discovery order.
    pub roots: Vec<ChartRoot>,
    pub values_file: PathBuf,
    /// Set when the roots came from a manifest.
    pub manifest: Option<PathBuf>,
    pub report: Report,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running helmvars commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, a report with missing variables exits with status 1.
    /// If false, missing variables are reported but the run still succeeds.
    pub exit_on_missing: bool,
}
