//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check `.Values` references in chart files against a values file
//! - `init`: Initialize helmvars configuration file

use std::path::PathBuf;

use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand, ValueEnum};

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

    /// Verbosity count of the command, 0 when it has none.
    pub fn verbose(&self) -> u8 {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init) | None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("chart_source")
        .required(true)
        .args(["charts_path", "manifest"])
))]
pub struct CheckCommand {
    /// Path to the directory containing Helm charts
    #[arg(long, value_name = "DIR")]
    pub charts_path: Option<String>,

    /// Manifest (BOM) file listing workloads with helm.chartPath entries
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Path to the values YAML file (e.g., values-dev.yaml)
    #[arg(long, value_name = "FILE")]
    pub values_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when any variable is missing
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every .Values reference in the charts is defined in the values file
    Check(CheckCommand),
    /// Initialize a new .helmvarsrc.json configuration file
    Init,
}
