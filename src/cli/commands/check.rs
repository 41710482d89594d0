use std::env;

use anyhow::{Context, Ok, Result};

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    config::{ConfigLoadResult, load_config},
    core::{
        ChartSource, build_report,
        discovery::{discover_chart_roots, validate_chart_roots},
        load_values_file,
    },
};

/// Run the check pipeline.
///
/// Every fatal condition (bad config, missing or unparsable manifest, invalid
/// chart root, missing or unparsable values file) is raised before the first
/// chart file is read.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let ConfigLoadResult { config, path } = load_config(&cwd)?;
    if let Some(path) = &path {
        log::info!(
            "Using config file: {}",
            path.strip_prefix(&cwd).unwrap_or(path).display()
        );
    }

    let source = match (cmd.charts_path, &cmd.manifest) {
        (Some(dir), None) => ChartSource::Directory(dir),
        (None, Some(manifest)) => ChartSource::Manifest(manifest.clone()),
        _ => anyhow::bail!("Exactly one of --charts-path or --manifest must be provided"),
    };

    let roots = discover_chart_roots(&source)?;
    validate_chart_roots(&roots)?;

    let values = load_values_file(&cmd.values_file)?;
    log::info!(
        "Successfully loaded values file: {} ({} top-level keys)",
        cmd.values_file.display(),
        values.top_level_len()
    );

    let report = build_report(&roots, &values, &config.ignore_patterns());

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            roots,
            values_file: cmd.values_file,
            manifest: cmd.manifest,
            report,
            format: cmd.format,
        }),
        exit_on_missing: cmd.strict || config.fail_on_missing,
    })
}
