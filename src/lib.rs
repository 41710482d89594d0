//! helmvars - Helm chart `.Values` reference checker
//!
//! helmvars scans Helm chart templates for `{{ .Values.<path> }}` references
//! and reports every reference that is not defined in a values file. Chart
//! roots are given directly or listed in a manifest (BOM) file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, extraction, resolution and report aggregation

pub mod cli;
pub mod config;
pub mod core;
