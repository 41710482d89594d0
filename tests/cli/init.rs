use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .helmvarsrc.json

    ----- stderr -----
    ");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".helmvarsrc.json")?)?;
    assert_eq!(
        config,
        serde_json::json!({ "ignores": [], "failOnMissing": false })
    );

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("values.yaml", "a: 1\n")?;
    test.write_file("chart/a.yaml", "{{ .Values.a }}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .helmvarsrc.json

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.check_charts("chart", "values.yaml"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ================================================================================
    HELM VARIABLE REFERENCE CHECKER REPORT
    ================================================================================
    Chart root: chart
    Values file: values.yaml
    ================================================================================

    File: chart/a.yaml
    ----------------------------------------
      ✓ .Values.a

    ================================================================================
    SUMMARY: 1/1 variables found in values file (1 file scanned)
    ✓ All variables are present in the values file!
    ================================================================================

    ----- stderr -----
    [INFO  helmvars::cli::commands::check] Using config file: .helmvarsrc.json
    [INFO  helmvars::cli::commands::check] Successfully loaded values file: values.yaml (1 top-level keys)
    [INFO  helmvars::core::report] Found 1 Helm chart files to process
    [INFO  helmvars::core::report] Processing file: chart/a.yaml (1 variables found)
    [INFO  helmvars::core::report] Total variables processed: 1
    ");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".helmvarsrc.json", r#"{ "failOnMissing": true }"#)?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .helmvarsrc.json already exists
    ");

    assert_eq!(
        test.read_file(".helmvarsrc.json")?,
        r#"{ "failOnMissing": true }"#
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for checking that Helm chart .Values references are defined in a values file

    Usage: helmvars [COMMAND]

    Commands:
      check  Check that every .Values reference in the charts is defined in the values file
      init   Initialize a new .helmvarsrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
