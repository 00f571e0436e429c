//! Integration tests for CLI argument handling
//!
//! Tests the startup flags and section/rover parsing from command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_stargaze"))
        .args(args)
        .output()
        .expect("Failed to execute stargaze")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stargaze"), "Help should mention stargaze");
    assert!(
        stdout.contains("--section"),
        "Help should mention the --section flag"
    );
    assert!(
        stdout.contains("--rover"),
        "Help should mention the --rover flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_invalid_section_prints_error_and_exits() {
    let output = run_cli(&["--section", "weather"]);
    assert!(!output.status.success(), "Expected invalid section to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid section"),
        "Should print error message about invalid section: {}",
        stderr
    );
}

#[test]
fn test_invalid_rover_prints_error_and_exits() {
    let output = run_cli(&["--rover", "perseverance"]);
    assert!(!output.status.success(), "Expected invalid rover to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid rover"),
        "Should print error message about invalid rover: {}",
        stderr
    );
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run_cli(&["--telescope"]);
    assert!(!output.status.success());
}

#[test]
fn test_section_with_help_is_accepted() {
    // This test just verifies the argument is accepted (doesn't error immediately)
    // The actual startup state is tested in unit tests
    let output = run_cli(&["--section", "asteroids", "--help"]);
    // With --help, it should succeed regardless of other flags
    // This is a workaround since we can't easily test TUI apps
    assert!(output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use stargaze::app::Section;
    use stargaze::cli::{parse_rover_arg, parse_section_arg, Cli, StartupConfig};
    use stargaze::data::Rover;

    #[test]
    fn test_cli_no_args_has_no_overrides() {
        let cli = Cli::parse_from(["stargaze"]);
        assert!(cli.section.is_none());
        assert!(cli.rover.is_none());
        assert!(cli.sol.is_none());
        assert!(cli.api_key.is_none());
    }

    #[test]
    fn test_parse_section_arg_accepts_apod_alias() {
        assert_eq!(parse_section_arg("apod").unwrap(), Section::Apod);
        assert_eq!(parse_section_arg("picture").unwrap(), Section::Apod);
    }

    #[test]
    fn test_parse_rover_arg_accepts_all_rovers() {
        assert_eq!(parse_rover_arg("curiosity").unwrap(), Rover::Curiosity);
        assert_eq!(parse_rover_arg("opportunity").unwrap(), Rover::Opportunity);
        assert_eq!(parse_rover_arg("spirit").unwrap(), Rover::Spirit);
    }

    #[test]
    fn test_rover_flag_opens_rover_section() {
        let cli = Cli::parse_from(["stargaze", "--rover", "spirit", "--sol", "70"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.section, Section::Rovers);
        assert_eq!(config.rover, Rover::Spirit);
        assert_eq!(config.sol, Some(70));
    }

    #[test]
    fn test_invalid_section_is_error() {
        let cli = Cli::parse_from(["stargaze", "--section", "weather"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_sol_validation_applies_at_runtime_not_parse_time() {
        // A sol past the mission cap parses fine; the section itself
        // reports the cap once the query runs
        let cli = Cli::parse_from(["stargaze", "--sol", "999999"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.sol, Some(999999));

        let result = stargaze::validation::validate_sol("curiosity", "999999");
        assert!(result.is_err());
    }
}
