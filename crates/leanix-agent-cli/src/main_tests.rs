// crates/leanix-agent-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing in the CLI entry point.
// Purpose: Ensure the command surface stays stable and strictly parsed.
// Dependencies: leanix-agent-cli main helpers
// ============================================================================

//! ## Overview
//! Validates the clap command definitions and argument parsing rules.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use clap::CommandFactory;
use clap::Parser;

use super::Cli;
use super::Commands;
use super::ConfigCommand;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn serve_accepts_optional_config_path() {
    let cli = Cli::try_parse_from(["leanix-agent", "serve", "--config", "agent.toml"]).unwrap();
    match cli.command {
        Some(Commands::Serve(command)) => {
            assert_eq!(command.config.unwrap().to_str(), Some("agent.toml"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_requires_app_name() {
    let result = Cli::try_parse_from(["leanix-agent", "search"]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from(["leanix-agent", "search", "--app-name", "billing"]).unwrap();
    match cli.command {
        Some(Commands::Search(command)) => {
            assert_eq!(command.app_name, "billing");
            assert!(command.config.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn config_validate_parses() {
    let cli = Cli::try_parse_from(["leanix-agent", "config", "validate"]).unwrap();
    match cli.command {
        Some(Commands::Config {
            command: ConfigCommand::Validate(command),
        }) => assert!(command.config.is_none()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn version_flag_parses_without_subcommand() {
    let cli = Cli::try_parse_from(["leanix-agent", "--version"]).unwrap();
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}
