// crates/leanix-agent-cli/src/main.rs
// ============================================================================
// Module: LeanIX Agent CLI Entry Point
// Description: Command dispatcher for the LeanIX agent MCP server.
// Purpose: Provide server execution, one-shot search, and config validation.
// Dependencies: clap, leanix-agent-mcp, serde_json, thiserror, tokio
// ============================================================================

//! ## Overview
//! The LeanIX agent CLI starts the MCP server, runs one-shot catalog searches
//! for local inspection, and validates configuration files. One-shot search
//! output uses the same structured `status` result the MCP tool returns, so
//! operators see exactly what a host model would receive.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use leanix_agent_config::LeanixAgentConfig;
use leanix_agent_mcp::McpServer;
use leanix_agent_mcp::ToolRouter;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "leanix-agent", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the LeanIX agent MCP server.
    Serve(ServeCommand),
    /// Run a one-shot fact sheet search.
    Search(SearchCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to leanix-agent.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Configuration for the `search` command.
#[derive(Args, Debug)]
struct SearchCommand {
    /// Application name fragment to search for.
    #[arg(long = "app-name", value_name = "NAME")]
    app_name: String,
    /// Optional config file path (defaults to leanix-agent.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a LeanIX agent configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to leanix-agent.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("leanix-agent {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Search(command) => command_search(command).await,
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = LeanixAgentConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let server = tokio::task::spawn_blocking(move || McpServer::from_config(config))
        .await
        .map_err(|err| CliError::new(format!("server init join failed: {err}")))?
        .map_err(|err| CliError::new(format!("server init failed: {err}")))?;
    server
        .serve()
        .await
        .map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `search` command.
///
/// The search goes through the tool router so the printed value matches the
/// structured result an MCP host would receive.
async fn command_search(command: SearchCommand) -> CliResult<ExitCode> {
    let config = LeanixAgentConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let router = ToolRouter::from_config(&config)
        .map_err(|err| CliError::new(format!("catalog client init failed: {err}")))?;
    let app_name = command.app_name;
    let value = tokio::task::spawn_blocking(move || {
        router.handle_tool_call("get_fact_sheets", json!({ "app_name": app_name }))
    })
    .await
    .map_err(|err| CliError::new(format!("search join failed: {err}")))?
    .map_err(|err| CliError::new(format!("search failed: {err}")))?;
    let rendered = serde_json::to_string_pretty(&value)
        .map_err(|_| CliError::new("failed to render search result".to_string()))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    let failed = value.get("status").and_then(serde_json::Value::as_str) == Some("error");
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Executes `config` subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => {
            LeanixAgentConfig::load(command.config.as_deref())
                .map_err(|err| CliError::new(format!("invalid config: {err}")))?;
            write_stdout_line("configuration ok")
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
