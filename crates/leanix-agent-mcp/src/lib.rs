// crates/leanix-agent-mcp/src/lib.rs
// ============================================================================
// Module: LeanIX Agent MCP
// Description: MCP server exposing LeanIX catalog search to agent hosts.
// Purpose: Provide MCP tool adapters over the catalog search client.
// Dependencies: leanix-agent-catalog, axum, tokio
// ============================================================================

//! ## Overview
//! LeanIX Agent MCP exposes the catalog search client through the MCP tool
//! surface. The single tool, `get_fact_sheets`, returns structured results
//! with a `status` field so the calling host model can branch on failure
//! without parsing transport errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod server;
pub mod telemetry;
pub mod tools;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
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
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::LeanixAgentConfig;
pub use server::McpServer;
pub use server::McpServerError;
pub use telemetry::MCP_LATENCY_BUCKETS_MS;
pub use telemetry::McpMethod;
pub use telemetry::McpMetricEvent;
pub use telemetry::McpMetrics;
pub use telemetry::McpOutcome;
pub use telemetry::NoopMetrics;
pub use tools::GetFactSheetsRequest;
pub use tools::ToolError;
pub use tools::ToolRouter;
