// crates/leanix-agent-mcp/src/tools.rs
// ============================================================================
// Module: MCP Tool Router
// Description: Tool routing for the LeanIX agent MCP server.
// Purpose: Expose thin wrappers over the catalog search client.
// Dependencies: leanix-agent-catalog, leanix-agent-core
// ============================================================================

//! ## Overview
//! The tool router dispatches MCP tool calls to the catalog search client.
//! Tool inputs are untrusted and strictly decoded. Catalog failures are caught
//! at this boundary and returned as structured tool results with a `status`
//! field, so the calling host model always receives a well-formed value it can
//! reason about instead of a transport-level fault.
//!
//! ## Invariants
//! - Unknown tools and malformed parameters stay JSON-RPC errors; only calls
//!   that reached the catalog produce `status = "error"` results.
//! - Raw catalog response bodies are never echoed back to the host.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use leanix_agent_catalog::CatalogError;
use leanix_agent_catalog::FactSheetSearch;
use leanix_agent_config::LeanixAgentConfig;
use leanix_agent_core::FactSheetMatch;
pub use leanix_agent_core::ToolDefinition;
use leanix_agent_core::ToolName;
use leanix_agent_core::tooling::tool_definitions;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Tool Router
// ============================================================================

/// Tool router for MCP requests.
#[derive(Clone)]
pub struct ToolRouter {
    /// Catalog search client shared across requests.
    search: Arc<FactSheetSearch>,
}

impl ToolRouter {
    /// Creates a new tool router over a catalog search client.
    #[must_use]
    pub fn new(search: FactSheetSearch) -> Self {
        Self {
            search: Arc::new(search),
        }
    }

    /// Creates a tool router from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog client cannot be built.
    pub fn from_config(config: &LeanixAgentConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(FactSheetSearch::from_config(config)?))
    }

    /// Lists the MCP tools supported by this server.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Handles a tool call by name with JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] when the tool is unknown or the parameters fail
    /// to decode. Catalog failures do not error here; they are folded into
    /// the structured result.
    pub fn handle_tool_call(&self, name: &str, payload: Value) -> Result<Value, ToolError> {
        let tool = ToolName::parse(name).ok_or(ToolError::UnknownTool)?;
        match tool {
            ToolName::GetFactSheets => self.handle_get_fact_sheets(payload),
        }
    }

    /// Handles `get_fact_sheets` tool requests.
    fn handle_get_fact_sheets(&self, payload: Value) -> Result<Value, ToolError> {
        let request = decode::<GetFactSheetsRequest>(payload)?;
        let outcome = match self.search.search(&request.app_name) {
            Ok(result) => GetFactSheetsOutcome::Success {
                response: FactSheetsPayload {
                    total_count: result.total_count,
                    fact_sheets: result.matches,
                },
            },
            Err(err) => GetFactSheetsOutcome::Error {
                error_message: err.to_string(),
            },
        };
        serde_json::to_value(outcome).map_err(|_| ToolError::Serialization)
    }
}

// ============================================================================
// SECTION: Tool Requests and Responses
// ============================================================================

/// `get_fact_sheets` request payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetFactSheetsRequest {
    /// Application name fragment to search for.
    pub app_name: String,
}

/// `get_fact_sheets` structured result.
///
/// Serialized with a `status` discriminator so the host model can branch on
/// success without inspecting JSON-RPC error machinery.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GetFactSheetsOutcome {
    /// The catalog search completed.
    Success {
        /// Search result payload.
        response: FactSheetsPayload,
    },
    /// The catalog search failed.
    Error {
        /// Human-readable failure description; never contains credentials.
        error_message: String,
    },
}

/// Successful `get_fact_sheets` payload.
#[derive(Debug, Clone, Serialize)]
pub struct FactSheetsPayload {
    /// Authoritative total match count reported by the catalog.
    pub total_count: u64,
    /// Matched fact sheets in catalog order.
    pub fact_sheets: Vec<FactSheetMatch>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Tool routing errors surfaced as JSON-RPC errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool name not recognized.
    #[error("unknown tool")]
    UnknownTool,
    /// Tool payload deserialization failed.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    /// Tool payload serialization failed.
    #[error("serialization failure")]
    Serialization,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes a tool payload into a typed request.
fn decode<T: for<'de> Deserialize<'de>>(payload: Value) -> Result<T, ToolError> {
    serde_json::from_value(payload).map_err(|err| ToolError::InvalidParams(err.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use serde_json::json;

    use super::GetFactSheetsRequest;
    use super::decode;

    #[test]
    fn request_decodes_app_name() {
        let request: GetFactSheetsRequest =
            decode(json!({"app_name": "billing"})).unwrap();
        assert_eq!(request.app_name, "billing");
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = decode::<GetFactSheetsRequest>(json!({
            "app_name": "billing",
            "limit": 5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_app_name_rejected() {
        let result = decode::<GetFactSheetsRequest>(json!({}));
        assert!(result.is_err());
    }
}
