// crates/leanix-agent-core/src/tooling.rs
// ============================================================================
// Module: MCP Tool Contracts
// Description: Canonical MCP tool definitions and schemas for the LeanIX agent.
// Purpose: Provide tool contracts for MCP listing and host-side dispatch.
// Dependencies: serde_json, leanix-agent-core::types
// ============================================================================

//! ## Overview
//! This module defines the canonical MCP tool surface. The agent host reads
//! these definitions from `tools/list` and decides, based on the
//! natural-language description, when to invoke each tool.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::ToolDefinition;
use crate::types::ToolName;

// ============================================================================
// SECTION: Tool Contracts
// ============================================================================

/// Returns the canonical MCP tool definitions.
///
/// The order is intentional: it is preserved in tool listings to keep client
/// behavior stable across releases. Append new tools at the end.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![get_fact_sheets_definition()]
}

/// Builds the tool definition for `get_fact_sheets`.
fn get_fact_sheets_definition() -> ToolDefinition {
    ToolDefinition {
        name: ToolName::GetFactSheets,
        description: "Search the LeanIX application landscape for fact sheets whose name \
                      matches a free-text fragment. Returns matching application ids and \
                      names plus the authoritative total match count. Use when the user asks \
                      which applications exist in the landscape or asks about a specific \
                      application by name or partial name."
            .to_string(),
        input_schema: get_fact_sheets_input_schema(),
    }
}

/// Builds the strict input schema for `get_fact_sheets`.
fn get_fact_sheets_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "app_name": {
                "type": "string",
                "description": "Application name or substring to search for. \
                                An empty string is allowed and yields zero matches."
            }
        },
        "required": ["app_name"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
