// crates/leanix-agent-mcp/src/config.rs
// ============================================================================
// Module: MCP Configuration (Re-export)
// Description: Re-export canonical LeanIX agent config types.
// Purpose: Preserve MCP public API while centralizing config logic.
// Dependencies: leanix-agent-config
// ============================================================================

//! ## Overview
//! This module re-exports the canonical configuration model from
//! `leanix-agent-config` to keep MCP callers stable while enforcing a single
//! source of truth.

/// Re-export canonical config types and helpers.
pub use leanix_agent_config::*;
