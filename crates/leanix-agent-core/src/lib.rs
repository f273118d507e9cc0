// crates/leanix-agent-core/src/lib.rs
// ============================================================================
// Module: LeanIX Agent Core
// Description: Domain types and tool contracts for the LeanIX agent.
// Purpose: Provide the shared vocabulary for catalog access and MCP listing.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the domain model shared by the catalog client, the MCP
//! tool router, and the CLI: fact sheet search results, secret-bearing token
//! wrappers, and the canonical tool contracts exposed to agent hosts.
//! Invariants:
//! - Secret wrappers never reveal their contents through `Debug` or serde.
//! - Tool contracts are the single source of truth for the MCP tool surface.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod tooling;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use tooling::tool_definitions;
pub use types::AccessToken;
pub use types::ApiToken;
pub use types::FactSheetMatch;
pub use types::SearchResult;
pub use types::ToolDefinition;
pub use types::ToolName;
