// crates/leanix-agent-config/src/lib.rs
// ============================================================================
// Module: LeanIX Agent Config
// Description: Configuration model and validation for the LeanIX agent.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: leanix-agent-core, serde, toml
// ============================================================================

//! ## Overview
//! This crate ships the canonical configuration model for the LeanIX agent:
//! tenant workspace settings, catalog HTTP limits, and MCP server transport
//! settings. Loading and validation fail closed; secrets are resolved from the
//! process environment and never stored in the config file.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CatalogConfig;
pub use config::ConfigError;
pub use config::LeanixAgentConfig;
pub use config::ServerConfig;
pub use config::ServerTransport;
pub use config::WorkspaceConfig;
