// crates/leanix-agent-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for config validation tests.
// Purpose: Provide a minimal valid configuration for mutation-based tests.
// =============================================================================

//! Shared helpers for leanix-agent-config integration tests.

use leanix_agent_config::ConfigError;
use leanix_agent_config::LeanixAgentConfig;

/// Builds a minimal valid configuration for a test tenant.
pub fn minimal_config() -> Result<LeanixAgentConfig, ConfigError> {
    let mut config = LeanixAgentConfig::default();
    config.workspace.subdomain = "acme".to_string();
    config.validate()?;
    Ok(config)
}
