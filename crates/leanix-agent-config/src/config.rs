// crates/leanix-agent-config/src/config.rs
// ============================================================================
// Module: LeanIX Agent Configuration
// Description: Configuration loading and validation for the LeanIX agent.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: leanix-agent-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed. The API credential is never
//! read from the file: the file names an environment variable and the secret
//! is resolved from the process environment at call time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use leanix_agent_core::ApiToken;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "leanix-agent.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "LEANIX_AGENT_CONFIG";
/// Default environment variable holding the LeanIX API credential.
pub const DEFAULT_API_TOKEN_ENV: &str = "LEANIX_API_TOKEN";
/// Default catalog hostname appended to the tenant subdomain.
pub const DEFAULT_CATALOG_HOST: &str = "leanix.net";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total config path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a tenant subdomain label.
pub(crate) const MAX_SUBDOMAIN_LENGTH: usize = 63;
/// Maximum length of the catalog hostname.
pub(crate) const MAX_HOST_LENGTH: usize = 253;
/// Minimum catalog request timeout in milliseconds.
pub(crate) const MIN_CATALOG_TIMEOUT_MS: u64 = 500;
/// Maximum catalog request timeout in milliseconds.
pub(crate) const MAX_CATALOG_TIMEOUT_MS: u64 = 60_000;
/// Default catalog request timeout in milliseconds.
pub(crate) const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 10_000;
/// Default maximum catalog response size in bytes.
pub(crate) const DEFAULT_CATALOG_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// Maximum allowed catalog response size in bytes.
pub(crate) const MAX_CATALOG_MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;
/// Default maximum MCP request body size in bytes.
pub(crate) const DEFAULT_SERVER_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Maximum allowed MCP request body size in bytes.
pub(crate) const MAX_SERVER_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;
/// Default user agent string for outbound catalog requests.
pub(crate) const DEFAULT_USER_AGENT: &str = "leanix-agent/0.1";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// LeanIX agent configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeanixAgentConfig {
    /// Tenant workspace configuration.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// Catalog HTTP client configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// MCP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

impl LeanixAgentConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.workspace.validate()?;
        self.catalog.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

/// Tenant workspace settings identifying the LeanIX instance.
///
/// # Invariants
/// - `subdomain` is a single DNS label; the derived hostnames are
///   `{subdomain}.{host}`.
/// - The API credential lives in the environment variable named by
///   `api_token_env`, never in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Tenant-specific subdomain of the catalog hostname.
    #[serde(default)]
    pub subdomain: String,
    /// Environment variable holding the LeanIX API credential.
    #[serde(default = "default_api_token_env")]
    pub api_token_env: String,
    /// Catalog hostname appended to the subdomain.
    #[serde(default = "default_catalog_host")]
    pub host: String,
}

impl WorkspaceConfig {
    /// Validates workspace settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.subdomain.is_empty() {
            return Err(ConfigError::Invalid("workspace.subdomain must be set".to_string()));
        }
        if self.subdomain.len() > MAX_SUBDOMAIN_LENGTH {
            return Err(ConfigError::Invalid("workspace.subdomain exceeds 63 chars".to_string()));
        }
        if !self.subdomain.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            return Err(ConfigError::Invalid(
                "workspace.subdomain must contain only lowercase letters, digits, or hyphens"
                    .to_string(),
            ));
        }
        if self.subdomain.starts_with('-') || self.subdomain.ends_with('-') {
            return Err(ConfigError::Invalid(
                "workspace.subdomain must not start or end with a hyphen".to_string(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("workspace.host must be non-empty".to_string()));
        }
        if self.host.len() > MAX_HOST_LENGTH {
            return Err(ConfigError::Invalid("workspace.host exceeds 253 chars".to_string()));
        }
        if !self
            .host
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '.')
        {
            return Err(ConfigError::Invalid(
                "workspace.host must contain only lowercase letters, digits, hyphens, or dots"
                    .to_string(),
            ));
        }
        if self.api_token_env.trim().is_empty() || self.api_token_env.contains('=') {
            return Err(ConfigError::Invalid(
                "workspace.api_token_env must be a valid environment variable name".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the API credential from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or empty; callers treat that
    /// as a configuration failure before any network call.
    #[must_use]
    pub fn api_token(&self) -> Option<ApiToken> {
        match env::var(&self.api_token_env) {
            Ok(secret) if !secret.is_empty() => Some(ApiToken::new(secret)),
            _ => None,
        }
    }

    /// Derives the OAuth2 token endpoint for the workspace.
    #[must_use]
    pub fn oauth_token_url(&self) -> String {
        format!("https://{}.{}/services/mtm/v1/oauth2/token", self.subdomain, self.host)
    }

    /// Derives the GraphQL endpoint for the workspace.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("https://{}.{}/services/pathfinder/v1/graphql", self.subdomain, self.host)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            subdomain: String::new(),
            api_token_env: default_api_token_env(),
            host: default_catalog_host(),
        }
    }
}

/// Catalog HTTP client limits and policy.
///
/// # Invariants
/// - `timeout_ms` is bounded to keep a hung catalog from blocking the host's
///   tool dispatch indefinitely.
/// - `max_response_bytes` is enforced as a hard upper bound on response bodies.
/// - `allow_http = false` blocks cleartext endpoints; enable only for loopback
///   test servers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_catalog_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    #[serde(default = "default_catalog_max_response_bytes")]
    pub max_response_bytes: usize,
    /// Allow cleartext HTTP endpoints (disabled by default).
    #[serde(default)]
    pub allow_http: bool,
    /// User agent string for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CatalogConfig {
    /// Validates catalog client settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < MIN_CATALOG_TIMEOUT_MS || self.timeout_ms > MAX_CATALOG_TIMEOUT_MS {
            return Err(ConfigError::Invalid(format!(
                "catalog.timeout_ms must be between {MIN_CATALOG_TIMEOUT_MS} and \
                 {MAX_CATALOG_TIMEOUT_MS}"
            )));
        }
        if self.max_response_bytes == 0 || self.max_response_bytes > MAX_CATALOG_MAX_RESPONSE_BYTES
        {
            return Err(ConfigError::Invalid(format!(
                "catalog.max_response_bytes must be between 1 and \
                 {MAX_CATALOG_MAX_RESPONSE_BYTES}"
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog.user_agent must be non-empty".to_string()));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_CATALOG_TIMEOUT_MS,
            max_response_bytes: DEFAULT_CATALOG_MAX_RESPONSE_BYTES,
            allow_http: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// MCP server transport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerTransport {
    /// JSON-RPC over stdin/stdout with Content-Length framing.
    Stdio,
    /// JSON-RPC over HTTP POST.
    Http,
}

/// MCP server configuration.
///
/// # Invariants
/// - HTTP transport requires a loopback bind address; this server carries no
///   auth layer, so non-loopback binds fail closed.
/// - Stdio transport does not use a bind address.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Transport used to serve JSON-RPC requests.
    #[serde(default = "default_server_transport")]
    pub transport: ServerTransport,
    /// Bind address for the HTTP transport.
    #[serde(default)]
    pub bind: Option<String>,
    /// Maximum allowed request body size in bytes.
    #[serde(default = "default_server_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Validates server transport settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_SERVER_MAX_BODY_BYTES {
            return Err(ConfigError::Invalid(format!(
                "server.max_body_bytes must be between 1 and {MAX_SERVER_MAX_BODY_BYTES}"
            )));
        }
        match self.transport {
            ServerTransport::Stdio => {
                if self.bind.is_some() {
                    return Err(ConfigError::Invalid(
                        "stdio transport does not use a bind address".to_string(),
                    ));
                }
            }
            ServerTransport::Http => {
                let bind = self.bind.as_ref().ok_or_else(|| {
                    ConfigError::Invalid("http transport requires bind address".to_string())
                })?;
                let addr: SocketAddr = bind
                    .parse()
                    .map_err(|_| ConfigError::Invalid("invalid bind address".to_string()))?;
                if !addr.ip().is_loopback() {
                    return Err(ConfigError::Invalid(
                        "non-loopback bind disallowed: the agent server carries no auth layer"
                            .to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: default_server_transport(),
            bind: None,
            max_body_bytes: default_server_max_body_bytes(),
        }
    }
}

// ============================================================================
// SECTION: Serde Defaults
// ============================================================================

/// Default credential environment variable name.
fn default_api_token_env() -> String {
    DEFAULT_API_TOKEN_ENV.to_string()
}

/// Default catalog hostname.
fn default_catalog_host() -> String {
    DEFAULT_CATALOG_HOST.to_string()
}

/// Default catalog timeout.
const fn default_catalog_timeout_ms() -> u64 {
    DEFAULT_CATALOG_TIMEOUT_MS
}

/// Default catalog response cap.
const fn default_catalog_max_response_bytes() -> usize {
    DEFAULT_CATALOG_MAX_RESPONSE_BYTES
}

/// Default user agent.
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Default server transport.
const fn default_server_transport() -> ServerTransport {
    ServerTransport::Stdio
}

/// Default server body cap.
const fn default_server_max_body_bytes() -> usize {
    DEFAULT_SERVER_MAX_BODY_BYTES
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves the effective config path from an explicit argument, the
/// `LEANIX_AGENT_CONFIG` environment variable, or the default filename.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let resolved = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => match env::var(CONFIG_ENV_VAR) {
            Ok(from_env) if !from_env.is_empty() => PathBuf::from(from_env),
            _ => PathBuf::from(DEFAULT_CONFIG_NAME),
        },
    };
    if resolved.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds length limit".to_string()));
    }
    Ok(resolved)
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem errors while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parse errors.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Semantic validation errors.
    #[error("invalid config: {0}")]
    Invalid(String),
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

    use super::WorkspaceConfig;

    #[test]
    fn derived_endpoints_use_subdomain_and_host() {
        let workspace = WorkspaceConfig {
            subdomain: "acme".to_string(),
            ..WorkspaceConfig::default()
        };
        assert_eq!(
            workspace.oauth_token_url(),
            "https://acme.leanix.net/services/mtm/v1/oauth2/token"
        );
        assert_eq!(
            workspace.graphql_url(),
            "https://acme.leanix.net/services/pathfinder/v1/graphql"
        );
    }
}
