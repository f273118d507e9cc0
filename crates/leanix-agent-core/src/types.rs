// crates/leanix-agent-core/src/types.rs
// ============================================================================
// Module: Core Types
// Description: Domain types for fact sheet search and tool listing.
// Purpose: Provide search results, secret wrappers, and tool identifiers.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Domain types shared across the workspace. Secret-bearing values
//! ([`ApiToken`], [`AccessToken`]) are opaque wrappers whose `Debug` output is
//! redacted so they cannot leak through logs or error chains.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Secrets
// ============================================================================

/// Long-lived LeanIX API credential used for the client-credentials grant.
///
/// # Invariants
/// - The wrapped secret is never exposed through `Debug` or serde.
/// - The value is immutable for the process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps a raw credential string.
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self(secret)
    }

    /// Reveals the wrapped secret for use in an outbound request.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(redacted)")
    }
}

/// Short-lived bearer token obtained from the OAuth2 token endpoint.
///
/// # Invariants
/// - Created per search call and discarded after use; never cached.
/// - The wrapped token is never exposed through `Debug` or serde.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Reveals the wrapped token for use in an `Authorization` header.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// Returns true when the wrapped token is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(redacted)")
    }
}

// ============================================================================
// SECTION: Search Results
// ============================================================================

/// One matched application fact sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSheetMatch {
    /// Opaque stable fact sheet identifier.
    pub id: String,
    /// Display name of the application.
    pub name: String,
}

/// Result of one catalog search call.
///
/// # Invariants
/// - `total_count` is the catalog's authoritative match count and may exceed
///   `matches.len()` when the catalog truncates the returned page.
/// - `matches` preserves the catalog's relevance ordering; no local sorting,
///   filtering, or deduplication is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Authoritative total match count reported by the catalog.
    pub total_count: u64,
    /// Matched fact sheets in catalog order.
    pub matches: Vec<FactSheetMatch>,
}

impl SearchResult {
    /// Returns an empty result with zero matches.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_count: 0,
            matches: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Tool Identifiers
// ============================================================================

/// Names of the MCP tools exposed by the LeanIX agent.
///
/// # Invariants
/// - Wire names are stable; clients dispatch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Full-text application fact sheet search.
    GetFactSheets,
}

impl ToolName {
    /// Returns the stable wire name for the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetFactSheets => "get_fact_sheets",
        }
    }

    /// Parses a wire name into a tool name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "get_fact_sheets" => Some(Self::GetFactSheets),
            _ => None,
        }
    }
}

/// Tool definition shape used by MCP tool listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// MCP tool name.
    pub name: ToolName,
    /// Tool description for clients.
    pub description: String,
    /// JSON schema for tool input.
    pub input_schema: Value,
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
        clippy::use_debug,
        reason = "Test-only output and panic-based assertions are permitted."
    )]

    use super::AccessToken;
    use super::ApiToken;
    use super::SearchResult;
    use super::ToolName;

    #[test]
    fn api_token_debug_is_redacted() {
        let token = ApiToken::new("super-secret".to_string());
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert_eq!(rendered, "ApiToken(redacted)");
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("bearer-secret".to_string());
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("bearer-secret"));
        assert_eq!(rendered, "AccessToken(redacted)");
    }

    #[test]
    fn empty_search_result_has_zero_count() {
        let result = SearchResult::empty();
        assert_eq!(result.total_count, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn tool_name_round_trips_through_wire_name() {
        let name = ToolName::GetFactSheets;
        assert_eq!(ToolName::parse(name.as_str()), Some(name));
        assert_eq!(ToolName::parse("unknown_tool"), None);
    }
}
