// crates/leanix-agent-catalog/src/search.rs
// ============================================================================
// Module: Fact Sheet Search
// Description: Fixed GraphQL application search against the catalog.
// Purpose: Execute token acquisition plus one search query per invocation.
// Dependencies: leanix-agent-core, leanix-agent-config, reqwest, serde_json
// ============================================================================

//! ## Overview
//! One search call performs two sequential blocking round-trips: a fresh token
//! fetch through [`TokenProvider`], then the fixed GraphQL query with a bearer
//! header. Matching and ranking are entirely delegated to the catalog's
//! full-text search; no local filtering, deduplication, or sorting happens
//! here. Zero matches and empty fragments are ordinary results, not errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use leanix_agent_config::LeanixAgentConfig;
use leanix_agent_core::ApiToken;
use leanix_agent_core::FactSheetMatch;
use leanix_agent_core::SearchResult;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::endpoints::CatalogEndpoints;
use crate::error::CatalogError;
use crate::error::truncate_detail;
use crate::http::build_catalog_client;
use crate::http::read_response_limited;
use crate::http::validate_endpoint_scheme;
use crate::query::build_search_document;
use crate::token::TokenProvider;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Construction-time settings for the catalog client pair.
///
/// # Invariants
/// - `api_token` is resolved once, at construction, from the environment
///   variable named in the workspace config; `None` means unconfigured.
/// - `allow_http` exists for loopback test servers only.
#[derive(Debug, Clone)]
pub struct CatalogClientSettings {
    /// Configured API credential, when present.
    pub api_token: Option<ApiToken>,
    /// Request timeout in milliseconds for each round-trip.
    pub timeout_ms: u64,
    /// Hard upper bound on response bodies.
    pub max_response_bytes: usize,
    /// Allow cleartext HTTP endpoints.
    pub allow_http: bool,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl CatalogClientSettings {
    /// Resolves settings (including the credential) from loaded configuration.
    #[must_use]
    pub fn from_config(config: &LeanixAgentConfig) -> Self {
        Self {
            api_token: config.workspace.api_token(),
            timeout_ms: config.catalog.timeout_ms,
            max_response_bytes: config.catalog.max_response_bytes,
            allow_http: config.catalog.allow_http,
            user_agent: config.catalog.user_agent.clone(),
        }
    }
}

// ============================================================================
// SECTION: Fact Sheet Search
// ============================================================================

/// Application fact sheet search over the catalog's GraphQL endpoint.
///
/// # Invariants
/// - Every search fetches a fresh token; no token state survives a call.
/// - No retries; the first failure of either round-trip surfaces as an error.
pub struct FactSheetSearch {
    /// Token provider for the workspace.
    tokens: TokenProvider,
    /// GraphQL query endpoint.
    endpoint: Url,
    /// Shared blocking HTTP client.
    client: Client,
    /// Hard upper bound on GraphQL response bodies.
    max_response_bytes: usize,
}

impl FactSheetSearch {
    /// Creates a search client for an endpoint pair.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when an endpoint violates the
    /// scheme policy or the HTTP client cannot be built.
    pub fn new(
        endpoints: CatalogEndpoints,
        settings: CatalogClientSettings,
    ) -> Result<Self, CatalogError> {
        validate_endpoint_scheme(endpoints.oauth_token_url(), settings.allow_http)?;
        validate_endpoint_scheme(endpoints.graphql_url(), settings.allow_http)?;
        let client = build_catalog_client(&settings)?;
        let tokens = TokenProvider::new(
            endpoints.oauth_token_url().clone(),
            settings.api_token,
            client.clone(),
            settings.max_response_bytes,
        );
        Ok(Self {
            tokens,
            endpoint: endpoints.graphql_url().clone(),
            client,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    /// Creates a search client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when endpoint derivation or
    /// client construction fails.
    pub fn from_config(config: &LeanixAgentConfig) -> Result<Self, CatalogError> {
        let endpoints = CatalogEndpoints::from_workspace(&config.workspace)?;
        let settings = CatalogClientSettings::from_config(config);
        Self::new(endpoints, settings)
    }

    /// Searches application fact sheets by free-text fragment.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError::Configuration`] and
    /// [`CatalogError::Authentication`] from token acquisition, and returns
    /// [`CatalogError::Upstream`] when the GraphQL endpoint responds with a
    /// non-success status or a malformed body.
    pub fn search(&self, fragment: &str) -> Result<SearchResult, CatalogError> {
        let token = self.tokens.obtain_access_token()?;
        let document = build_search_document(fragment);
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(token.reveal())
            .json(&json!({ "query": document }))
            .send()
            .map_err(|err| CatalogError::Upstream(format!("graphql request failed: {err}")))?;
        let status = response.status();
        let mut response = response;
        let body = read_response_limited(&mut response, self.max_response_bytes)
            .map_err(CatalogError::Upstream)?;
        if !status.is_success() {
            let detail = truncate_detail(&String::from_utf8_lossy(&body));
            return Err(CatalogError::Upstream(format!(
                "graphql endpoint returned status {}: {detail}",
                status.as_u16()
            )));
        }
        parse_search_response(&body)
    }
}

// ============================================================================
// SECTION: Response Parsing
// ============================================================================

/// Parses a GraphQL search response body into a [`SearchResult`].
fn parse_search_response(body: &[u8]) -> Result<SearchResult, CatalogError> {
    let payload: GraphQlResponse = serde_json::from_slice(body)
        .map_err(|_| CatalogError::Upstream("graphql response was not valid json".to_string()))?;
    let Some(data) = payload.data else {
        let detail = payload
            .errors
            .into_iter()
            .map(|err| err.message)
            .find(|message| !message.is_empty())
            .unwrap_or_else(|| "graphql response missing data".to_string());
        return Err(CatalogError::Upstream(detail));
    };
    let matches = data
        .all_fact_sheets
        .edges
        .into_iter()
        .map(|edge| FactSheetMatch {
            id: edge.node.id,
            name: edge.node.name,
        })
        .collect();
    Ok(SearchResult {
        total_count: data.all_fact_sheets.total_count,
        matches,
    })
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    /// Query payload when the request succeeded.
    data: Option<ResponseData>,
    /// GraphQL-level errors when the query failed.
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// GraphQL-level error entry.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    /// Human-readable error message.
    #[serde(default)]
    message: String,
}

/// Query payload under `data`.
#[derive(Debug, Deserialize)]
struct ResponseData {
    /// Fact sheet connection for the search filter.
    #[serde(rename = "allFactSheets")]
    all_fact_sheets: AllFactSheets,
}

/// Fact sheet connection payload.
#[derive(Debug, Deserialize)]
struct AllFactSheets {
    /// Authoritative total match count for the filter.
    #[serde(rename = "totalCount")]
    total_count: u64,
    /// Returned page of matches.
    #[serde(default)]
    edges: Vec<Edge>,
}

/// One connection edge.
#[derive(Debug, Deserialize)]
struct Edge {
    /// Matched fact sheet node.
    node: Node,
}

/// Matched fact sheet fields requested by the fixed query.
#[derive(Debug, Deserialize)]
struct Node {
    /// Opaque stable fact sheet identifier.
    id: String,
    /// Display name of the application.
    name: String,
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

    use super::parse_search_response;

    #[test]
    fn well_formed_body_parses_in_catalog_order() {
        let body = br#"{"data":{"allFactSheets":{"totalCount":2,"edges":[
            {"node":{"id":"a1","name":"Foo"}},
            {"node":{"id":"a2","name":"Foobar"}}
        ]}}}"#;
        let result = parse_search_response(body).unwrap();
        assert_eq!(result.total_count, 2);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].id, "a1");
        assert_eq!(result.matches[0].name, "Foo");
        assert_eq!(result.matches[1].id, "a2");
        assert_eq!(result.matches[1].name, "Foobar");
    }

    #[test]
    fn zero_edges_is_not_an_error() {
        let body = br#"{"data":{"allFactSheets":{"totalCount":0,"edges":[]}}}"#;
        let result = parse_search_response(body).unwrap();
        assert_eq!(result.total_count, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn total_count_is_authoritative_over_page_length() {
        let body = br#"{"data":{"allFactSheets":{"totalCount":40,"edges":[
            {"node":{"id":"a1","name":"Foo"}}
        ]}}}"#;
        let result = parse_search_response(body).unwrap();
        assert_eq!(result.total_count, 40);
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn graphql_errors_surface_as_upstream() {
        let body = br#"{"data":null,"errors":[{"message":"access denied"}]}"#;
        let error = parse_search_response(body).unwrap_err();
        assert!(error.to_string().contains("access denied"));
    }

    #[test]
    fn malformed_body_surfaces_as_upstream() {
        let error = parse_search_response(b"<html>busy</html>").unwrap_err();
        assert!(error.to_string().contains("not valid json"));
    }
}
