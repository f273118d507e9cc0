// crates/leanix-agent-mcp/tests/common/mod.rs
// =============================================================================
// Module: MCP Test Helpers
// Description: Loopback mock catalog servers for router tests.
// Purpose: Build routable search clients without a real catalog.
// =============================================================================

//! Shared helpers for leanix-agent-mcp integration tests.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only helpers; not every test file uses every helper."
)]

use std::thread;

use leanix_agent_catalog::CatalogClientSettings;
use leanix_agent_catalog::CatalogEndpoints;
use leanix_agent_catalog::FactSheetSearch;
use leanix_agent_core::ApiToken;
use tiny_http::Response;
use tiny_http::Server;

/// Serves the scripted `(status, body)` responses on a loopback server.
pub fn serve_responses(responses: Vec<(u16, String)>) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let url = format!("http://{addr}/");
    let handle = thread::spawn(move || {
        for (status, body) in responses {
            let request = server.recv().unwrap();
            let response = Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();
        }
    });
    (url, handle)
}

/// Builds a search client against loopback mock servers.
pub fn mock_search(
    token_url: &str,
    graphql_url: &str,
    api_token: Option<&str>,
) -> FactSheetSearch {
    let endpoints = CatalogEndpoints::new(token_url, graphql_url).unwrap();
    let settings = CatalogClientSettings {
        api_token: api_token.map(|secret| ApiToken::new(secret.to_string())),
        timeout_ms: 5_000,
        max_response_bytes: 1024 * 1024,
        allow_http: true,
        user_agent: "leanix-agent-tests/0.1".to_string(),
    };
    FactSheetSearch::new(endpoints, settings).unwrap()
}
