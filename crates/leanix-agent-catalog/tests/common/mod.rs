// crates/leanix-agent-catalog/tests/common/mod.rs
// =============================================================================
// Module: Catalog Test Helpers
// Description: Loopback mock servers and shared client settings.
// Purpose: Record catalog requests and serve scripted responses.
// =============================================================================

//! Shared helpers for leanix-agent-catalog integration tests.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only helpers; not every test file uses every helper."
)]

use std::thread;

use leanix_agent_catalog::CatalogClientSettings;
use leanix_agent_core::ApiToken;
use tiny_http::Response;
use tiny_http::Server;

/// One request observed by a mock server.
pub struct RecordedRequest {
    /// HTTP method as text.
    pub method: String,
    /// Authorization header value, when present.
    pub authorization: Option<String>,
    /// Raw request body.
    pub body: String,
}

/// Serves the scripted `(status, body)` responses on a loopback server.
///
/// Returns the base URL and a handle yielding the recorded requests once all
/// scripted responses have been consumed.
pub fn serve_responses(
    responses: Vec<(u16, String)>,
) -> (String, thread::JoinHandle<Vec<RecordedRequest>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let url = format!("http://{addr}/");
    let handle = thread::spawn(move || {
        let mut recorded = Vec::new();
        for (status, body) in responses {
            let mut request = server.recv().unwrap();
            let authorization = request
                .headers()
                .iter()
                .find(|header| header.field.equiv("Authorization"))
                .map(|header| header.value.as_str().to_string());
            let method = request.method().as_str().to_string();
            let mut request_body = String::new();
            request.as_reader().read_to_string(&mut request_body).unwrap();
            recorded.push(RecordedRequest {
                method,
                authorization,
                body: request_body,
            });
            let response = Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();
        }
        recorded
    });
    (url, handle)
}

/// Builds client settings pointing at loopback mock servers.
pub fn test_settings(api_token: Option<&str>) -> CatalogClientSettings {
    CatalogClientSettings {
        api_token: api_token.map(|secret| ApiToken::new(secret.to_string())),
        timeout_ms: 5_000,
        max_response_bytes: 1024 * 1024,
        allow_http: true,
        user_agent: "leanix-agent-tests/0.1".to_string(),
    }
}

/// Canned successful OAuth token response.
pub fn token_response(token: &str) -> (u16, String) {
    (200, format!(r#"{{"access_token":"{token}"}}"#))
}
