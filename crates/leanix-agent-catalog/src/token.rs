// crates/leanix-agent-catalog/src/token.rs
// ============================================================================
// Module: Token Provider
// Description: OAuth2 client-credentials token acquisition.
// Purpose: Exchange the static API credential for a short-lived bearer token.
// Dependencies: leanix-agent-core, reqwest, serde
// ============================================================================

//! ## Overview
//! The token provider performs one HTTP POST per invocation: Basic auth with
//! the literal username `apitoken` and the configured credential, form body
//! `grant_type=client_credentials`. There is no caching, retry, or backoff;
//! every call is a fresh round-trip. A missing credential fails before any
//! network I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use leanix_agent_core::AccessToken;
use leanix_agent_core::ApiToken;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::error::CatalogError;
use crate::error::truncate_detail;
use crate::http::build_catalog_client;
use crate::http::read_response_limited;
use crate::http::validate_endpoint_scheme;
use crate::search::CatalogClientSettings;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed Basic-auth username for the client-credentials grant.
const BASIC_AUTH_USER: &str = "apitoken";
/// Fixed grant type declared in the token request body.
const GRANT_TYPE: &str = "client_credentials";

// ============================================================================
// SECTION: Token Provider
// ============================================================================

/// OAuth2 client-credentials token provider.
///
/// # Invariants
/// - A missing credential fails with [`CatalogError::Configuration`] before
///   any network call is attempted.
/// - Every invocation performs a fresh round-trip; tokens are never cached.
#[derive(Debug)]
pub struct TokenProvider {
    /// OAuth2 token endpoint.
    endpoint: Url,
    /// Configured API credential, when present.
    api_token: Option<ApiToken>,
    /// Shared blocking HTTP client.
    client: Client,
    /// Hard upper bound on token response bodies.
    max_response_bytes: usize,
}

impl TokenProvider {
    /// Creates a standalone token provider from client settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when the endpoint violates the
    /// scheme policy or the HTTP client cannot be built.
    pub fn from_settings(
        endpoint: Url,
        settings: &CatalogClientSettings,
    ) -> Result<Self, CatalogError> {
        validate_endpoint_scheme(&endpoint, settings.allow_http)?;
        let client = build_catalog_client(settings)?;
        Ok(Self::new(endpoint, settings.api_token.clone(), client, settings.max_response_bytes))
    }

    /// Creates a token provider over an already-built HTTP client.
    #[must_use]
    pub(crate) const fn new(
        endpoint: Url,
        api_token: Option<ApiToken>,
        client: Client,
        max_response_bytes: usize,
    ) -> Self {
        Self {
            endpoint,
            api_token,
            client,
            max_response_bytes,
        }
    }

    /// Obtains a fresh access token via the client-credentials grant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when no credential is
    /// configured, and [`CatalogError::Authentication`] when the identity
    /// provider rejects the credential, the network call fails, or the
    /// response carries no usable `access_token`.
    pub fn obtain_access_token(&self) -> Result<AccessToken, CatalogError> {
        let credential = self.api_token.as_ref().ok_or_else(|| {
            CatalogError::Configuration(
                "no API token configured; set the credential environment variable".to_string(),
            )
        })?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(BASIC_AUTH_USER, Some(credential.reveal()))
            .form(&[("grant_type", GRANT_TYPE)])
            .send()
            .map_err(|err| CatalogError::Authentication(format!("token request failed: {err}")))?;
        let status = response.status();
        let mut response = response;
        let body = read_response_limited(&mut response, self.max_response_bytes)
            .map_err(CatalogError::Authentication)?;
        if !status.is_success() {
            let detail = truncate_detail(&String::from_utf8_lossy(&body));
            return Err(CatalogError::Authentication(format!(
                "token endpoint returned status {}: {detail}",
                status.as_u16()
            )));
        }
        let payload: TokenResponse = serde_json::from_slice(&body).map_err(|_| {
            CatalogError::Authentication("token response was not valid json".to_string())
        })?;
        let token = payload.access_token.filter(|token| !token.is_empty()).ok_or_else(|| {
            CatalogError::Authentication("token response missing access_token".to_string())
        })?;
        Ok(AccessToken::new(token))
    }
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// OAuth2 token endpoint response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    /// Bearer access token issued for this grant.
    access_token: Option<String>,
}
