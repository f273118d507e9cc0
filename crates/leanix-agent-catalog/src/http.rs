// crates/leanix-agent-catalog/src/http.rs
// ============================================================================
// Module: Catalog HTTP Helpers
// Description: Shared blocking-client construction and bounded body reads.
// Purpose: Keep outbound HTTP policy identical across both catalog calls.
// Dependencies: reqwest, url
// ============================================================================

//! ## Overview
//! Both catalog round-trips (token acquisition, GraphQL query) share one
//! outbound policy: request timeout, redirects disabled, and a hard response
//! size limit with truncation detection. Scheme policy rejects cleartext HTTP
//! unless explicitly allowed for loopback test servers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::CatalogError;
use crate::search::CatalogClientSettings;

// ============================================================================
// SECTION: Client Construction
// ============================================================================

/// Builds the blocking HTTP client shared by both catalog calls.
pub(crate) fn build_catalog_client(
    settings: &CatalogClientSettings,
) -> Result<Client, CatalogError> {
    Client::builder()
        .timeout(Duration::from_millis(settings.timeout_ms))
        .user_agent(settings.user_agent.clone())
        .redirect(Policy::none())
        .build()
        .map_err(|_| CatalogError::Configuration("http client build failed".to_string()))
}

/// Validates endpoint scheme policy for one outbound URL.
pub(crate) fn validate_endpoint_scheme(url: &Url, allow_http: bool) -> Result<(), CatalogError> {
    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_http => Ok(()),
        other => {
            Err(CatalogError::Configuration(format!("unsupported endpoint scheme: {other}")))
        }
    }
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

/// Reads the response body while enforcing a byte limit.
///
/// Rejects bodies whose advertised length exceeds the limit before reading,
/// and detects truncation when fewer bytes arrive than advertised.
pub(crate) fn read_response_limited(
    response: &mut Response,
    max_bytes: usize,
) -> Result<Vec<u8>, String> {
    let expected_len = response.content_length();
    let max_bytes_u64 =
        u64::try_from(max_bytes).map_err(|_| "response size limit exceeds u64".to_string())?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err("response exceeds size limit".to_string());
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle.read_to_end(&mut buf).map_err(|_| "failed to read response".to_string())?;
    if buf.len() > max_bytes {
        return Err("response exceeds size limit".to_string());
    }
    if let Some(expected) = expected_len {
        let expected =
            usize::try_from(expected).map_err(|_| "invalid response length".to_string())?;
        if buf.len() < expected {
            return Err("response truncated".to_string());
        }
    }
    Ok(buf)
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

    use url::Url;

    use super::validate_endpoint_scheme;

    #[test]
    fn https_always_allowed() {
        let url = Url::parse("https://acme.leanix.net/graphql").unwrap();
        assert!(validate_endpoint_scheme(&url, false).is_ok());
    }

    #[test]
    fn cleartext_rejected_unless_opted_in() {
        let url = Url::parse("http://127.0.0.1:8080/graphql").unwrap();
        assert!(validate_endpoint_scheme(&url, false).is_err());
        assert!(validate_endpoint_scheme(&url, true).is_ok());
    }

    #[test]
    fn other_schemes_rejected() {
        let url = Url::parse("ftp://acme.leanix.net/graphql").unwrap();
        assert!(validate_endpoint_scheme(&url, true).is_err());
    }
}
