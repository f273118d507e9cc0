// crates/leanix-agent-catalog/src/error.rs
// ============================================================================
// Module: Catalog Errors
// Description: Error taxonomy for catalog access.
// Purpose: Distinguish configuration, authentication, and upstream failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The catalog error taxonomy mirrors the three failure classes of the tool
//! surface: missing local configuration, identity-provider rejection (or any
//! failure during the auth round-trip), and non-success or malformed GraphQL
//! responses. Error messages carry upstream status and a truncated body but
//! never the credential or bearer token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum upstream body bytes echoed into an error message.
pub(crate) const MAX_ERROR_DETAIL_BYTES: usize = 2048;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog access errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or unusable local configuration (no credential, bad endpoint).
    #[error("configuration error: {0}")]
    Configuration(String),
    /// OAuth rejection or network failure during token acquisition.
    #[error("authentication error: {0}")]
    Authentication(String),
    /// Non-success or malformed response from the GraphQL endpoint.
    #[error("upstream error: {0}")]
    Upstream(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Truncates an upstream body for inclusion in an error message.
///
/// Truncation is char-boundary safe so error messages stay valid UTF-8.
pub(crate) fn truncate_detail(body: &str) -> String {
    if body.len() <= MAX_ERROR_DETAIL_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_DETAIL_BYTES;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} [truncated]", &body[.. end])
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

    use super::MAX_ERROR_DETAIL_BYTES;
    use super::truncate_detail;

    #[test]
    fn short_body_passes_through() {
        assert_eq!(truncate_detail("unauthorized"), "unauthorized");
    }

    #[test]
    fn long_body_is_truncated_with_marker() {
        let body = "x".repeat(MAX_ERROR_DETAIL_BYTES + 100);
        let detail = truncate_detail(&body);
        assert!(detail.ends_with("[truncated]"));
        assert!(detail.len() < body.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multi-byte characters straddling the cut point must not split.
        let body = "é".repeat(MAX_ERROR_DETAIL_BYTES);
        let detail = truncate_detail(&body);
        assert!(detail.ends_with("[truncated]"));
    }
}
