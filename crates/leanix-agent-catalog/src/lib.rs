// crates/leanix-agent-catalog/src/lib.rs
// ============================================================================
// Module: LeanIX Agent Catalog
// Description: OAuth2 token acquisition and fact sheet search for LeanIX.
// Purpose: Provide the two catalog operations the agent tool surface needs.
// Dependencies: leanix-agent-core, leanix-agent-config, reqwest, serde
// ============================================================================

//! ## Overview
//! This crate ships the catalog client: a [`TokenProvider`] that exchanges the
//! long-lived API credential for a short-lived bearer token via the OAuth2
//! client-credentials grant, and a [`FactSheetSearch`] that runs the fixed
//! application search query against the catalog's GraphQL endpoint.
//! Invariants:
//! - Every search performs a fresh token fetch; tokens are never cached.
//! - No component retries; failures surface as typed [`CatalogError`] values.
//! - Response bodies are read under a hard size limit and fail closed.
//!
//! Security posture: catalog responses are untrusted input; the credential and
//! bearer token never appear in errors or logs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod endpoints;
pub mod error;
mod http;
pub mod query;
pub mod search;
pub mod token;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use endpoints::CatalogEndpoints;
pub use error::CatalogError;
pub use search::CatalogClientSettings;
pub use search::FactSheetSearch;
pub use token::TokenProvider;
