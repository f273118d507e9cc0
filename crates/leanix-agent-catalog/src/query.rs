// crates/leanix-agent-catalog/src/query.rs
// ============================================================================
// Module: GraphQL Query Construction
// Description: Fixed application search document with escaped interpolation.
// Purpose: Build the one GraphQL document this client ever sends.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The search document is fixed apart from the full-text fragment, which is
//! caller-supplied and therefore escaped before interpolation. The catalog's
//! facet filter language has no native variables for this query shape, so
//! escaping is the injection boundary.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Facet key selecting the fact sheet type dimension.
const FACT_SHEET_TYPES_FACET: &str = "FactSheetTypes";
/// Facet value restricting matches to application fact sheets.
const APPLICATION_TYPE_KEY: &str = "Application";

// ============================================================================
// SECTION: Document Construction
// ============================================================================

/// Builds the fixed application search document for one fragment.
///
/// The fragment is escaped so quotes, backslashes, and control characters
/// cannot terminate the string literal or alter the filter structure.
#[must_use]
pub fn build_search_document(fragment: &str) -> String {
    let escaped = escape_graphql_string(fragment);
    format!(
        "{{ allFactSheets(filter: {{facetFilters: [{{facetKey: \
         \"{FACT_SHEET_TYPES_FACET}\", keys: [\"{APPLICATION_TYPE_KEY}\"]}}], fullTextSearch: \
         \"{escaped}\"}}) {{ totalCount edges {{ node {{ id name }} }} }} }}"
    )
}

/// Escapes a caller-supplied value for use inside a GraphQL string literal.
fn escape_graphql_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(ch)));
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// SECTION: Tests
// ============================================================================
