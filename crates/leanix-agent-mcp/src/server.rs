// crates/leanix-agent-mcp/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server implementations for stdio and HTTP transports.
// Purpose: Expose LeanIX agent tools via JSON-RPC 2.0.
// Dependencies: leanix-agent-catalog, axum, tokio
// ============================================================================

//! ## Overview
//! The MCP server exposes the `get_fact_sheets` tool using JSON-RPC 2.0. It
//! supports stdio and HTTP transports and always routes calls through
//! [`crate::tools::ToolRouter`]. The server carries no auth layer; HTTP binds
//! are restricted to loopback addresses by configuration validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use leanix_agent_config::LeanixAgentConfig;
use leanix_agent_config::ServerTransport;
use leanix_agent_core::ToolName;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::telemetry::McpMethod;
use crate::telemetry::McpMetricEvent;
use crate::telemetry::McpMetrics;
use crate::telemetry::McpOutcome;
use crate::telemetry::NoopMetrics;
use crate::tools::ToolDefinition;
use crate::tools::ToolError;
use crate::tools::ToolRouter;

// ============================================================================
// SECTION: MCP Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Server configuration.
    config: LeanixAgentConfig,
    /// Tool router for request dispatch.
    router: ToolRouter,
    /// Metrics sink for request telemetry.
    metrics: Arc<dyn McpMetrics>,
}

impl McpServer {
    /// Builds a new MCP server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when initialization fails.
    pub fn from_config(config: LeanixAgentConfig) -> Result<Self, McpServerError> {
        config.validate().map_err(|err| McpServerError::Config(err.to_string()))?;
        let router = ToolRouter::from_config(&config)
            .map_err(|err| McpServerError::Init(err.to_string()))?;
        emit_no_auth_warning(&config);
        Ok(Self {
            config,
            router,
            metrics: Arc::new(NoopMetrics),
        })
    }

    /// Replaces the metrics sink.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn McpMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Serves requests using the configured transport.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when the server fails.
    pub async fn serve(self) -> Result<(), McpServerError> {
        let transport = self.config.server.transport;
        let max_body_bytes = self.config.server.max_body_bytes;
        match transport {
            ServerTransport::Stdio => {
                serve_stdio(&self.router, max_body_bytes, self.metrics.as_ref())
            }
            ServerTransport::Http => serve_http(self.config, self.router, self.metrics).await,
        }
    }
}

/// Warns on startup that the HTTP transport relies on loopback isolation.
#[allow(clippy::print_stderr, reason = "Startup warning precedes any logging transport.")]
fn emit_no_auth_warning(config: &LeanixAgentConfig) {
    if config.server.transport == ServerTransport::Http {
        eprintln!(
            "leanix-agent-mcp: WARNING: http transport carries no auth layer; binds are \
             restricted to loopback addresses"
        );
    }
}

// ============================================================================
// SECTION: Stdio Transport
// ============================================================================

/// Serves JSON-RPC requests over stdin/stdout.
fn serve_stdio(
    router: &ToolRouter,
    max_body_bytes: usize,
    metrics: &dyn McpMetrics,
) -> Result<(), McpServerError> {
    let mut reader = BufReader::new(std::io::stdin());
    let mut writer = std::io::stdout();
    loop {
        let bytes = read_framed(&mut reader, max_body_bytes)?;
        let response = dispatch_bytes(router, ServerTransport::Stdio, metrics, &bytes).1;
        let payload = serde_json::to_vec(&response)
            .map_err(|_| McpServerError::Transport("json-rpc serialization failed".to_string()))?;
        write_framed(&mut writer, &payload)?;
    }
}

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Serves JSON-RPC requests over HTTP.
async fn serve_http(
    config: LeanixAgentConfig,
    router: ToolRouter,
    metrics: Arc<dyn McpMetrics>,
) -> Result<(), McpServerError> {
    let bind = config
        .server
        .bind
        .as_ref()
        .ok_or_else(|| McpServerError::Config("bind address required".to_string()))?;
    let addr: SocketAddr =
        bind.parse().map_err(|_| McpServerError::Config("invalid bind address".to_string()))?;
    let state = Arc::new(ServerState {
        router,
        max_body_bytes: config.server.max_body_bytes,
        metrics,
    });
    let app = Router::new().route("/rpc", post(handle_http)).with_state(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| McpServerError::Transport("http bind failed".to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|_| McpServerError::Transport("http server failed".to_string()))
}

/// Shared server state for HTTP handlers.
struct ServerState {
    /// Tool router for request dispatch.
    router: ToolRouter,
    /// Maximum allowed request body size.
    max_body_bytes: usize,
    /// Metrics sink for request telemetry.
    metrics: Arc<dyn McpMetrics>,
}

/// Handles HTTP JSON-RPC requests.
async fn handle_http(State(state): State<Arc<ServerState>>, bytes: Bytes) -> impl IntoResponse {
    if bytes.len() > state.max_body_bytes {
        let response = JsonRpcResponse::failure(Value::Null, -32070, "request body too large");
        return (StatusCode::PAYLOAD_TOO_LARGE, axum::Json(response));
    }
    let response = call_with_blocking(&state, bytes);
    (response.0, axum::Json(response.1))
}

/// Dispatches a request body, shifting to a blocking context when available.
fn call_with_blocking(state: &ServerState, bytes: Bytes) -> (StatusCode, JsonRpcResponse) {
    let dispatch = || {
        dispatch_bytes(
            &state.router,
            ServerTransport::Http,
            state.metrics.as_ref(),
            bytes.as_ref(),
        )
    };
    match tokio::runtime::Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(dispatch)
        }
        _ => dispatch(),
    }
}

// ============================================================================
// SECTION: JSON-RPC Handling
// ============================================================================

/// Incoming JSON-RPC request payload.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    jsonrpc: String,
    /// Request identifier.
    id: Value,
    /// Method name.
    method: String,
    /// Optional parameters payload.
    params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Builds a success envelope.
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds an error envelope.
    fn failure(id: Value, code: i64, message: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.to_string(),
            }),
        }
    }
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Human-readable error message.
    message: String,
}

/// Tool call parameters for JSON-RPC requests.
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    /// Tool name.
    name: String,
    /// Raw JSON arguments.
    arguments: Value,
}

/// Tool list response payload.
#[derive(Debug, Serialize)]
struct ToolListResult {
    /// Registered tool definitions.
    tools: Vec<ToolDefinition>,
}

/// Tool call response payload.
#[derive(Debug, Serialize)]
struct ToolCallResult {
    /// Tool output content.
    content: Vec<ToolContent>,
}

/// Tool output payloads for JSON-RPC responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ToolContent {
    /// JSON tool output.
    Json {
        /// JSON payload.
        json: Value,
    },
}

/// Parses a raw request body, dispatches it, and records telemetry.
fn dispatch_bytes(
    router: &ToolRouter,
    transport: ServerTransport,
    metrics: &dyn McpMetrics,
    bytes: &[u8],
) -> (StatusCode, JsonRpcResponse) {
    let started = Instant::now();
    let (method, tool, status, response) = match serde_json::from_slice::<JsonRpcRequest>(bytes) {
        Ok(request) => {
            let method = McpMethod::classify(&request.method);
            let tool = tool_label(&request);
            let (status, response) = handle_request(router, request);
            (method, tool, status, response)
        }
        Err(_) => (
            McpMethod::Invalid,
            None,
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::failure(Value::Null, -32600, "invalid json-rpc request"),
        ),
    };
    let event = McpMetricEvent {
        transport,
        method,
        tool,
        outcome: if response.error.is_some() { McpOutcome::Error } else { McpOutcome::Ok },
        error_code: response.error.as_ref().map(|err| err.code),
    };
    metrics.record_request(event.clone());
    metrics.record_latency(event, started.elapsed());
    (status, response)
}

/// Extracts a tool label for telemetry from tools/call params.
fn tool_label(request: &JsonRpcRequest) -> Option<ToolName> {
    if request.method != "tools/call" {
        return None;
    }
    request
        .params
        .as_ref()
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str)
        .and_then(ToolName::parse)
}

/// Dispatches a JSON-RPC request to the tool router.
fn handle_request(router: &ToolRouter, request: JsonRpcRequest) -> (StatusCode, JsonRpcResponse) {
    if request.jsonrpc != "2.0" {
        return (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::failure(request.id, -32600, "invalid json-rpc version"),
        );
    }
    match request.method.as_str() {
        "tools/list" => {
            let tools = router.list_tools();
            match serde_json::to_value(ToolListResult {
                tools,
            }) {
                Ok(value) => (StatusCode::OK, JsonRpcResponse::success(request.id, value)),
                Err(_) => jsonrpc_error(request.id, &ToolError::Serialization),
            }
        }
        "tools/call" => {
            let id = request.id;
            let params = request.params.unwrap_or(Value::Null);
            match serde_json::from_value::<ToolCallParams>(params) {
                Ok(call) => match router.handle_tool_call(&call.name, call.arguments) {
                    Ok(result) => match serde_json::to_value(ToolCallResult {
                        content: vec![ToolContent::Json {
                            json: result,
                        }],
                    }) {
                        Ok(value) => (StatusCode::OK, JsonRpcResponse::success(id, value)),
                        Err(_) => jsonrpc_error(id, &ToolError::Serialization),
                    },
                    Err(err) => jsonrpc_error(id, &err),
                },
                Err(_) => (
                    StatusCode::BAD_REQUEST,
                    JsonRpcResponse::failure(id, -32602, "invalid tool params"),
                ),
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::failure(request.id, -32601, "method not found"),
        ),
    }
}

/// Builds a JSON-RPC error response for a tool failure.
fn jsonrpc_error(id: Value, error: &ToolError) -> (StatusCode, JsonRpcResponse) {
    let (status, code, message) = match error {
        ToolError::UnknownTool => (StatusCode::BAD_REQUEST, -32601, "unknown tool".to_string()),
        ToolError::InvalidParams(message) => (StatusCode::BAD_REQUEST, -32602, message.clone()),
        ToolError::Serialization => (StatusCode::OK, -32060, "serialization failed".to_string()),
    };
    (status, JsonRpcResponse::failure(id, code, &message))
}

// ============================================================================
// SECTION: Framing Helpers
// ============================================================================

/// Reads a framed stdio payload using MCP Content-Length headers.
fn read_framed(
    reader: &mut BufReader<impl Read>,
    max_body_bytes: usize,
) -> Result<Vec<u8>, McpServerError> {
    let mut content_length: Option<usize> = None;
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
        if bytes == 0 {
            return Err(McpServerError::Transport("stdio closed".to_string()));
        }
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| McpServerError::Transport("invalid content length".to_string()))?;
            content_length = Some(parsed);
        }
    }
    let len = content_length
        .ok_or_else(|| McpServerError::Transport("missing content length".to_string()))?;
    if len > max_body_bytes {
        return Err(McpServerError::Transport("payload too large".to_string()));
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
    Ok(buf)
}

/// Writes a framed stdio payload using MCP Content-Length headers.
fn write_framed(writer: &mut impl Write, payload: &[u8]) -> Result<(), McpServerError> {
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer
        .write_all(header.as_bytes())
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .write_all(payload)
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer.flush().map_err(|_| McpServerError::Transport("stdio write failed".to_string()))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// MCP server errors.
#[derive(Debug, thiserror::Error)]
pub enum McpServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
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
        reason = "Test-only framing and dispatch assertions."
    )]

    use std::io::BufReader;
    use std::io::Cursor;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::time::Duration;

    use leanix_agent_catalog::CatalogClientSettings;
    use leanix_agent_catalog::CatalogEndpoints;
    use leanix_agent_catalog::FactSheetSearch;
    use leanix_agent_config::LeanixAgentConfig;
    use leanix_agent_config::ServerTransport;
    use serde_json::Value;
    use serde_json::json;

    use super::McpServer;
    use super::StatusCode;
    use super::dispatch_bytes;
    use super::read_framed;
    use super::write_framed;
    use crate::telemetry::McpMethod;
    use crate::telemetry::McpMetricEvent;
    use crate::telemetry::McpMetrics;
    use crate::telemetry::McpOutcome;
    use crate::telemetry::NoopMetrics;
    use crate::tools::ToolRouter;

    /// Builds a router whose catalog client points at an unreachable host.
    ///
    /// No credential is configured, so tool calls fail before any network I/O.
    fn offline_router() -> ToolRouter {
        let endpoints = CatalogEndpoints::new(
            "https://acme.invalid/services/mtm/v1/oauth2/token",
            "https://acme.invalid/services/pathfinder/v1/graphql",
        )
        .unwrap();
        let settings = CatalogClientSettings {
            api_token: None,
            timeout_ms: 1_000,
            max_response_bytes: 64 * 1024,
            allow_http: false,
            user_agent: "leanix-agent-tests/0.1".to_string(),
        };
        ToolRouter::new(FactSheetSearch::new(endpoints, settings).unwrap())
    }

    /// Dispatches a JSON-RPC request value and returns the serialized response.
    fn dispatch_value(router: &ToolRouter, body: &Value) -> (StatusCode, Value) {
        let bytes = serde_json::to_vec(body).unwrap();
        let (status, response) =
            dispatch_bytes(router, ServerTransport::Stdio, &NoopMetrics, &bytes);
        (status, serde_json::to_value(response).unwrap())
    }

    /// Metrics sink recording every observation for assertions.
    struct RecordingMetrics {
        /// Request counter events in arrival order.
        requests: Mutex<Vec<McpMetricEvent>>,
        /// Latency observations in arrival order.
        latencies: Mutex<Vec<(McpMetricEvent, Duration)>>,
    }

    impl RecordingMetrics {
        /// Creates an empty recording sink.
        fn new() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                latencies: Mutex::new(Vec::new()),
            })
        }
    }

    impl McpMetrics for RecordingMetrics {
        fn record_request(&self, event: McpMetricEvent) {
            self.requests.lock().unwrap().push(event);
        }

        fn record_latency(&self, event: McpMetricEvent, latency: Duration) {
            self.latencies.lock().unwrap().push((event, latency));
        }
    }

    #[test]
    fn tools_list_returns_registered_definitions() {
        let router = offline_router();
        let (status, response) = dispatch_value(
            &router,
            &json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["id"], 1);
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["tools"][0]["name"], "get_fact_sheets");
    }

    #[test]
    fn tool_call_wraps_structured_result_in_content() {
        // Missing credential: the router folds the catalog failure into a
        // structured result inside a successful JSON-RPC envelope.
        let router = offline_router();
        let (status, response) = dispatch_value(
            &router,
            &json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/call",
                "params": {"name": "get_fact_sheets", "arguments": {"app_name": "billing"}}
            }),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["id"], 7);
        assert!(response.get("error").is_none());
        let content = &response["result"]["content"][0];
        assert_eq!(content["type"], "json");
        assert_eq!(content["json"]["status"], "error");
        let message = content["json"]["error_message"].as_str().unwrap();
        assert!(message.contains("configuration error"));
    }

    #[test]
    fn wrong_jsonrpc_version_rejected() {
        let router = offline_router();
        let (status, response) = dispatch_value(
            &router,
            &json!({"jsonrpc": "1.0", "id": 3, "method": "tools/list"}),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["id"], 3);
        assert_eq!(response["error"]["code"], -32600);
    }

    #[test]
    fn unsupported_method_returns_method_not_found() {
        let router = offline_router();
        let (status, response) = dispatch_value(
            &router,
            &json!({"jsonrpc": "2.0", "id": 4, "method": "resources/list"}),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn unknown_tool_returns_method_not_found_code() {
        let router = offline_router();
        let (status, response) = dispatch_value(
            &router,
            &json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": {"name": "get_weather", "arguments": {}}
            }),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn malformed_tool_params_return_invalid_params_code() {
        let router = offline_router();

        // Params missing the tool name fail envelope decoding.
        let (status, response) = dispatch_value(
            &router,
            &json!({
                "jsonrpc": "2.0",
                "id": 6,
                "method": "tools/call",
                "params": {"arguments": {"app_name": "billing"}}
            }),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], -32602);

        // Mis-typed tool arguments fail request decoding.
        let (status, response) = dispatch_value(
            &router,
            &json!({
                "jsonrpc": "2.0",
                "id": 8,
                "method": "tools/call",
                "params": {"name": "get_fact_sheets", "arguments": {"app_name": 5}}
            }),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn malformed_body_rejected_with_null_id() {
        let router = offline_router();
        let (status, response) =
            dispatch_bytes(&router, ServerTransport::Stdio, &NoopMetrics, b"not json");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], -32600);
    }

    #[test]
    fn installed_metrics_sink_sees_request_and_latency() {
        let mut config = LeanixAgentConfig::default();
        config.workspace.subdomain = "acme".to_string();
        let sink = RecordingMetrics::new();
        let server = McpServer::from_config(config).unwrap().with_metrics(sink.clone());

        let bytes =
            serde_json::to_vec(&json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}))
                .unwrap();
        let (status, _response) = dispatch_bytes(
            &server.router,
            ServerTransport::Stdio,
            server.metrics.as_ref(),
            &bytes,
        );
        assert_eq!(status, StatusCode::OK);

        let requests = sink.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, McpMethod::ToolsList);
        assert_eq!(requests[0].outcome, McpOutcome::Ok);
        assert_eq!(requests[0].transport, ServerTransport::Stdio);
        assert!(requests[0].error_code.is_none());
        assert!(requests[0].tool.is_none());

        let latencies = sink.latencies.lock().unwrap();
        assert_eq!(latencies.len(), 1);
        assert_eq!(latencies[0].0.method, McpMethod::ToolsList);
    }

    #[test]
    fn read_framed_rejects_payload_over_limit() {
        let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let framed = format!(
            "Content-Length: {}\r\n\r\n{}",
            payload.len(),
            String::from_utf8_lossy(payload)
        );
        let mut reader = BufReader::new(Cursor::new(framed.into_bytes()));
        let result = read_framed(&mut reader, payload.len() - 1);
        assert!(result.is_err());
    }

    #[test]
    fn read_framed_accepts_payload_at_limit() {
        let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let framed = format!(
            "Content-Length: {}\r\n\r\n{}",
            payload.len(),
            String::from_utf8_lossy(payload)
        );
        let mut reader = BufReader::new(Cursor::new(framed.into_bytes()));
        let result = read_framed(&mut reader, payload.len());
        assert!(result.is_ok());
        let bytes = result.expect("payload read");
        assert_eq!(bytes, payload);
    }

    #[test]
    fn write_framed_round_trips_through_read_framed() {
        let payload = br#"{"jsonrpc":"2.0","id":2,"method":"tools/call"}"#;
        let mut framed = Vec::new();
        write_framed(&mut framed, payload).unwrap();
        let mut reader = BufReader::new(Cursor::new(framed));
        let bytes = read_framed(&mut reader, payload.len()).unwrap();
        assert_eq!(bytes, payload);
    }

    #[test]
    fn read_framed_requires_content_length_header() {
        let framed = b"X-Other: 1\r\n\r\n{}".to_vec();
        let mut reader = BufReader::new(Cursor::new(framed));
        let result = read_framed(&mut reader, 1024);
        assert!(result.is_err());
    }
}
