//! JSON-RPC protocol handling shared by both transports.
//!
//! Maps one inbound client message to at most one outbound server message.
//! Notifications produce no reply; unsupported request methods come back as
//! JSON-RPC errors rather than transport failures.

use rmcp::model::{
    ClientJsonRpcMessage, ClientRequest, EmptyResult, ErrorCode, ErrorData, Implementation,
    InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, JsonRpcVersion2_0,
    ListToolsResult, ProtocolVersion, RequestId, ServerCapabilities, ServerJsonRpcMessage,
    ServerResult,
};

use super::AppState;

/// Handle one client message with the request's credential, returning the
/// reply to deliver (if any).
pub async fn handle_message(
    state: &AppState,
    request_token: Option<&str>,
    message: ClientJsonRpcMessage,
) -> Option<ServerJsonRpcMessage> {
    match message {
        ClientJsonRpcMessage::Request(JsonRpcRequest { id, request, .. }) => {
            Some(handle_request(state, request_token, id, request).await)
        }
        ClientJsonRpcMessage::Notification(_) => {
            tracing::debug!("client notification received");
            None
        }
        _ => None,
    }
}

async fn handle_request(
    state: &AppState,
    request_token: Option<&str>,
    id: RequestId,
    request: ClientRequest,
) -> ServerJsonRpcMessage {
    match request {
        ClientRequest::InitializeRequest(init) => {
            tracing::info!("initializing mcp session");
            response(
                id,
                ServerResult::InitializeResult(initialize_result(
                    init.params.protocol_version.clone(),
                )),
            )
        }
        ClientRequest::PingRequest(_) => response(id, ServerResult::EmptyResult(EmptyResult {})),
        ClientRequest::ListToolsRequest(_) => response(
            id,
            ServerResult::ListToolsResult(ListToolsResult {
                tools: state.registry.tools(),
                next_cursor: None,
                meta: None,
            }),
        ),
        ClientRequest::CallToolRequest(call) => {
            let name = call.params.name.clone();
            let arguments = call.params.arguments.unwrap_or_default();
            let result = state
                .dispatcher
                .dispatch(request_token, name.as_ref(), &arguments)
                .await;
            response(id, ServerResult::CallToolResult(result))
        }
        other => error_response(
            id,
            ErrorCode::METHOD_NOT_FOUND,
            format!("Unsupported method: {}", other.method()),
        ),
    }
}

fn initialize_result(protocol_version: ProtocolVersion) -> InitializeResult {
    InitializeResult {
        protocol_version,
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        server_info: Implementation {
            name: "apollo-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        instructions: Some(
            "Apollo CRM MCP Server - tools for managing accounts, contacts, deals, \
             calls, tasks, and sequences through the Apollo REST API. Supply a \
             per-request credential via the x-auth-token header, or configure \
             APOLLO_API_KEY as a process-wide fallback."
                .to_string(),
        ),
    }
}

fn response(id: RequestId, result: ServerResult) -> ServerJsonRpcMessage {
    ServerJsonRpcMessage::Response(JsonRpcResponse {
        jsonrpc: JsonRpcVersion2_0,
        id,
        result,
    })
}

fn error_response(id: RequestId, code: ErrorCode, message: String) -> ServerJsonRpcMessage {
    ServerJsonRpcMessage::Error(JsonRpcError {
        jsonrpc: JsonRpcVersion2_0,
        id,
        error: ErrorData::new(code, message, None),
    })
}
