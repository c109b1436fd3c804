//! Stateless StreamableHTTP transport.
//!
//! All protocol traffic for one logical call is exchanged on `POST /mcp`:
//! negotiation and dispatch happen within the single request, and the
//! credential scope is bound to that request alone. Responses are delivered
//! as a one-event SSE stream, or as buffered JSON when the server runs with
//! `--json-response`.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use futures::stream;
use rmcp::model::{ClientJsonRpcMessage, ServerJsonRpcMessage};
use rmcp::transport::common::http_header::{EVENT_STREAM_MIME_TYPE, JSON_MIME_TYPE};

use super::{protocol, read_auth_token, AppState};

/// `POST /mcp`: negotiate and dispatch one message, then tear the request's
/// credential scope down with the request itself.
pub async fn post_mcp(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tracing::info!("Handling StreamableHTTP request");

    if let Err(rejection) = ensure_accepts_post(&headers) {
        return rejection.into_response();
    }
    if let Err(rejection) = ensure_json_content_type(&headers) {
        return rejection.into_response();
    }

    let message: ClientJsonRpcMessage = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, format!("invalid json: {e}")).into_response();
        }
    };

    // Raw header bytes decoded as UTF-8; absence is handled at dispatch time.
    let auth_token = read_auth_token(&headers);

    match protocol::handle_message(&state, auth_token.as_deref(), message).await {
        Some(reply) if state.json_response => axum::Json(reply).into_response(),
        Some(reply) => sse_single_message(&reply),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Stateless mode has no server-push stream to resume.
pub async fn reject_get() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "stateless transport does not expose a standalone event stream",
    )
        .into_response()
}

/// Stateless mode has no session to terminate.
pub async fn reject_delete() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "stateless transport has no session to terminate",
    )
        .into_response()
}

/// A single server message rendered as a one-event SSE response.
fn sse_single_message(message: &ServerJsonRpcMessage) -> Response {
    let data = match serde_json::to_string(message) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize server message");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let stream =
        stream::once(async move { Ok::<_, Infallible>(Event::default().data(data)) });
    let mut response = Sse::new(stream).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(EVENT_STREAM_MIME_TYPE),
    );
    response
}

fn ensure_accepts_post(headers: &HeaderMap) -> Result<(), (StatusCode, &'static str)> {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if accept.contains(JSON_MIME_TYPE) && accept.contains(EVENT_STREAM_MIME_TYPE) {
        Ok(())
    } else {
        Err((
            StatusCode::NOT_ACCEPTABLE,
            "Not Acceptable: Client must accept both application/json and text/event-stream",
        ))
    }
}

fn ensure_json_content_type(headers: &HeaderMap) -> Result<(), (StatusCode, &'static str)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type.starts_with(JSON_MIME_TYPE) {
        Ok(())
    } else {
        Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type: Content-Type must be application/json",
        ))
    }
}
