//! Network-facing transports.
//!
//! Two ingress adapters converge on the same dispatcher: a persistent SSE
//! connection (`GET /sse` plus `POST /messages/`) and a stateless
//! StreamableHTTP endpoint (`/mcp`). Both extract the caller's credential
//! from the `x-auth-token` header and thread it through request handling.

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::auth::AUTH_TOKEN_HEADER;
use crate::dispatcher::Dispatcher;
use crate::registry::Registry;

pub mod protocol;
pub mod sse;
pub mod streamable;

pub use sse::SseSessions;

/// Shared state behind both transports.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub dispatcher: Arc<Dispatcher>,
    pub sessions: Arc<SseSessions>,
    /// Cancelled exactly once when shutdown begins; long-lived streams end
    /// so in-flight work can drain.
    pub shutdown: CancellationToken,
    /// Buffered JSON response mode for the stateless transport.
    pub json_response: bool,
}

/// Assemble the application router with both transports bound to the same
/// dispatcher.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sse", get(sse::handle_sse))
        .route("/messages/", post(sse::handle_post_message))
        .route(
            "/mcp",
            post(streamable::post_mcp)
                .get(streamable::reject_get)
                .delete(streamable::reject_delete),
        )
        .with_state(state)
}

/// Read the caller's credential header as UTF-8 text. Absent and empty are
/// both treated as "no per-request credential", deferring to the fallback.
pub(crate) fn read_auth_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTH_TOKEN_HEADER)?;
    let token = String::from_utf8_lossy(raw.as_bytes()).into_owned();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
