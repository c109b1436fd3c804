//! Streaming (SSE) transport.
//!
//! `GET /sse` opens a long-lived connection: the caller's credential is read
//! from the request headers once and scoped to the connection through its
//! session entry. The first event names the companion message endpoint;
//! replies flow back as `message` events. `POST /messages/?session_id=`
//! carries client messages for an open connection.
//!
//! The session entry (and with it the connection's credential scope) is torn
//! down by a guard owned by the response stream, so teardown runs on every
//! exit path: clean close, error, or cancellation.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::stream;
use futures::StreamExt;
use rmcp::model::{ClientJsonRpcMessage, ServerJsonRpcMessage};
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::{protocol, read_auth_token, AppState};

const MESSAGES_PATH: &str = "/messages/";

struct SseSession {
    tx: mpsc::Sender<ServerJsonRpcMessage>,
    auth_token: Option<String>,
}

/// Live SSE connections keyed by session id.
///
/// The only locked shared state in the server; each entry holds that
/// connection's outbound sender and its credential.
#[derive(Default)]
pub struct SseSessions {
    inner: Mutex<HashMap<String, SseSession>>,
}

impl SseSessions {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SseSession>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(
        &self,
        session_id: String,
        tx: mpsc::Sender<ServerJsonRpcMessage>,
        auth_token: Option<String>,
    ) {
        self.lock().insert(session_id, SseSession { tx, auth_token });
    }

    fn get(&self, session_id: &str) -> Option<(mpsc::Sender<ServerJsonRpcMessage>, Option<String>)> {
        self.lock()
            .get(session_id)
            .map(|session| (session.tx.clone(), session.auth_token.clone()))
    }

    fn remove(&self, session_id: &str) {
        self.lock().remove(session_id);
    }

    /// Number of open connections.
    pub fn open_connections(&self) -> usize {
        self.lock().len()
    }
}

/// Removes the session when the connection's response stream is dropped.
struct SessionGuard {
    sessions: Arc<SseSessions>,
    session_id: String,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.sessions.remove(&self.session_id);
        tracing::info!(session_id = %self.session_id, "sse connection closed");
    }
}

/// `GET /sse`: open a streaming connection.
pub async fn handle_sse(State(state): State<AppState>, headers: HeaderMap) -> Response {
    tracing::info!("Handling SSE connection");

    // Absent header is legal; resolution falls back per call.
    let auth_token = read_auth_token(&headers);
    let session_id = Uuid::new_v4().simple().to_string();
    let (tx, rx) = mpsc::channel::<ServerJsonRpcMessage>(32);
    state
        .sessions
        .insert(session_id.clone(), tx, auth_token);

    let guard = SessionGuard {
        sessions: state.sessions.clone(),
        session_id: session_id.clone(),
    };

    let endpoint = format!("{MESSAGES_PATH}?session_id={session_id}");
    let handshake = stream::once(async move {
        Ok::<_, Infallible>(Event::default().event("endpoint").data(endpoint))
    });

    let replies = stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|message| (message, rx))
    })
    .map(move |message| {
        // The guard lives inside this stream; dropping the response tears
        // the session down on every exit path.
        let _held = &guard;
        let event = match serde_json::to_string(&message) {
            Ok(data) => Event::default().event("message").data(data),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize outbound message");
                Event::default().comment("serialization error")
            }
        };
        Ok::<_, Infallible>(event)
    })
    .take_until(state.shutdown.clone().cancelled_owned());

    Sse::new(handshake.chain(replies))
        .keep_alive(KeepAlive::default())
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct PostMessageQuery {
    pub session_id: String,
}

/// `POST /messages/?session_id=`: one client message for an open connection.
pub async fn handle_post_message(
    State(state): State<AppState>,
    Query(PostMessageQuery { session_id }): Query<PostMessageQuery>,
    Json(message): Json<ClientJsonRpcMessage>,
) -> Response {
    let Some((tx, auth_token)) = state.sessions.get(&session_id) else {
        return (StatusCode::NOT_FOUND, "session not found").into_response();
    };

    tracing::debug!(%session_id, "client message received");

    let Some(reply) = protocol::handle_message(&state, auth_token.as_deref(), message).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    if tx.send(reply).await.is_err() {
        // Receiver already dropped; the guard has removed (or is removing)
        // the session.
        state.sessions.remove(&session_id);
        return (StatusCode::NOT_FOUND, "session closed").into_response();
    }

    StatusCode::ACCEPTED.into_response()
}
