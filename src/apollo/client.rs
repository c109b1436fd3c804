//! HTTP client for the Apollo REST API.

use reqwest::header;
use serde_json::Value;

use super::error::{ApolloError, ApolloResult};
use super::request::{CallParams, CallSpec};
use crate::registry::ResponseShape;

/// Successful upstream response, already decoded per the tool's declared
/// shape. Some Apollo endpoints return bare text (for example `true`) rather
/// than JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    Json(Value),
    Text(String),
}

/// Stateless adapter issuing exactly one HTTP request per tool call.
#[derive(Debug, Clone)]
pub struct ApolloClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApolloClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("apollo-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Execute one upstream call with the resolved credential.
    ///
    /// Never panics and never raises past this layer: every outcome maps to
    /// `UpstreamPayload` or one of the three `ApolloError` classes.
    pub async fn execute(&self, token: &str, spec: &CallSpec) -> ApolloResult<UpstreamPayload> {
        let url = format!("{}{}", self.base_url, spec.path);

        let mut request = self
            .http
            .request(spec.method.clone(), &url)
            .header("x-api-key", token)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CACHE_CONTROL, "no-cache");

        request = match &spec.params {
            CallParams::Query(pairs) => request.query(pairs),
            CallParams::Body(body) => request.json(body),
        };

        tracing::debug!(method = %spec.method, url = %url, "issuing upstream request");

        let response = request.send().await.map_err(ApolloError::Transport)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApolloError::Unexpected(e.to_string()))?;

        if !status.is_success() {
            return Err(ApolloError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match spec.shape {
            ResponseShape::Json => serde_json::from_str(&body)
                .map(UpstreamPayload::Json)
                .map_err(|e| {
                    ApolloError::Unexpected(format!("invalid JSON from upstream: {e}"))
                }),
            ResponseShape::Text => Ok(UpstreamPayload::Text(body)),
        }
    }
}
