//! Tool invocation dispatch.
//!
//! An invocation moves Received -> Validated -> Dispatched -> Completed, or
//! terminates Rejected when the tool is unknown or required arguments are
//! missing. Every outcome, success or failure, is returned as a
//! `CallToolResult` value; nothing propagates past this boundary to the
//! transport layer.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content};

use crate::apollo::{ApolloClient, CallSpec, UpstreamPayload};
use crate::auth::CredentialResolver;
use crate::registry::{JsonObject, Registry};

/// Validates invocations against the registry and drives the upstream
/// adapter with the request's credential.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    client: ApolloClient,
    credentials: CredentialResolver,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<Registry>,
        client: ApolloClient,
        credentials: CredentialResolver,
    ) -> Self {
        Self {
            registry,
            client,
            credentials,
        }
    }

    /// Dispatch one tool invocation with the caller's per-request token.
    pub async fn dispatch(
        &self,
        request_token: Option<&str>,
        name: &str,
        arguments: &JsonObject,
    ) -> CallToolResult {
        let Some(def) = self.registry.get(name) else {
            tracing::warn!(tool = name, "unknown tool invoked");
            return error_text(format!("Unknown tool: {name}"));
        };

        let missing = def.missing_required(arguments);
        if !missing.is_empty() {
            tracing::debug!(tool = name, ?missing, "invocation rejected");
            return error_text(rejection_message(&missing));
        }

        let token = match self.credentials.resolve(request_token) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(tool = name, "credential resolution failed: {e}");
                return error_text(format!("Error: {e}"));
            }
        };

        let spec = match CallSpec::build(def, arguments) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::error!(tool = name, error = %e, "failed to build upstream request");
                return error_text(format!("Error: {e}"));
            }
        };

        match self.client.execute(&token, &spec).await {
            Ok(UpstreamPayload::Json(value)) => match serde_json::to_string_pretty(&value) {
                Ok(text) => CallToolResult::success(vec![Content::text(text)]),
                Err(e) => {
                    tracing::error!(tool = name, error = %e, "failed to serialize upstream response");
                    error_text(format!("Error: Unexpected error: {e}"))
                }
            },
            Ok(UpstreamPayload::Text(body)) => CallToolResult::success(vec![Content::text(body)]),
            Err(e) => {
                tracing::error!(tool = name, error = %e, "tool call failed");
                error_text(format!("Error: {e}"))
            }
        }
    }
}

fn error_text(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message)])
}

fn rejection_message(missing: &[&str]) -> String {
    if let [name] = missing {
        format!("Missing required parameter: {name}.")
    } else {
        format!("Missing required parameters: {}.", missing.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dispatcher() -> Dispatcher {
        // Unroutable base: any dispatch reaching the network fails fast with
        // a transport error rather than a validation message.
        let client = ApolloClient::new("http://127.0.0.1:9").expect("client builds");
        Dispatcher::new(
            Arc::new(Registry::new().expect("registry builds")),
            client,
            CredentialResolver::new(Some("test-key".to_string())),
        )
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn result_text(result: &CallToolResult) -> String {
        serde_json::to_value(&result.content[0])
            .ok()
            .and_then(|content| {
                content
                    .get("text")
                    .and_then(|text| text.as_str().map(str::to_string))
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let result = dispatcher()
            .dispatch(None, "apollo_frobnicate", &JsonObject::new())
            .await;
        assert_eq!(result_text(&result), "Unknown tool: apollo_frobnicate");
    }

    #[tokio::test]
    async fn missing_single_required_argument() {
        let result = dispatcher()
            .dispatch(None, "apollo_view_account", &JsonObject::new())
            .await;
        assert_eq!(
            result_text(&result),
            "Missing required parameter: account_id."
        );
    }

    #[tokio::test]
    async fn missing_arguments_are_listed_in_order() {
        let result = dispatcher()
            .dispatch(
                None,
                "apollo_update_account_stage_bulk",
                &args(json!({ "account_ids": [] })),
            )
            .await;
        assert_eq!(
            result_text(&result),
            "Missing required parameters: account_ids, account_stage_id."
        );
    }

    #[tokio::test]
    async fn null_required_argument_is_missing() {
        let result = dispatcher()
            .dispatch(
                None,
                "apollo_view_account",
                &args(json!({ "account_id": null })),
            )
            .await;
        assert_eq!(
            result_text(&result),
            "Missing required parameter: account_id."
        );
    }

    #[tokio::test]
    async fn missing_credential_is_a_per_call_error() {
        let client = ApolloClient::new("http://127.0.0.1:9").expect("client builds");
        let dispatcher = Dispatcher::new(
            Arc::new(Registry::new().expect("registry builds")),
            client,
            CredentialResolver::new(None),
        );
        let result = dispatcher
            .dispatch(
                None,
                "apollo_view_account",
                &args(json!({ "account_id": "abc" })),
            )
            .await;
        assert_eq!(
            result_text(&result),
            "Error: no authentication token available"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_reported_as_value() {
        let result = dispatcher()
            .dispatch(
                Some("caller-key"),
                "apollo_view_account",
                &args(json!({ "account_id": "abc" })),
            )
            .await;
        let text = result_text(&result);
        assert!(
            text.starts_with("Error: Request failed:"),
            "unexpected text: {text}"
        );
    }
}
