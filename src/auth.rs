//! Per-request credential resolution.
//!
//! Callers may supply a bearer credential per request through the
//! `x-auth-token` header. When they do not, the process-wide fallback
//! credential (loaded once at startup from `APOLLO_API_KEY`) applies. The
//! per-request token is threaded explicitly from the transport layer through
//! the dispatcher into the upstream adapter, so concurrent requests can never
//! observe each other's credential.

use thiserror::Error;

/// Request header carrying the caller's credential on both transports.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// No per-request credential and no process-wide fallback exists.
///
/// Never fatal: the dispatcher reports it to the caller as a per-call error
/// and the upstream call is simply not attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no authentication token available")]
pub struct CredentialError;

/// Resolves the effective credential for one logical request.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    fallback: Option<String>,
}

impl CredentialResolver {
    pub fn new(fallback: Option<String>) -> Self {
        Self {
            fallback: fallback.filter(|token| !token.is_empty()),
        }
    }

    /// Resolve the active credential: a non-empty per-request token wins,
    /// otherwise the process fallback applies. Never blocks.
    pub fn resolve(&self, request_token: Option<&str>) -> Result<String, CredentialError> {
        if let Some(token) = request_token.filter(|token| !token.is_empty()) {
            return Ok(token.to_string());
        }
        self.fallback.clone().ok_or(CredentialError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_token_wins_over_fallback() {
        let resolver = CredentialResolver::new(Some("fallback-key".to_string()));
        assert_eq!(resolver.resolve(Some("caller-key")).unwrap(), "caller-key");
    }

    #[test]
    fn missing_request_token_uses_fallback() {
        let resolver = CredentialResolver::new(Some("fallback-key".to_string()));
        assert_eq!(resolver.resolve(None).unwrap(), "fallback-key");
        assert_eq!(resolver.resolve(Some("")).unwrap(), "fallback-key");
    }

    #[test]
    fn no_credential_anywhere_fails() {
        let resolver = CredentialResolver::new(None);
        assert_eq!(resolver.resolve(None), Err(CredentialError));
    }

    #[test]
    fn empty_fallback_counts_as_absent() {
        let resolver = CredentialResolver::new(Some(String::new()));
        assert_eq!(resolver.resolve(None), Err(CredentialError));
    }
}
