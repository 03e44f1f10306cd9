//! API key authorization.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Decides whether a presented credential authorizes a request.
///
/// A pluggable seam so deployments can swap the static key for something
/// stronger without touching the handlers.
pub trait KeyValidator: Send + Sync {
    fn validate(&self, presented: Option<&str>) -> bool;
}

/// Compares against a single configured key.
///
/// With no key configured every request passes; this is the local demo
/// mode, not a production posture.
pub struct StaticKeyValidator {
    key: Option<String>,
}

impl StaticKeyValidator {
    pub fn new(key: Option<String>) -> Self {
        Self { key }
    }
}

impl KeyValidator for StaticKeyValidator {
    fn validate(&self, presented: Option<&str>) -> bool {
        match &self.key {
            None => true,
            Some(expected) => presented == Some(expected.as_str()),
        }
    }
}

/// Middleware that checks the `Authorization: Bearer <key>` header.
pub async fn require_api_key(
    State(validator): State<Arc<dyn KeyValidator>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if !validator.validate(presented) {
        return Err(ApiError::unauthorized("Invalid or missing API key"));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_configured_key_allows_everything() {
        let v = StaticKeyValidator::new(None);
        assert!(v.validate(None));
        assert!(v.validate(Some("anything")));
    }

    #[test]
    fn test_configured_key_requires_exact_match() {
        let v = StaticKeyValidator::new(Some("s3cret".to_string()));
        assert!(v.validate(Some("s3cret")));
        assert!(!v.validate(Some("wrong")));
        assert!(!v.validate(None));
    }

    #[test]
    fn test_empty_presented_key_rejected() {
        let v = StaticKeyValidator::new(Some("s3cret".to_string()));
        assert!(!v.validate(Some("")));
    }
}
