use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

use crate::error::WebError;

/// The `token -> subject` table the API trusts. This is the opaque edge of
/// the identity boundary: whatever verified a bearer token hands over the
/// subject that becomes the caller's user id.
#[derive(Clone, Default)]
pub struct AccessTokens {
    subjects: HashMap<String, String>,
}

impl AccessTokens {
    /// Parses `token:subject` pairs from a comma-separated list. A bare
    /// token maps to itself.
    pub fn from_comma_separated(tokens_str: &str) -> Self {
        let subjects = tokens_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|pair| match pair.split_once(':') {
                Some((token, subject)) => (token.to_string(), subject.to_string()),
                None => (pair.to_string(), pair.to_string()),
            })
            .collect();

        Self { subjects }
    }

    pub fn verify(&self, token: &str) -> Option<&str> {
        self.subjects.get(token).map(String::as_str)
    }
}

/// Verified caller identity, inserted into request extensions by
/// `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

/// Rejects the request with 401 before any handler logic runs unless the
/// Authorization header carries a known bearer token.
pub async fn require_auth(
    State(tokens): State<AccessTokens>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let subject = match tokens.verify(token) {
        Some(subject) => subject.to_string(),
        None => {
            tracing::warn!("Invalid bearer token attempt");
            return Err(WebError::Unauthorized);
        }
    };

    req.extensions_mut().insert(AuthUser(subject));
    Ok(next.run(req).await)
}
