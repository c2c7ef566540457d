use actix_web::HttpRequest;
use thiserror::Error;
use uuid::Uuid;

use super::jwt::validate_token;
use super::model::Claims;

/// Reasons a request fails authentication. Messages are surfaced verbatim
/// in the error response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Malformed subject claim")]
    BadSubject,
}

/// Extract token from Authorization header
fn extract_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|auth| {
            if auth.starts_with("Bearer ") {
                Some(auth[7..].to_string())
            } else {
                None
            }
        })
}

/// Validate token from HttpRequest and return claims
pub fn validate_request_token(req: &HttpRequest) -> Result<Claims, AuthError> {
    let token = extract_token(req).ok_or(AuthError::MissingToken)?;

    validate_token(&token).map_err(|e| {
        log::warn!("Token validation failed: {:?}", e);
        AuthError::InvalidToken
    })
}

/// Validate the request token and parse its subject as the caller's auth id.
pub fn resolve_caller(req: &HttpRequest) -> Result<(Claims, Uuid), AuthError> {
    let claims = validate_request_token(req)?;
    let auth_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::BadSubject)?;
    Ok((claims, auth_id))
}
