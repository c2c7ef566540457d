use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::env;

use super::model::Claims;

const DEFAULT_JWT_SECRET: &str = "statuts-jwt-secret-change-in-production";
const AUDIENCE: &str = "authenticated";
const DEV_TOKEN_EXPIRY_SECONDS: i64 = 60 * 60; // 1 hour

fn get_jwt_secret() -> String {
    env::var("SUPABASE_JWT_SECRET").unwrap_or_else(|_| {
        log::warn!("SUPABASE_JWT_SECRET not set, using default secret. SET THIS IN PRODUCTION!");
        DEFAULT_JWT_SECRET.to_string()
    })
}

/// Sign claims with the configured secret.
pub fn sign_claims(claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Issue a short-lived access token for local development and tests.
/// Production tokens are minted by Supabase Auth, not by this service.
pub fn issue_dev_token(auth_id: &str, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: auth_id.to_string(),
        aud: AUDIENCE.to_string(),
        email: Some(email.to_string()),
        role: Some("authenticated".to_string()),
        exp: now + DEV_TOKEN_EXPIRY_SECONDS as usize,
        iat: now,
    };
    sign_claims(&claims)
}

/// Validate and decode a Supabase access token.
pub fn validate_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let mut validation = Validation::default();
    validation.set_audience(&[AUDIENCE]);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
