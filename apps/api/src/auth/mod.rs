//! Session identity — resolved per request from a Bearer JWT.
//!
//! Every service operation receives an explicit `Identity`; nothing reads
//! caller identity from ambient global state. The `premium` claim is
//! snapshotted from the account row at token issuance and is not re-read
//! on later requests.

pub mod handlers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account email.
    pub sub: String,
    pub premium: bool,
    pub exp: i64,
    pub iat: i64,
}

/// The authenticated caller of the current request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
    pub premium: bool,
}

pub fn issue_token(email: &str, premium: bool, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        premium,
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))
}

/// Validates a token's signature and expiry and returns the caller identity.
/// Any decode failure collapses to `Unauthorized` — the reason is not leaked.
pub fn validate_token(token: &str, secret: &str) -> Result<Identity, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;

    Ok(Identity {
        email: data.claims.sub,
        premium: data.claims.premium,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(parts)?;
        validate_token(&token, &state.config.jwt_secret)
    }
}

fn extract_bearer(parts: &Parts) -> Result<String, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-jwt";

    #[test]
    fn test_token_round_trip_preserves_premium_claim() {
        let token = issue_token("owner@example.com", true, SECRET).expect("issue should succeed");
        let identity = validate_token(&token, SECRET).expect("validate should succeed");

        assert_eq!(identity.email, "owner@example.com");
        assert!(identity.premium);
    }

    #[test]
    fn test_token_round_trip_standard_tier() {
        let token = issue_token("basic@example.com", false, SECRET).expect("issue should succeed");
        let identity = validate_token(&token, SECRET).expect("validate should succeed");

        assert!(!identity.premium);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let claims = Claims {
            sub: "owner@example.com".to_string(),
            premium: false,
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
            iat: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token("owner@example.com", true, SECRET).expect("issue should succeed");

        let result = validate_token(&token, "some-other-secret");
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
