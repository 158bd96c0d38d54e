//! Axum route handlers for session token issuance.
//!
//! The sign-in UI is a separate frontend; these endpoints only mint tokens.
//! Premium is never set here — it is granted out of band on the account row
//! and picked up by the next login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::issue_token;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub email: String,
    pub premium: bool,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let password_hash = hash_password(&req.password)?;

    // New accounts always start on the standard tier.
    sqlx::query("INSERT INTO users (id, email, password_hash, premium) VALUES ($1, $2, $3, FALSE)")
        .bind(Uuid::new_v4())
        .bind(&email)
        .bind(&password_hash)
        .execute(&state.db)
        .await?;

    tracing::info!("Registered account {email}");

    let token = issue_token(&email, false, &state.config.jwt_secret)?;
    Ok(Json(TokenResponse {
        token,
        email,
        premium: false,
    }))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    // Unknown email and bad password answer identically
    let user = user.ok_or(AppError::Unauthorized)?;

    verify_password(&req.password, &user.password_hash)?;

    let token = issue_token(&user.email, user.premium, &state.config.jwt_secret)?;
    Ok(Json(TokenResponse {
        token,
        email: user.email,
        premium: user.premium,
    }))
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> Result<(), AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored hash is invalid: {e}")))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("secure_password_123").expect("hashing should succeed");

        assert!(verify_password("secure_password_123", &hash).is_ok());
    }

    #[test]
    fn test_password_verify_wrong_password() {
        let hash = hash_password("secure_password_123").expect("hashing should succeed");

        let result = verify_password("wrong_password", &hash);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same_password").expect("hashing should succeed");
        let b = hash_password("same_password").expect("hashing should succeed");

        assert_ne!(a, b);
    }
}
