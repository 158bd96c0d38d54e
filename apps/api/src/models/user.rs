#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Account row backing token issuance. `premium` is the source of truth for
/// the tier and is granted out of band; sessions snapshot it at login.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub premium: bool,
    pub created_at: DateTime<Utc>,
}
