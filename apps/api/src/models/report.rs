use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted SWOT report. Immutable once created — no update path exists
/// anywhere in the service, and reports are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: Uuid,
    pub owner_email: String,
    /// Original free-text input, stored verbatim.
    pub business_info: String,
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
    /// The creator's tier at submission time, never re-evaluated.
    pub premium: bool,
    pub created_at: DateTime<Utc>,
}
