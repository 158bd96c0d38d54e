//! Report persistence behind the minimal store contract.
//!
//! The service issues exactly three query shapes: insert, find-by-id, and
//! find-by-owner. Reports are never updated or deleted.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::report::ReportRow;

/// A report as assembled by the service, before the store assigns its id and
/// timestamp. `premium` carries the creator's tier at submission time.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub owner_email: String,
    pub business_info: String,
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
    pub premium: bool,
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persists a report and returns the stored row with id and timestamp.
    async fn insert(&self, report: NewReport) -> Result<ReportRow, sqlx::Error>;

    /// Fetches a single report by id.
    async fn find(&self, id: Uuid) -> Result<Option<ReportRow>, sqlx::Error>;

    /// All reports owned by `email`, most recent first.
    async fn find_by_owner(&self, email: &str) -> Result<Vec<ReportRow>, sqlx::Error>;
}

/// Production store over the shared PostgreSQL pool.
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, report: NewReport) -> Result<ReportRow, sqlx::Error> {
        sqlx::query_as::<_, ReportRow>(
            r#"
            INSERT INTO reports
                (id, owner_email, business_info, strengths, weaknesses,
                 opportunities, threats, premium)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&report.owner_email)
        .bind(&report.business_info)
        .bind(&report.strengths)
        .bind(&report.weaknesses)
        .bind(&report.opportunities)
        .bind(&report.threats)
        .bind(report.premium)
        .fetch_one(&self.pool)
        .await
    }

    async fn find(&self, id: Uuid) -> Result<Option<ReportRow>, sqlx::Error> {
        sqlx::query_as::<_, ReportRow>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_owner(&self, email: &str) -> Result<Vec<ReportRow>, sqlx::Error> {
        sqlx::query_as::<_, ReportRow>(
            "SELECT * FROM reports WHERE owner_email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
    }
}
