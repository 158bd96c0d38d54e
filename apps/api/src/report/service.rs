//! Report Service — orchestrates a SWOT analysis request end to end.
//!
//! Flow: tier-dependent prompt → single LLM call → section extraction →
//! persist → respond. A report is written only after the analysis fully
//! succeeds; a failed call leaves no partial row behind.

use tracing::info;
use uuid::Uuid;

use crate::auth::Identity;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::report::ReportRow;
use crate::report::extractor::extract_sections;
use crate::report::prompts::{analysis_prompt, ANALYSIS_SYSTEM};
use crate::report::store::{NewReport, ReportStore};

/// Runs one analysis for the caller and persists the result.
///
/// Two identical submissions are two independent analyses and two stored
/// reports — there is no deduplication.
pub async fn create_report(
    store: &dyn ReportStore,
    llm: &LlmClient,
    identity: &Identity,
    business_info: &str,
) -> Result<ReportRow, AppError> {
    if business_info.trim().is_empty() {
        return Err(AppError::Validation(
            "Business information is required.".to_string(),
        ));
    }

    let prompt = analysis_prompt(identity.premium, business_info);
    let raw = llm
        .complete(&prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("analysis call failed: {e}")))?;

    let stored = store.insert(build_report(identity, business_info, &raw)).await?;

    info!("Stored report {} for {}", stored.id, identity.email);
    Ok(stored)
}

/// Assembles the unstored report from raw model output. The creator's tier
/// is frozen into the row here and never re-evaluated afterwards.
pub fn build_report(identity: &Identity, business_info: &str, raw: &str) -> NewReport {
    let sections = extract_sections(raw);
    NewReport {
        owner_email: identity.email.clone(),
        business_info: business_info.to_string(),
        strengths: sections.strengths,
        weaknesses: sections.weaknesses,
        opportunities: sections.opportunities,
        threats: sections.threats,
        premium: identity.premium,
    }
}

/// All of the caller's reports, most recent first.
pub async fn list_reports(
    store: &dyn ReportStore,
    identity: &Identity,
) -> Result<Vec<ReportRow>, AppError> {
    Ok(store.find_by_owner(&identity.email).await?)
}

/// Owner-restricted single fetch. A report owned by someone else answers
/// `NotFound` rather than `Forbidden`, so report ids cannot be probed.
pub async fn get_report(
    store: &dyn ReportStore,
    identity: &Identity,
    id: Uuid,
) -> Result<ReportRow, AppError> {
    store
        .find(id)
        .await?
        .filter(|r| r.owner_email == identity.email)
        .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::report::extractor::NOT_AVAILABLE;

    struct InMemoryStore {
        rows: Mutex<Vec<ReportRow>>,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }

        fn with_rows(rows: Vec<ReportRow>) -> Self {
            Self {
                rows: Mutex::new(rows),
            }
        }
    }

    #[async_trait]
    impl ReportStore for InMemoryStore {
        async fn insert(&self, report: NewReport) -> Result<ReportRow, sqlx::Error> {
            let row = ReportRow {
                id: Uuid::new_v4(),
                owner_email: report.owner_email,
                business_info: report.business_info,
                strengths: report.strengths,
                weaknesses: report.weaknesses,
                opportunities: report.opportunities,
                threats: report.threats,
                premium: report.premium,
                created_at: Utc::now(),
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn find(&self, id: Uuid) -> Result<Option<ReportRow>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        async fn find_by_owner(&self, email: &str) -> Result<Vec<ReportRow>, sqlx::Error> {
            let mut rows: Vec<ReportRow> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.owner_email == email)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }
    }

    fn identity(email: &str, premium: bool) -> Identity {
        Identity {
            email: email.to_string(),
            premium,
        }
    }

    fn stored_report(owner: &str, age_minutes: i64) -> ReportRow {
        ReportRow {
            id: Uuid::new_v4(),
            owner_email: owner.to_string(),
            business_info: "A bakery".to_string(),
            strengths: "Good team".to_string(),
            weaknesses: "Cash flow".to_string(),
            opportunities: "New market".to_string(),
            threats: "Competition".to_string(),
            premium: false,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_build_report_freezes_premium_tier() {
        let raw = "Strengths: Good team\nWeaknesses: Cash flow\nOpportunities: New market\nThreats: Competition";
        let report = build_report(&identity("owner@example.com", true), "A bakery", raw);

        assert!(report.premium);
        assert_eq!(report.owner_email, "owner@example.com");
        assert_eq!(report.business_info, "A bakery");
        assert_eq!(report.strengths, "Good team");
    }

    #[test]
    fn test_build_report_standard_tier_and_missing_sections() {
        let report = build_report(
            &identity("owner@example.com", false),
            "A bakery",
            "Strengths: Good team",
        );

        assert!(!report.premium);
        assert_eq!(report.strengths, "Good team");
        assert_eq!(report.weaknesses, NOT_AVAILABLE);
        assert_eq!(report.opportunities, NOT_AVAILABLE);
        assert_eq!(report.threats, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_create_report_rejects_empty_input_before_any_call() {
        let store = InMemoryStore::new();
        let llm = LlmClient::new("test-key".to_string());

        let result =
            create_report(&store, &llm, &identity("owner@example.com", false), "   ").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_reports_only_returns_owner_rows_newest_first() {
        let store = InMemoryStore::with_rows(vec![
            stored_report("owner@example.com", 30),
            stored_report("other@example.com", 10),
            stored_report("owner@example.com", 5),
        ]);

        let reports = list_reports(&store, &identity("owner@example.com", false))
            .await
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.owner_email == "owner@example.com"));
        assert!(reports[0].created_at > reports[1].created_at);
    }

    #[tokio::test]
    async fn test_get_report_returns_own_report() {
        let row = stored_report("owner@example.com", 1);
        let id = row.id;
        let store = InMemoryStore::with_rows(vec![row]);

        let report = get_report(&store, &identity("owner@example.com", false), id)
            .await
            .unwrap();

        assert_eq!(report.id, id);
    }

    #[tokio::test]
    async fn test_get_report_hides_foreign_reports() {
        let row = stored_report("other@example.com", 1);
        let id = row.id;
        let store = InMemoryStore::with_rows(vec![row]);

        let result = get_report(&store, &identity("owner@example.com", true), id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_report_unknown_id_is_not_found() {
        let store = InMemoryStore::new();

        let result = get_report(
            &store,
            &identity("owner@example.com", true),
            Uuid::new_v4(),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
