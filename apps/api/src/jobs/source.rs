//! Job Source — where open postings come from.
//!
//! `AppState` holds an `Arc<dyn JobSource>`: `PgJobSource` in production,
//! `InMemoryJobSource` when seeded from a JSON fixture (`JOBS_FIXTURE`) and in tests.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow, JobStatus};

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Approved jobs, newest first, at most `limit`.
    async fn list_open_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError>;

    /// Any status. A direct link to a pending or rejected job still resolves.
    async fn get_job(&self, id: &str) -> Result<Option<JobPosting>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgJobSource {
    pool: PgPool,
}

impl PgJobSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSource for PgJobSource {
    async fn list_open_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, role, company, description, referral_notes, location,
                   status, referrer_id, referrer_name, created_at
            FROM jobs
            WHERE status = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(JobStatus::Approved.as_str())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let jobs = rows
            .into_iter()
            .map(JobPosting::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;

        info!(count = jobs.len(), "Loaded open jobs");
        Ok(jobs)
    }

    async fn get_job(&self, id: &str) -> Result<Option<JobPosting>, AppError> {
        // Non-UUID ids can never exist in this table.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, role, company, description, referral_notes, location,
                   status, referrer_id, referrer_name, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobPosting::try_from).transpose()?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Fixed set of postings held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobSource {
    jobs: Vec<JobPosting>,
}

impl InMemoryJobSource {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// Parses a JSON array of postings (camelCase fields).
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let jobs: Vec<JobPosting> =
            serde_json::from_str(raw).context("Job fixture is not a valid JSON array of jobs")?;
        Ok(Self::new(jobs))
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job fixture {}", path.display()))?;
        let source = Self::from_json(&raw)?;
        info!(count = source.jobs.len(), path = %path.display(), "Loaded job fixture");
        Ok(source)
    }
}

#[async_trait]
impl JobSource for InMemoryJobSource {
    async fn list_open_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError> {
        let mut open: Vec<JobPosting> = self
            .jobs
            .iter()
            .filter(|j| j.status == JobStatus::Approved)
            .cloned()
            .collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        open.truncate(limit);
        Ok(open)
    }

    async fn get_job(&self, id: &str) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::LocationType;
    use chrono::{TimeZone, Utc};

    fn make_job(id: &str, status: JobStatus, day: u32) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Rust".to_string(),
            referral_notes: String::new(),
            location: LocationType::Onsite,
            status,
            referrer_id: "ref".to_string(),
            referrer_name: "Ref".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_in_memory_lists_only_approved_newest_first() {
        let source = InMemoryJobSource::new(vec![
            make_job("old", JobStatus::Approved, 1),
            make_job("pending", JobStatus::Pending, 5),
            make_job("new", JobStatus::Approved, 9),
            make_job("rejected", JobStatus::Rejected, 7),
        ]);

        let jobs = source.list_open_jobs(100).await.unwrap();
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_in_memory_respects_limit() {
        let source = InMemoryJobSource::new(
            (1..=5)
                .map(|d| make_job(&d.to_string(), JobStatus::Approved, d))
                .collect(),
        );
        assert_eq!(source.list_open_jobs(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fixture_json_seeds_source() {
        let raw = r#"[
            {
                "id": "job-1",
                "role": "Rust Engineer",
                "company": "Acme",
                "description": "Services",
                "location": "remote",
                "status": "approved",
                "referrerId": "ref-1",
                "referrerName": "Robin",
                "createdAt": "2024-03-01T00:00:00Z"
            },
            {
                "id": "job-2",
                "role": "Designer",
                "company": "Acme",
                "description": "Figma",
                "referralNotes": "DM first",
                "location": "hybrid",
                "status": "pending",
                "referrerId": "ref-1",
                "referrerName": "Robin",
                "createdAt": "2024-03-02T00:00:00Z"
            }
        ]"#;

        let source = InMemoryJobSource::from_json(raw).unwrap();
        let open = source.list_open_jobs(100).await.unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, "job-1");
        assert_eq!(open[0].referral_notes, "");

        let pending = source.get_job("job-2").await.unwrap().unwrap();
        assert_eq!(pending.referral_notes, "DM first");
    }

    #[tokio::test]
    async fn test_fixture_rejects_malformed_json() {
        assert!(InMemoryJobSource::from_json(r#"{"id": "x"}"#).is_err());
        assert!(InMemoryJobSource::from_json(r#"[{"id": "x"}]"#).is_err());
    }

    #[tokio::test]
    async fn test_fixture_loads_from_file() {
        let path = std::env::temp_dir().join(format!("refboard-jobs-{}.json", Uuid::new_v4()));
        let jobs = vec![make_job("seeded", JobStatus::Approved, 4)];
        tokio::fs::write(&path, serde_json::to_string(&jobs).unwrap())
            .await
            .unwrap();

        let source = InMemoryJobSource::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(source.list_open_jobs(10).await.unwrap(), jobs);

        assert!(InMemoryJobSource::load(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_get_job() {
        let source = InMemoryJobSource::new(vec![make_job("a", JobStatus::Pending, 1)]);
        assert!(source.get_job("a").await.unwrap().is_some());
        assert!(source.get_job("b").await.unwrap().is_none());
    }
}
