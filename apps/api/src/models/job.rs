use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Moderation state of a posting. Only `Approved` jobs are shown to applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Approved,
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Approved => "approved",
            JobStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "approved" => Ok(JobStatus::Approved),
            "rejected" => Ok(JobStatus::Rejected),
            other => Err(anyhow!("unknown job status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
}

impl std::str::FromStr for LocationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(LocationType::Remote),
            "hybrid" => Ok(LocationType::Hybrid),
            "onsite" => Ok(LocationType::Onsite),
            other => Err(anyhow!("unknown location type '{other}'")),
        }
    }
}

/// A job opening posted by a referrer.
///
/// Only `role`, `company` and `description` take part in matching; the rest
/// is carried through to callers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub role: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub referral_notes: String,
    pub location: LocationType,
    pub status: JobStatus,
    pub referrer_id: String,
    pub referrer_name: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape of the `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub description: String,
    pub referral_notes: Option<String>,
    pub location: String,
    pub status: String,
    pub referrer_id: Uuid,
    pub referrer_name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = anyhow::Error;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(JobPosting {
            id: row.id.to_string(),
            role: row.role,
            company: row.company,
            description: row.description,
            referral_notes: row.referral_notes.unwrap_or_default(),
            location: row.location.parse()?,
            status: row.status.parse()?,
            referrer_id: row.referrer_id.to_string(),
            referrer_name: row.referrer_name,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(location: &str, status: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build APIs".to_string(),
            referral_notes: None,
            location: location.to_string(),
            status: status.to_string(),
            referrer_id: Uuid::new_v4(),
            referrer_name: "Sam".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_to_posting() {
        let row = make_row("hybrid", "approved");
        let id = row.id;
        let job = JobPosting::try_from(row).unwrap();
        assert_eq!(job.id, id.to_string());
        assert_eq!(job.location, LocationType::Hybrid);
        assert_eq!(job.status, JobStatus::Approved);
        assert_eq!(job.referral_notes, "");
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        assert!(JobPosting::try_from(make_row("moon", "approved")).is_err());
    }

    #[test]
    fn test_posting_serializes_camel_case() {
        let job = JobPosting::try_from(make_row("remote", "pending")).unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["referrerName"], "Sam");
        assert_eq!(value["location"], "remote");
        assert_eq!(value["status"], "pending");
    }
}
