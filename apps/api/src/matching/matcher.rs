//! Job suggestion engine — ranks open jobs against an applicant's skill list.
//!
//! Algorithm:
//! 1. Normalize skills (trim, drop blanks, collapse case variants).
//! 2. For each job, for each skill:
//!    - skill found anywhere in role/description/company → +1.0
//!    - skill also found in role → +0.5 bonus
//! 3. Drop jobs with no matched skill.
//! 4. Stable sort by score descending (ties keep candidate order), truncate to `limit`.
//!
//! Pure and synchronous: no I/O, no shared state.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::matching::skills::{normalize_skills, skill_key};
use crate::models::job::JobPosting;

/// Weight for a skill found anywhere in the job's searchable text.
pub const BASE_WEIGHT: f64 = 1.0;
/// Extra weight when the skill also appears in the job's role.
pub const ROLE_BONUS: f64 = 0.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A suggested job with its relevance score and the skills that explain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    /// Sum of per-skill contributions. Only meaningful relative to other
    /// results of the same call.
    pub match_score: f64,
    /// Applicant skills that matched, in the applicant's order, no duplicates.
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    /// Display percentage shown on the applicant dashboard: 20% per point.
    /// Not capped; strong matches can exceed 100.
    pub fn match_percent(&self) -> u32 {
        (self.match_score * 20.0).round() as u32
    }
}

/// Lowercased fields the matcher searches, computed once per job.
/// Kept apart so a skill never matches across a field boundary.
struct SearchableJob {
    role: String,
    description: String,
    company: String,
}

impl SearchableJob {
    fn new(job: &JobPosting) -> Self {
        Self {
            role: job.role.to_lowercase(),
            description: job.description.to_lowercase(),
            company: job.company.to_lowercase(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.role.contains(key) || self.description.contains(key) || self.company.contains(key)
    }
}

/// Scores `candidates` against `skills` and returns at most `limit` matches,
/// best first.
///
/// Returns an empty list when no skill survives normalization. `limit` must be
/// at least 1.
pub fn suggest_jobs<S: AsRef<str>>(
    skills: &[S],
    candidates: &[JobPosting],
    limit: usize,
) -> Result<Vec<MatchResult>, MatchError> {
    if limit < 1 {
        return Err(MatchError::InvalidArgument(
            "limit must be at least 1".to_string(),
        ));
    }

    let skills = normalize_skills(skills);
    if skills.is_empty() {
        return Ok(vec![]);
    }
    let keys: Vec<String> = skills.iter().map(|s| skill_key(s)).collect();

    // (candidate index, score, indices into `skills`)
    let mut scored: Vec<(usize, f64, Vec<usize>)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, job)| {
            let (score, matched) = score_job(&SearchableJob::new(job), &keys);
            (!matched.is_empty()).then_some((idx, score, matched))
        })
        .collect();

    let matched_count = scored.len();

    // sort_by is stable: equal scores keep candidate order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);

    debug!(
        skills = skills.len(),
        candidates = candidates.len(),
        matched = matched_count,
        returned = scored.len(),
        "Scored job suggestions"
    );

    Ok(scored
        .into_iter()
        .map(|(idx, match_score, matched)| MatchResult {
            job: candidates[idx].clone(),
            match_score,
            matched_skills: matched.into_iter().map(|i| skills[i].clone()).collect(),
        })
        .collect())
}

/// Scores one job. Returns the total and the indices of the matched skill keys.
fn score_job(job: &SearchableJob, keys: &[String]) -> (f64, Vec<usize>) {
    let mut score = 0.0_f64;
    let mut matched = Vec::new();

    for (i, key) in keys.iter().enumerate() {
        if !job.contains(key) {
            continue;
        }
        score += BASE_WEIGHT;
        if job.role.contains(key.as_str()) {
            score += ROLE_BONUS;
        }
        matched.push(i);
    }

    (score, matched)
}
