use serde::{Deserialize, Serialize};

use crate::models::job::{JobPosting, LocationType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    /// Company name A–Z.
    Company,
}

/// Browse filters for the public job list. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<LocationType>,
    pub company: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Filters and sorts `jobs`. Sorting is stable.
pub fn apply_filters(jobs: Vec<JobPosting>, filters: &JobFilters) -> Vec<JobPosting> {
    let search = non_blank(&filters.search);
    let company = non_blank(&filters.company);

    let mut filtered: Vec<JobPosting> = jobs
        .into_iter()
        .filter(|job| {
            search.as_deref().map_or(true, |q| {
                job.role.to_lowercase().contains(q)
                    || job.company.to_lowercase().contains(q)
                    || job.description.to_lowercase().contains(q)
            })
        })
        .filter(|job| filters.location.map_or(true, |loc| job.location == loc))
        .filter(|job| {
            company
                .as_deref()
                .map_or(true, |c| job.company.to_lowercase().contains(c))
        })
        .collect();

    match filters.sort_by {
        SortBy::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Company => {
            filtered.sort_by_key(|job| job.company.to_lowercase());
        }
    }

    filtered
}
