//! Skill normalization shared by the matcher and the HTTP layer.

use std::collections::HashSet;

/// Trims a raw skill. Returns `None` for blank input.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-folded comparison key for a trimmed skill.
pub fn skill_key(skill: &str) -> String {
    skill.to_lowercase()
}

/// Trims, drops blanks and collapses case/whitespace variants of the same skill.
///
/// Input order is preserved and the first spelling wins, so
/// `["  java  ", "JAVA"]` becomes `["java"]`.
pub fn normalize_skills<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter_map(|s| normalize_skill(s.as_ref()))
        .filter(|s| seen.insert(skill_key(s)))
        .collect()
}

/// Rejects skills longer than `max_len` characters after trimming.
/// The matcher itself accepts any length; this guards the public API.
pub fn validate_skill_lengths<S: AsRef<str>>(skills: &[S], max_len: usize) -> Result<(), String> {
    let too_long: Vec<&str> = skills
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| s.chars().count() > max_len)
        .collect();

    if too_long.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Skills must be {max_len} characters or less (got {} too long)",
            too_long.len()
        ))
    }
}
