pub mod internship;
pub mod matching;
pub mod student;

use thiserror::Error;

/// Raised when a profile or listing violates a model invariant.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("GPA {0} is outside the 0-10 scale")]
    GpaOutOfRange(f64),

    #[error("minimum GPA {0} is outside the 0-10 scale")]
    MinGpaOutOfRange(f64),

    #[error("year of study must be at least 1, got {0}")]
    InvalidYear(i64),
}

/// Upper bound of the GPA scale used across profiles and listings.
pub const GPA_SCALE_MAX: f64 = 10.0;

/// Lower-cases, trims, and de-duplicates tags, keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Trims free-text entries and drops case-insensitive duplicates.
/// The original casing of the first occurrence is kept.
pub fn dedup_free_text<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for entry in entries {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(trimmed.to_string());
        }
    }
    out
}

pub(crate) fn check_gpa(gpa: f64) -> bool {
    gpa.is_finite() && (0.0..=GPA_SCALE_MAX).contains(&gpa)
}
