use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::{check_gpa, normalize_tags, ProfileError};

/// Internship listing as seen by the matching core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipListing {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Lower-cased, de-duplicated.
    pub required_skills: Vec<String>,
    /// 0–10 scale.
    pub min_gpa: f64,
    /// Carried for callers; not part of the compatibility score.
    pub min_year: u32,
    /// Single free-text category, e.g. "Data Science".
    pub domain: String,
    pub is_active: bool,
}

impl InternshipListing {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        required_skills: Vec<String>,
        min_gpa: f64,
        min_year: u32,
        domain: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, ProfileError> {
        if !check_gpa(min_gpa) {
            return Err(ProfileError::MinGpaOutOfRange(min_gpa));
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            required_skills: normalize_tags(required_skills),
            min_gpa,
            min_year,
            domain: domain.into(),
            is_active,
        })
    }
}

/// Raw `internships` row.
#[derive(Debug, Clone, FromRow)]
pub struct InternshipRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<Json<Vec<String>>>,
    pub min_cgpa: Option<f64>,
    pub min_year: Option<i32>,
    pub domain: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<InternshipRow> for InternshipListing {
    type Error = ProfileError;

    fn try_from(row: InternshipRow) -> Result<Self, Self::Error> {
        InternshipListing::new(
            row.id,
            row.title.unwrap_or_default(),
            row.description.unwrap_or_default(),
            row.required_skills.map(|j| j.0).unwrap_or_default(),
            row.min_cgpa.unwrap_or(0.0),
            row.min_year.and_then(|y| u32::try_from(y).ok()).unwrap_or(0),
            row.domain.unwrap_or_default(),
            row.is_active.unwrap_or(true),
        )
    }
}
