use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::{check_gpa, dedup_free_text, normalize_tags, ProfileError};

/// Student profile as seen by the matching core. Read-only; storage owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub full_name: String,
    pub year_of_study: u32,
    /// 0–10 scale.
    pub gpa: f64,
    /// Lower-cased, de-duplicated.
    pub skills: Vec<String>,
    /// Free text, de-duplicated case-insensitively. Order carries no meaning.
    pub preferences: Vec<String>,
    pub resume_url: Option<String>,
}

impl StudentProfile {
    pub fn new(
        id: i64,
        full_name: impl Into<String>,
        year_of_study: i64,
        gpa: f64,
        skills: Vec<String>,
        preferences: Vec<String>,
        resume_url: Option<String>,
    ) -> Result<Self, ProfileError> {
        if !check_gpa(gpa) {
            return Err(ProfileError::GpaOutOfRange(gpa));
        }
        let year_of_study = u32::try_from(year_of_study)
            .ok()
            .filter(|y| *y >= 1)
            .ok_or(ProfileError::InvalidYear(year_of_study))?;

        Ok(Self {
            id,
            full_name: full_name.into(),
            year_of_study,
            gpa,
            skills: normalize_tags(skills),
            preferences: dedup_free_text(preferences),
            resume_url,
        })
    }

    /// True when a resume document is on file. Blank references don't count.
    pub fn has_resume(&self) -> bool {
        self.resume_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Raw `students` row.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub full_name: Option<String>,
    pub year_of_study: Option<i32>,
    pub cgpa: Option<f64>,
    pub skills: Option<Json<Vec<String>>>,
    pub preferences: Option<Json<Vec<String>>>,
    pub resume_url: Option<String>,
}

impl TryFrom<StudentRow> for StudentProfile {
    type Error = ProfileError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        StudentProfile::new(
            row.id,
            row.full_name.unwrap_or_default(),
            row.year_of_study.map(i64::from).unwrap_or(1),
            row.cgpa.unwrap_or(0.0),
            row.skills.map(|j| j.0).unwrap_or_default(),
            row.preferences.map(|j| j.0).unwrap_or_default(),
            row.resume_url,
        )
    }
}
