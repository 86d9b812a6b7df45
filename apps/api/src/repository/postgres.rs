//! PostgreSQL-backed repositories.
//!
//! Expected tables:
//! - `students (id, full_name, year_of_study, cgpa, skills JSON, preferences JSON, resume_url)`
//! - `internships (id, title, description, required_skills JSON, min_cgpa, min_year, domain, is_active)`
//! - `applications (id, student_id, internship_id, match_score, status)`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::internship::{InternshipListing, InternshipRow};
use crate::models::matching::MatchResult;
use crate::models::student::{StudentProfile, StudentRow};
use crate::repository::{InternshipRepository, MatchRepository, StudentRepository};

/// Status recorded on a freshly saved match.
const PENDING_STATUS: &str = "pending";

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<StudentProfile>, AppError> {
        let row: Option<StudentRow> = sqlx::query_as(
            r#"
            SELECT id::BIGINT AS id,
                   full_name,
                   year_of_study::INT AS year_of_study,
                   cgpa::DOUBLE PRECISION AS cgpa,
                   skills::JSONB AS skills,
                   preferences::JSONB AS preferences,
                   resume_url
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentProfile::try_from).transpose()?)
    }
}

#[async_trait]
impl InternshipRepository for PgRepository {
    async fn list_active(&self) -> Result<Vec<InternshipListing>, AppError> {
        let rows: Vec<InternshipRow> = sqlx::query_as(
            r#"
            SELECT id::BIGINT AS id,
                   title,
                   description,
                   required_skills::JSONB AS required_skills,
                   min_cgpa::DOUBLE PRECISION AS min_cgpa,
                   min_year::INT AS min_year,
                   domain,
                   is_active
            FROM internships
            WHERE is_active = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(listings_from_rows(rows))
    }
}

/// Converts listing rows, skipping (and logging) rows that break a model
/// invariant so the remaining listings still get matched.
fn listings_from_rows(rows: Vec<InternshipRow>) -> Vec<InternshipListing> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match InternshipListing::try_from(row) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!("Skipping internship {id}: {e}");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl MatchRepository for PgRepository {
    async fn save(&self, result: &MatchResult) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO applications (student_id, internship_id, match_score, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id::BIGINT
            "#,
        )
        .bind(result.student_id())
        .bind(result.internship_id())
        .bind(result.score())
        .bind(PENDING_STATUS)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Saved match {id}: student {} -> internship {} ({:.3})",
            result.student_id(),
            result.internship_id(),
            result.score()
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn row(id: i64, min_cgpa: f64) -> InternshipRow {
        InternshipRow {
            id,
            title: Some(format!("Listing {id}")),
            description: None,
            required_skills: Some(Json(vec!["python".to_string()])),
            min_cgpa: Some(min_cgpa),
            min_year: Some(1),
            domain: Some("Data Science".to_string()),
            is_active: Some(true),
        }
    }

    #[test]
    fn test_invalid_listing_row_is_skipped() {
        let listings = listings_from_rows(vec![row(1, 7.0), row(2, 11.0), row(3, 6.5)]);
        let ids: Vec<i64> = listings.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_all_rows_invalid_yields_empty() {
        assert!(listings_from_rows(vec![row(1, -1.0), row(2, f64::NAN)]).is_empty());
    }
}
