//! Matching use cases: load a student and the active listings, rank them, and
//! optionally hand the winners to the match repository.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::engine::MatchEngine;
use crate::models::internship::InternshipListing;
use crate::models::matching::{MatchResult, MatchView, SavedMatch};
use crate::models::student::StudentProfile;
use crate::repository::{InternshipRepository, MatchRepository, StudentRepository};

/// Top matches for `student_id`, best first. An unknown student yields `[]`.
pub async fn compute_top_matches(
    students: &dyn StudentRepository,
    internships: &dyn InternshipRepository,
    engine: &MatchEngine,
    student_id: i64,
    threshold: f64,
    limit: usize,
) -> Result<Vec<MatchView>, AppError> {
    let Some(student) = students.get_by_id(student_id).await? else {
        info!("Student {student_id} not found; no matches");
        return Ok(Vec::new());
    };

    let listings = internships.list_active().await?;
    debug!(
        "Scoring student {student_id} against {} active internships",
        listings.len()
    );

    let (listings, results) = rank_blocking(engine, student, listings, threshold, limit).await?;
    let by_id: HashMap<i64, &InternshipListing> = listings.iter().map(|l| (l.id, l)).collect();

    let views: Vec<MatchView> = results
        .iter()
        .filter_map(|r| {
            by_id
                .get(&r.internship_id())
                .map(|listing| MatchView::from_listing(listing, r))
        })
        .collect();

    info!(
        "Student {student_id}: {} matches at threshold {threshold:.2} (limit {limit})",
        views.len()
    );
    Ok(views)
}

/// Computes the top matches and persists each one, in rank order.
pub async fn persist_top_matches(
    students: &dyn StudentRepository,
    internships: &dyn InternshipRepository,
    matches: &dyn MatchRepository,
    engine: &MatchEngine,
    student_id: i64,
    threshold: f64,
    limit: usize,
) -> Result<Vec<SavedMatch>, AppError> {
    let Some(student) = students.get_by_id(student_id).await? else {
        info!("Student {student_id} not found; nothing to save");
        return Ok(Vec::new());
    };

    let listings = internships.list_active().await?;
    let (listings, results) = rank_blocking(engine, student, listings, threshold, limit).await?;
    let by_id: HashMap<i64, &InternshipListing> = listings.iter().map(|l| (l.id, l)).collect();

    let mut saved = Vec::with_capacity(results.len());
    for result in &results {
        let Some(listing) = by_id.get(&result.internship_id()) else {
            continue;
        };
        let match_id = matches.save(result).await?;
        saved.push(SavedMatch {
            match_id,
            view: MatchView::from_listing(listing, result),
        });
    }

    info!("Student {student_id}: saved {} matches", saved.len());
    Ok(saved)
}

/// Runs the rayon-backed ranking on the blocking pool, off the async workers.
/// Hands the listings back alongside the ranked results.
async fn rank_blocking(
    engine: &MatchEngine,
    student: StudentProfile,
    listings: Vec<InternshipListing>,
    threshold: f64,
    limit: usize,
) -> Result<(Vec<InternshipListing>, Vec<MatchResult>), AppError> {
    let engine = engine.clone();
    tokio::task::spawn_blocking(move || {
        let results = engine.find_top_matches(&student, &listings, threshold, limit);
        (listings, results)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("match ranking task failed: {e}")))
}
