//! Match Engine: weighted multi-factor compatibility between a student and a listing.
//!
//! Factors (default weights):
//! - skill similarity (0.40): TF-IDF cosine of skills vs required skills
//! - GPA eligibility (0.30): `min(1, gpa / 10)` when `gpa >= min_gpa`, else 0
//! - preference match (0.20): listing domain found in the joined preference text
//! - profile completeness (0.10): resume on file credits `RESUME_ON_FILE_SCORE`
//!
//! The total is clamped to `[0, 1]`.

use std::cmp::Ordering;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::matching::similarity::{SimilarityScorer, TfIdfCosine};
use crate::matching::weights::{MatchWeights, RESUME_ON_FILE_SCORE};
use crate::models::internship::InternshipListing;
use crate::models::matching::MatchResult;
use crate::models::student::StudentProfile;
use crate::models::GPA_SCALE_MAX;

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_LIMIT: usize = 3;

/// Contribution of each factor to a single score, already weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub gpa: f64,
    pub preferences: f64,
    pub completeness: f64,
    pub total: f64,
}

#[derive(Clone)]
pub struct MatchEngine {
    weights: MatchWeights,
    similarity: Arc<dyn SimilarityScorer>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchWeights::default(), Arc::new(TfIdfCosine))
    }
}

impl MatchEngine {
    pub fn new(weights: MatchWeights, similarity: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            weights,
            similarity,
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Compatibility of `student` with `internship`, in `[0, 1]`.
    pub fn score(&self, student: &StudentProfile, internship: &InternshipListing) -> f64 {
        self.breakdown(student, internship).total
    }

    pub fn breakdown(
        &self,
        student: &StudentProfile,
        internship: &InternshipListing,
    ) -> ScoreBreakdown {
        let w = &self.weights;

        let skills = self.skill_similarity(student, internship) * w.skills;

        let gpa = if student.gpa >= internship.min_gpa {
            (student.gpa / GPA_SCALE_MAX).min(1.0) * w.gpa
        } else {
            0.0
        };

        let preferences = if preference_matches(&student.preferences, &internship.domain) {
            w.preferences
        } else {
            0.0
        };

        let completeness = if student.has_resume() {
            RESUME_ON_FILE_SCORE * w.completeness
        } else {
            0.0
        };

        let raw = skills + gpa + preferences + completeness;
        debug_assert!(raw.is_finite() && raw >= 0.0, "raw score {raw} is invalid");
        debug_assert!(
            w.sum() > 1.0 || raw <= 1.0 + 1e-9,
            "raw score {raw} exceeds 1.0 with weights summing to {}",
            w.sum()
        );

        ScoreBreakdown {
            skills,
            gpa,
            preferences,
            completeness,
            total: raw.clamp(0.0, 1.0),
        }
    }

    fn skill_similarity(&self, student: &StudentProfile, internship: &InternshipListing) -> f64 {
        if student.skills.is_empty() || internship.required_skills.is_empty() {
            return 0.0;
        }
        let left = student.skills.join(" ");
        let right = internship.required_skills.join(" ");
        self.similarity.similarity(&left, &right).clamp(0.0, 1.0)
    }

    /// Scores every active candidate, keeps those at or above `threshold`,
    /// and returns at most `limit` of them, best first.
    ///
    /// Scoring runs in parallel; ranking happens after all scores are in.
    /// The sort is stable, so equal scores keep candidate order.
    pub fn find_top_matches(
        &self,
        student: &StudentProfile,
        candidates: &[InternshipListing],
        threshold: f64,
        limit: usize,
    ) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = candidates
            .par_iter()
            .filter(|internship| internship.is_active)
            .map(|internship| {
                MatchResult::new(student.id, internship.id, self.score(student, internship))
            })
            .filter(|m| m.score() >= threshold)
            .collect();

        matches.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        matches.truncate(limit);
        matches
    }
}

/// Case-insensitive substring test of `domain` against the joined preferences.
/// No preferences means no match.
fn preference_matches(preferences: &[String], domain: &str) -> bool {
    if preferences.is_empty() {
        return false;
    }
    let joined = preferences.join(" ").to_lowercase();
    if joined.is_empty() {
        return false;
    }
    joined.contains(&domain.to_lowercase())
}
