use serde::{Deserialize, Serialize};

use crate::models::internship::InternshipListing;

/// Score of one (student, internship) pair. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    student_id: i64,
    internship_id: i64,
    score: f64,
}

impl MatchResult {
    pub fn new(student_id: i64, internship_id: i64, score: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&score),
            "match score {score} out of [0, 1]"
        );
        Self {
            student_id,
            internship_id,
            score: score.clamp(0.0, 1.0),
        }
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn internship_id(&self) -> i64 {
        self.internship_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Ranked match as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub internship_id: i64,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub domain: String,
    pub match_score: f64,
}

impl MatchView {
    pub fn from_listing(listing: &InternshipListing, result: &MatchResult) -> Self {
        Self {
            internship_id: listing.id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            required_skills: listing.required_skills.clone(),
            domain: listing.domain.clone(),
            match_score: result.score(),
        }
    }
}

/// A match view paired with the id the repository assigned on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMatch {
    pub match_id: i64,
    #[serde(flatten)]
    pub view: MatchView,
}
