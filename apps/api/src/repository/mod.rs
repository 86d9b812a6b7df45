//! Storage seams consumed by the matching service.
//!
//! The core only reads profiles and listings and hands finished matches over
//! for persistence. `AppState` carries each capability as an `Arc<dyn _>` so
//! handlers and tests can swap backends.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::internship::InternshipListing;
use crate::models::matching::MatchResult;
use crate::models::student::StudentProfile;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// `Ok(None)` when no such student exists.
    async fn get_by_id(&self, id: i64) -> Result<Option<StudentProfile>, AppError>;
}

#[async_trait]
pub trait InternshipRepository: Send + Sync {
    async fn list_active(&self) -> Result<Vec<InternshipListing>, AppError>;
}

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Persists one match and returns the stored record id.
    async fn save(&self, result: &MatchResult) -> Result<i64, AppError>;
}
