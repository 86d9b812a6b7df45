use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::internship::InternshipListing;
use crate::models::matching::MatchResult;
use crate::models::student::StudentProfile;
use crate::repository::{InternshipRepository, MatchRepository, StudentRepository};

/// In-memory stand-in for all three repositories.
#[derive(Default)]
pub struct MemoryRepository {
    pub students: Vec<StudentProfile>,
    pub internships: Vec<InternshipListing>,
    saved: Mutex<Vec<(i64, MatchResult)>>,
    next_id: AtomicI64,
}

impl MemoryRepository {
    pub fn new(students: Vec<StudentProfile>, internships: Vec<InternshipListing>) -> Self {
        Self {
            students,
            internships,
            ..Default::default()
        }
    }

    pub fn saved(&self) -> Vec<(i64, MatchResult)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl StudentRepository for MemoryRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<StudentProfile>, AppError> {
        Ok(self.students.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl InternshipRepository for MemoryRepository {
    async fn list_active(&self) -> Result<Vec<InternshipListing>, AppError> {
        Ok(self
            .internships
            .iter()
            .filter(|i| i.is_active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MatchRepository for MemoryRepository {
    async fn save(&self, result: &MatchResult) -> Result<i64, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.saved.lock().unwrap().push((id, *result));
        Ok(id)
    }
}
