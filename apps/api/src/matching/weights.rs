use serde::{Deserialize, Serialize};

/// Value credited to the completeness factor when a resume is on file.
/// Scaled by `MatchWeights::completeness`, so a resume adds 0.1 × 0.10 = 0.01.
pub const RESUME_ON_FILE_SCORE: f64 = 0.1;

/// Per-factor weights of the compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub gpa: f64,
    pub preferences: f64,
    pub completeness: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            gpa: 0.30,
            preferences: 0.20,
            completeness: 0.10,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.gpa + self.preferences + self.completeness
    }
}
