use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::service::{compute_top_matches, persist_top_matches};
use crate::models::matching::{MatchView, SavedMatch};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub threshold: Option<f64>,
    pub limit: Option<usize>,
}

impl MatchQuery {
    /// Applies configured defaults and rejects out-of-range values.
    fn resolve(&self, config: &Config) -> Result<(f64, usize), AppError> {
        let threshold = self.threshold.unwrap_or(config.match_threshold);
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(AppError::Validation(format!(
                "threshold must be within [0, 1], got {threshold}"
            )));
        }
        let limit = self
            .limit
            .unwrap_or(config.match_limit)
            .min(config.match_limit_max);
        Ok((threshold, limit))
    }
}

/// GET /api/v1/students/:id/matches
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<MatchView>>, AppError> {
    let (threshold, limit) = query.resolve(&state.config)?;
    let views = compute_top_matches(
        state.students.as_ref(),
        state.internships.as_ref(),
        &state.engine,
        student_id,
        threshold,
        limit,
    )
    .await?;
    Ok(Json(views))
}

/// POST /api/v1/students/:id/matches
pub async fn handle_save_matches(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<SavedMatch>>, AppError> {
    let (threshold, limit) = query.resolve(&state.config)?;
    let saved = persist_top_matches(
        state.students.as_ref(),
        state.internships.as_ref(),
        state.matches.as_ref(),
        &state.engine,
        student_id,
        threshold,
        limit,
    )
    .await?;
    Ok(Json(saved))
}
