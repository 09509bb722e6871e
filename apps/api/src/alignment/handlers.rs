//! Axum route handler for the alignment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::alignment::pipeline::run_alignment;
use crate::errors::AppError;
use crate::state::AppState;

pub const MISSING_FIELDS: &str = "jobLink and cvText are required";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignRequest {
    pub job_link: Option<String>,
    pub cv_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AlignResponse {
    pub match_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub optimized_resume: String,
}

impl AlignRequest {
    /// Both fields must be present and contain something other than whitespace.
    fn required_fields(&self) -> Option<(&str, &str)> {
        let job_link = self.job_link.as_deref().filter(|s| !s.trim().is_empty())?;
        let cv_text = self.cv_text.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((job_link, cv_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /align
///
/// Fetches the job posting, rewrites the resume toward it, and scores the result.
pub async fn handle_align(
    State(state): State<AppState>,
    payload: Result<Json<AlignRequest>, JsonRejection>,
) -> Result<Json<AlignResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /align body: {rejection}");
        AppError::Validation(MISSING_FIELDS.to_string())
    })?;

    let (job_link, cv_text) = request
        .required_fields()
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS.to_string()))?;

    let span = tracing::info_span!("align", request_id = %Uuid::new_v4(), job_link);
    let outcome = async {
        info!("Alignment started");
        run_alignment(state.fetcher.as_ref(), state.llm.as_ref(), job_link, cv_text).await
    }
    .instrument(span)
    .await?;

    Ok(Json(AlignResponse {
        match_score: outcome.match_result.score,
        matched_skills: outcome.match_result.matched_skills,
        missing_skills: outcome.match_result.missing_skills,
        optimized_resume: outcome.optimized_resume,
    }))
}
