//! Match Scorer — asks the model for a structured match verdict and validates its shape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::prompts::{render, SCORE_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::jd::JobDescription;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{call_json, CompletionClient};

/// Validated scorer verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 0 – 100
    pub score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Model output as decoded, before range checks. Every key is required.
#[derive(Debug, Deserialize)]
struct RawMatch {
    score: f64,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
}

impl TryFrom<RawMatch> for MatchResult {
    type Error = AppError;

    fn try_from(raw: RawMatch) -> Result<Self, Self::Error> {
        if !raw.score.is_finite() || !(0.0..=100.0).contains(&raw.score) {
            return Err(AppError::Parse(format!(
                "score {} is outside 0-100",
                raw.score
            )));
        }

        Ok(MatchResult {
            score: raw.score.round() as u8,
            matched_skills: raw.matched_skills,
            missing_skills: raw.missing_skills,
        })
    }
}

/// Scores the (already aligned) resume against the job description.
pub async fn score_match(
    llm: &dyn CompletionClient,
    resume_text: &str,
    jd: &JobDescription,
) -> Result<MatchResult, AppError> {
    let prompt = render(SCORE_PROMPT_TEMPLATE, resume_text, jd.as_str());
    let raw: RawMatch = call_json(llm, &prompt, Some(JSON_ONLY_SYSTEM)).await?;
    let result = MatchResult::try_from(raw)?;
    debug!(
        "Match scored: {} ({} matched, {} missing)",
        result.score,
        result.matched_skills.len(),
        result.missing_skills.len()
    );
    Ok(result)
}
