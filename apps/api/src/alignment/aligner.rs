//! Resume Aligner — rewrites a resume toward a job description using only its existing content.

use tracing::debug;

use crate::alignment::prompts::{render, ALIGN_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::jd::JobDescription;
use crate::llm_client::CompletionClient;

/// Returns the model's rewritten resume exactly as produced.
pub async fn align_resume(
    llm: &dyn CompletionClient,
    resume_text: &str,
    jd: &JobDescription,
) -> Result<String, AppError> {
    let prompt = render(ALIGN_PROMPT_TEMPLATE, resume_text, jd.as_str());
    let optimized = llm.complete(&prompt, None).await?;
    debug!("Aligned resume: {} chars", optimized.chars().count());
    Ok(optimized)
}
