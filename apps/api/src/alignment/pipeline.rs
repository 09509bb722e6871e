//! The alignment pipeline: fetch → align → score, strictly in that order.
//!
//! Each stage suspends only on its remote call. The first failure ends the run;
//! nothing partial is returned.

use tracing::info;

use crate::alignment::aligner::align_resume;
use crate::alignment::scorer::{score_match, MatchResult};
use crate::errors::AppError;
use crate::jd::JobFetcher;
use crate::llm_client::CompletionClient;

#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub optimized_resume: String,
    pub match_result: MatchResult,
}

pub async fn run_alignment(
    fetcher: &dyn JobFetcher,
    llm: &dyn CompletionClient,
    job_link: &str,
    cv_text: &str,
) -> Result<AlignmentOutcome, AppError> {
    let jd = fetcher.fetch(job_link).await?;
    info!("Fetched job description ({} chars)", jd.char_count());

    let optimized_resume = align_resume(llm, cv_text, &jd).await?;
    info!("Resume aligned");

    // Scoring runs against the rewritten resume, not the original.
    let match_result = score_match(llm, &optimized_resume, &jd).await?;
    info!("Match scored: {}", match_result.score);

    Ok(AlignmentOutcome {
        optimized_resume,
        match_result,
    })
}
