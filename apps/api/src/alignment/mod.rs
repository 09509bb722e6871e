// Resume alignment: fetch JD → rewrite resume → score match.
// All LLM calls go through llm_client; all page fetches go through jd.

pub mod aligner;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod scorer;
