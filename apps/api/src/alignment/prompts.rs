// LLM prompt templates for the alignment pipeline.

/// Resume rewrite prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const ALIGN_PROMPT_TEMPLATE: &str = r#"You are an ATS resume expert.

RULES:
- Use ONLY existing resume content
- Do NOT add fake skills
- Keep resume concise (1–2 pages)
- Align wording with job description keywords
- ATS-friendly bullets only

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}

OUTPUT:
Optimized resume text only."#;

/// Match scoring prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"Compare the resume with the job description.
Return ONLY valid JSON with this EXACT schema (no extra fields):

{
  "score": 0,
  "matched_skills": [],
  "missing_skills": []
}

RULES:
- "score" is an integer from 0 to 100
- "matched_skills" lists skills the job description asks for that the resume shows
- "missing_skills" lists skills the job description asks for that the resume lacks

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;

/// Fills a template. The resume is substituted last so that placeholder-like
/// text inside the job description is never expanded.
pub fn render(template: &str, resume_text: &str, jd_text: &str) -> String {
    let (head, tail) = template
        .split_once("{jd_text}")
        .unwrap_or((template, ""));
    let head = head.replace("{resume_text}", resume_text);
    let tail = tail.replace("{resume_text}", resume_text);
    format!("{head}{jd_text}{tail}")
}
