use anyhow::{Context, Result};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Upper bound on job description text handed to the model, in characters.
pub const DEFAULT_JD_MAX_CHARS: usize = 6000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Startup fails if `OPENAI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub jd_max_chars: usize,
    pub fetch_timeout_secs: u64,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let jd_max_chars =
            parse_or_default("JD_MAX_CHARS", env_opt("JD_MAX_CHARS"), DEFAULT_JD_MAX_CHARS)?;
        anyhow::ensure!(jd_max_chars > 0, "JD_MAX_CHARS must be greater than zero");

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: env_opt("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: parse_or_default("PORT", env_opt("PORT"), DEFAULT_PORT)?,
            rust_log: env_opt("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            jd_max_chars,
            fetch_timeout_secs: parse_or_default(
                "FETCH_TIMEOUT_SECS",
                env_opt("FETCH_TIMEOUT_SECS"),
                DEFAULT_FETCH_TIMEOUT_SECS,
            )?,
            llm_timeout_secs: parse_or_default(
                "LLM_TIMEOUT_SECS",
                env_opt("LLM_TIMEOUT_SECS"),
                DEFAULT_LLM_TIMEOUT_SECS,
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env_opt(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a variable, treating empty values as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}

/// Defaults with a dummy key, for tests that need a `Config`.
#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        openai_api_key: "sk-test".to_string(),
        openai_model: DEFAULT_MODEL.to_string(),
        openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        port: DEFAULT_PORT,
        rust_log: "info".to_string(),
        jd_max_chars: DEFAULT_JD_MAX_CHARS,
        fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
    }
}
