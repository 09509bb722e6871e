//! Job page retrieval over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::jd::extract::JobDescription;

const USER_AGENT: &str = concat!("cv-aligner/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid job link '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch job page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job page returned status {status}")]
    Status { status: u16 },

    #[error("job page contained no readable text")]
    EmptyDocument,
}

/// Retrieves a job posting and reduces it to description text.
#[async_trait]
pub trait JobFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<JobDescription, FetchError>;
}

/// Fetches postings with a single GET and extracts the body text. No retries.
#[derive(Clone)]
pub struct HttpJobFetcher {
    client: Client,
    max_chars: usize,
}

impl HttpJobFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            max_chars: config.jd_max_chars,
        })
    }
}

#[async_trait]
impl JobFetcher for HttpJobFetcher {
    async fn fetch(&self, url: &str) -> Result<JobDescription, FetchError> {
        let url = parse_job_url(url)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched job page: {} bytes", html.len());

        let jd = JobDescription::from_html(&html, self.max_chars);
        if jd.is_empty() {
            return Err(FetchError::EmptyDocument);
        }
        Ok(jd)
    }
}

/// Accepts absolute `http`/`https` URLs only.
pub fn parse_job_url(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}


#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::Html, routing::get, Router};

    use super::*;

    /// Serves a few canned job pages on an ephemeral local port and returns its base URL.
    async fn serve_pages() -> String {
        let router = Router::new()
            .route(
                "/job",
                get(|| async {
                    Html("<html><body><p>Go   dev</p><script>track()</script></body></html>")
                }),
            )
            .route("/blank", get(|| async { Html("<html><body>  \n </body></html>") }))
            .route("/gone", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/long",
                get(|| async { Html(format!("<html><body>{}</body></html>", "a".repeat(10_000))) }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fetcher_with_max(max_chars: usize) -> HttpJobFetcher {
        let mut config = crate::config::test_config();
        config.jd_max_chars = max_chars;
        HttpJobFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_extracts_normalized_body_text() {
        let base = serve_pages().await;
        let jd = fetcher_with_max(6000).fetch(&format!("{base}/job")).await.unwrap();
        assert_eq!(jd.as_str(), "Go dev");
    }

    #[tokio::test]
    async fn test_fetch_blank_page_is_empty_document() {
        let base = serve_pages().await;
        let err = fetcher_with_max(6000)
            .fetch(&format!("{base}/blank"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::EmptyDocument));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_reported() {
        let base = serve_pages().await;
        let err = fetcher_with_max(6000)
            .fetch(&format!("{base}/gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_truncates_to_configured_bound() {
        let base = serve_pages().await;
        let url = format!("{base}/long");

        let jd = fetcher_with_max(6000).fetch(&url).await.unwrap();
        assert_eq!(jd.char_count(), 6000);

        let jd = fetcher_with_max(25).fetch(&url).await.unwrap();
        assert_eq!(jd.as_str(), "a".repeat(25));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url_without_network() {
        let err = fetcher_with_max(6000).fetch("ftp://example.com/job").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_job_url_accepts_https() {
        let url = parse_job_url("https://example.com/job").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_parse_job_url_trims_surrounding_whitespace() {
        assert!(parse_job_url("  http://example.com/careers/42 ").is_ok());
    }

    #[test]
    fn test_parse_job_url_rejects_relative_links() {
        let err = parse_job_url("/jobs/42").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_job_url_rejects_non_http_schemes() {
        let err = parse_job_url("file:///etc/passwd").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'file'"));
    }

    #[test]
    fn test_fetcher_builds_from_config() {
        let config = crate::config::test_config();
        assert!(HttpJobFetcher::new(&config).is_ok());
    }
}
