// Job-description retrieval: URL in, bounded plain text out.

pub mod extract;
pub mod fetcher;

pub use extract::JobDescription;
pub use fetcher::{FetchError, HttpJobFetcher, JobFetcher};
