use thiserror::Error;

/// Failures that end a scrape. Every variant is reported to the caller as the
/// `{"error": ...}` shape; none of them escape [`crate::ProductScraper::scrape`].
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Invalid URL format. URL must start with http:// or https://")]
    InvalidUrl { input: String },

    #[error("Failed to fetch URL: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Failed to fetch URL: HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("No products found on the page")]
    NoProductsFound { url: String },

    #[error("Error processing {input}: {reason}")]
    Unexpected { input: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Failures inside the browser-rendered fallback.
///
/// These are logged and swallowed by the orchestrator; the fallback then
/// counts as having found nothing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("browser rendering is disabled")]
    Disabled,

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("timed out after {secs}s waiting for `{selector}`")]
    WaitTimeout { selector: String, secs: u64 },

    #[error("failed to read rendered page: {0}")]
    Content(String),
}
