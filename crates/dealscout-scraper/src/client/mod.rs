//! Static fetch path: one plain GET, no script execution.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::normalize::NormalizedUrl;

/// HTTP client for the static fetch path.
///
/// Sends a single GET per page with a browser-like `User-Agent`. There is no
/// retry at this layer: transport failures and non-2xx statuses are returned
/// as typed errors and end the scrape.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::ClientBuild`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(ScraperError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Fetches the raw HTML body of `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::HttpStatus`]: any non-2xx response.
    /// - [`ScraperError::FetchFailed`]: DNS, connect, TLS, timeout, malformed
    ///   URL, or an unreadable body.
    pub async fn fetch_html(&self, url: &NormalizedUrl) -> Result<String, ScraperError> {
        let url = url.as_str();
        let fetch_failed = |e: reqwest::Error| ScraperError::FetchFailed {
            url: url.to_owned(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(fetch_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await.map_err(fetch_failed)?;
        tracing::debug!(url, bytes = body.len(), "static fetch complete");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
