//! The `ProductScraper` pipeline: normalize, fetch, extract, and fall back to
//! a rendered page when the static HTML carries no listings.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use dealscout_core::{AppConfig, Platform, ProductRecord, ScrapeResult};
use futures::FutureExt;

use crate::browser::{renderer_from_config, PageRenderer};
use crate::client::PageFetcher;
use crate::error::ScraperError;
use crate::extract::extract_products;
use crate::normalize::{normalize_url, NormalizedUrl};
use crate::platform::detect_platform;

/// Scrapes up to three product listings from one URL.
///
/// Stateless between calls; one instance can serve any number of sequential
/// scrapes.
pub struct ProductScraper {
    fetcher: PageFetcher,
    renderer: Box<dyn PageRenderer>,
}

impl ProductScraper {
    #[must_use]
    pub fn new(fetcher: PageFetcher, renderer: Box<dyn PageRenderer>) -> Self {
        Self { fetcher, renderer }
    }

    /// Builds the fetcher and renderer described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let fetcher = PageFetcher::new(
            config.scraper_request_timeout_secs,
            &config.scraper_user_agent,
        )?;
        Ok(Self::new(fetcher, renderer_from_config(config)))
    }

    /// Runs the full pipeline for `input`.
    ///
    /// Never fails and never panics past this call: every error, including a
    /// panic inside extraction, comes back as [`ScrapeResult::Error`].
    pub async fn scrape(&self, input: &str) -> ScrapeResult {
        match AssertUnwindSafe(self.run(input)).catch_unwind().await {
            Ok(Ok((products, platform))) => ScrapeResult::Products { products, platform },
            Ok(Err(err)) => {
                tracing::warn!(input, error = %err, "scrape failed");
                ScrapeResult::error(err.to_string())
            }
            Err(payload) => {
                let err = ScraperError::Unexpected {
                    input: input.to_owned(),
                    reason: panic_reason(payload.as_ref()),
                };
                tracing::error!(input, error = %err, "scrape panicked");
                ScrapeResult::error(err.to_string())
            }
        }
    }

    /// [`ProductScraper::scrape`] serialized to JSON text.
    pub async fn scrape_to_string(&self, input: &str) -> String {
        let result = self.scrape(input).await;
        serde_json::to_string(&result).unwrap_or_else(|e| {
            let err = ScraperError::Unexpected {
                input: input.to_owned(),
                reason: e.to_string(),
            };
            serde_json::json!({ "error": err.to_string() }).to_string()
        })
    }

    async fn run(&self, input: &str) -> Result<(Vec<ProductRecord>, Platform), ScraperError> {
        let url = normalize_url(input)?;
        let html = self.fetcher.fetch_html(&url).await?;
        let platform = detect_platform(&url);

        let mut products = extract_products(&html, platform);
        if products.is_empty() {
            tracing::debug!(url = %url, %platform, "static page had no listings, rendering");
            products = self.render_and_extract(&url, platform).await;
        }

        if products.is_empty() {
            return Err(ScraperError::NoProductsFound {
                url: url.to_string(),
            });
        }

        tracing::info!(url = %url, %platform, count = products.len(), "scrape complete");
        Ok((products, platform))
    }

    /// Dynamic fallback. Render failures count as "nothing found".
    async fn render_and_extract(
        &self,
        url: &NormalizedUrl,
        platform: Platform,
    ) -> Vec<ProductRecord> {
        match self.renderer.render(url).await {
            Ok(html) => extract_products(&html, platform),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "browser fallback failed");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for ProductScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductScraper")
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_owned()
    }
}
