//! Dynamic fallback: render the page in headless Chromium and hand back the
//! post-script DOM.
//!
//! Each render launches its own browser and closes it before returning. The
//! CDP event pump runs as a spawned task for the lifetime of that session
//! only.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use dealscout_core::AppConfig;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::error::RenderError;
use crate::normalize::NormalizedUrl;

/// Element whose presence marks the page as ready to read.
const READY_SELECTOR: &str = "body";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Produces the fully rendered HTML of a page.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Navigates to `url` and returns the serialized DOM once it is ready.
    async fn render(&self, url: &NormalizedUrl) -> Result<String, RenderError>;
}

/// Renderer used when browser rendering is switched off. Always fails with
/// [`RenderError::Disabled`], so the fallback yields nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

#[async_trait]
impl PageRenderer for NoopRenderer {
    async fn render(&self, _url: &NormalizedUrl) -> Result<String, RenderError> {
        Err(RenderError::Disabled)
    }
}

/// Timeouts and executable location for [`ChromiumRenderer`].
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    pub wait_timeout: Duration,
    pub navigation_timeout: Duration,
    /// `None` lets chromiumoxide look for Chrome/Chromium itself.
    pub chromium_path: Option<PathBuf>,
}

impl BrowserSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            wait_timeout: Duration::from_secs(config.browser_wait_timeout_secs),
            navigation_timeout: Duration::from_secs(config.browser_navigation_timeout_secs),
            chromium_path: config.chromium_path.clone(),
        }
    }
}

/// Headless Chromium over the DevTools protocol.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    settings: BrowserSettings,
}

impl ChromiumRenderer {
    #[must_use]
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl PageRenderer for ChromiumRenderer {
    async fn render(&self, url: &NormalizedUrl) -> Result<String, RenderError> {
        // Release after a failed load is covered by
        // `wait_timeout_still_releases_the_browser`.
        let session = BrowserSession::launch(&self.settings).await?;
        let result = session.load(url, &self.settings).await;
        session.close().await;
        result
    }
}

/// Picks the renderer the configuration asks for.
#[must_use]
pub fn renderer_from_config(config: &AppConfig) -> Box<dyn PageRenderer> {
    if config.browser_enabled {
        Box::new(ChromiumRenderer::new(BrowserSettings::from_config(config)))
    } else {
        tracing::debug!("browser rendering disabled by configuration");
        Box::new(NoopRenderer)
    }
}

/// One launched browser plus its event pump.
///
/// [`BrowserSession::close`] is the normal exit. If the session is dropped
/// without it (early return, panic), the pump is aborted here and
/// chromiumoxide kills the child process when `Browser` drops.
struct BrowserSession {
    browser: Browser,
    pump: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(settings: &BrowserSettings) -> Result<Self, RenderError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .request_timeout(settings.navigation_timeout);
        if let Some(path) = &settings.chromium_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(RenderError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        let pump = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!(error = %e, "CDP handler event error");
                }
            }
        });

        Ok(Self { browser, pump })
    }

    async fn load(
        &self,
        url: &NormalizedUrl,
        settings: &BrowserSettings,
    ) -> Result<String, RenderError> {
        let navigation_failed = |reason: String| RenderError::Navigation {
            url: url.to_string(),
            reason,
        };

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| navigation_failed(e.to_string()))?;

        match tokio::time::timeout(settings.navigation_timeout, page.goto(url.as_str())).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(navigation_failed(e.to_string())),
            Err(_) => {
                return Err(navigation_failed(format!(
                    "timed out after {}s",
                    settings.navigation_timeout.as_secs()
                )))
            }
        }

        wait_for_element(&page, READY_SELECTOR, settings.wait_timeout).await?;

        let html = page
            .content()
            .await
            .map_err(|e| RenderError::Content(e.to_string()))?;
        tracing::debug!(url = %url, bytes = html.len(), "rendered page captured");
        Ok(html)
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::debug!(error = %e, "browser close command failed");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::debug!(error = %e, "waiting for browser exit failed");
        }
        self.pump.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.pump.abort();
    }
}

/// Polls for `selector` until it exists or `timeout` elapses.
async fn wait_for_element(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<(), RenderError> {
    let poll = async {
        loop {
            if page.find_element(selector).await.is_ok() {
                return;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };

    tokio::time::timeout(timeout, poll)
        .await
        .map_err(|_| RenderError::WaitTimeout {
            selector: selector.to_owned(),
            secs: timeout.as_secs(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_url;

    #[tokio::test]
    async fn noop_renderer_reports_disabled() {
        let url = normalize_url("https://example.com").unwrap();
        let err = NoopRenderer.render(&url).await.unwrap_err();
        assert!(matches!(err, RenderError::Disabled));
    }

    #[test]
    fn settings_follow_config() {
        let config = AppConfig {
            browser_wait_timeout_secs: 7,
            browser_navigation_timeout_secs: 45,
            chromium_path: Some(PathBuf::from("/opt/chromium/chrome")),
            ..AppConfig::default()
        };
        let settings = BrowserSettings::from_config(&config);
        assert_eq!(settings.wait_timeout, Duration::from_secs(7));
        assert_eq!(settings.navigation_timeout, Duration::from_secs(45));
        assert_eq!(
            settings.chromium_path.as_deref(),
            Some(std::path::Path::new("/opt/chromium/chrome"))
        );
    }

    #[tokio::test]
    async fn disabled_config_yields_noop_renderer() {
        let config = AppConfig {
            browser_enabled: false,
            ..AppConfig::default()
        };
        let url = normalize_url("https://example.com").unwrap();
        let err = renderer_from_config(&config).render(&url).await.unwrap_err();
        assert!(matches!(err, RenderError::Disabled));
    }

    #[tokio::test]
    async fn missing_executable_is_a_launch_error() {
        let renderer = ChromiumRenderer::new(BrowserSettings {
            wait_timeout: Duration::from_secs(1),
            navigation_timeout: Duration::from_secs(1),
            chromium_path: Some(PathBuf::from("/nonexistent/dealscout/chrome")),
        });
        let url = normalize_url("https://example.com").unwrap();
        let err = renderer.render(&url).await.unwrap_err();
        assert!(matches!(err, RenderError::Launch(_)), "got {err:?}");
    }

    #[tokio::test]
    #[ignore = "requires a local Chromium"]
    async fn renders_inline_document() {
        let config = AppConfig::default();
        let renderer = ChromiumRenderer::new(BrowserSettings::from_config(&config));
        let url = normalize_url("https://example.com").unwrap();
        let html = renderer.render(&url).await.unwrap();
        assert!(html.contains("<body"));
    }

    #[tokio::test]
    #[ignore = "requires a local Chromium"]
    async fn wait_timeout_still_releases_the_browser() {
        let settings = BrowserSettings {
            wait_timeout: Duration::ZERO,
            ..BrowserSettings::from_config(&AppConfig::default())
        };
        let url = normalize_url("https://example.com").unwrap();

        let err = ChromiumRenderer::new(settings.clone())
            .render(&url)
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::WaitTimeout { .. }), "got {err:?}");

        // The first session is closed, so a fresh one launches and renders.
        let renderer = ChromiumRenderer::new(BrowserSettings {
            wait_timeout: Duration::from_secs(10),
            ..settings
        });
        let html = renderer.render(&url).await.unwrap();
        assert!(html.contains("<body"));
    }
}
