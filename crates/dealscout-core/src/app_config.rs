use std::path::PathBuf;

/// User-Agent sent by the static fetcher unless overridden.
///
/// A desktop Chrome string; several storefronts serve an empty shell or a
/// captcha page to obvious bot agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Timeout for the single static GET.
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// When `false` the dynamic fallback is replaced by a renderer that never
    /// produces a page.
    pub browser_enabled: bool,
    /// Upper bound on waiting for `<body>` to appear after navigation.
    pub browser_wait_timeout_secs: u64,
    pub browser_navigation_timeout_secs: u64,
    /// Explicit Chromium/Chrome executable. `None` lets the driver search `PATH`.
    pub chromium_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            scraper_request_timeout_secs: 10,
            scraper_user_agent: DEFAULT_USER_AGENT.to_string(),
            browser_enabled: true,
            browser_wait_timeout_secs: 10,
            browser_navigation_timeout_secs: 30,
            chromium_path: None,
        }
    }
}
