pub mod browser;
pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod platform;
pub mod scrape;
pub mod tool;

pub use browser::{BrowserSettings, ChromiumRenderer, NoopRenderer, PageRenderer};
pub use client::PageFetcher;
pub use error::{RenderError, ScraperError};
pub use extract::extract_products;
pub use normalize::{normalize_url, NormalizedUrl};
pub use platform::detect_platform;
pub use scrape::ProductScraper;
pub use tool::{ToolDescriptor, TOOL_DESCRIPTOR};
