use serde::{Deserialize, Serialize};

/// Upper bound on records returned for one page. Keeps downstream
/// summarization cost bounded.
pub const MAX_PRODUCTS: usize = 3;

/// Placeholder for optional fields the page did not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Storefront family a URL belongs to; selects the extraction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Ebay,
    Walmart,
    Bestbuy,
    Generic,
}

impl Platform {
    /// Lowercase tag used in serialized results, e.g. `"bestbuy"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Ebay => "ebay",
            Platform::Walmart => "walmart",
            Platform::Bestbuy => "bestbuy",
            Platform::Generic => "generic",
        }
    }

    /// Human-facing name stamped on each [`ProductRecord`], e.g. `"Best Buy"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Ebay => "eBay",
            Platform::Walmart => "Walmart",
            Platform::Bestbuy => "Best Buy",
            Platform::Generic => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product listing pulled from a results page.
///
/// `title` and `price` are always non-empty. Prices are kept as the page
/// rendered them (`"$24.99"`, `"£12"`); no numeric parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    /// Star rating text. Only Amazon listings carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Shipping text. Only eBay listings carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,
    /// Display name of the source platform, e.g. `"Amazon"`.
    pub platform: String,
}

impl ProductRecord {
    /// Builds a record with no optional fields.
    #[must_use]
    pub fn new(title: impl Into<String>, price: impl Into<String>, platform: Platform) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating: None,
            shipping: None,
            platform: platform.display_name().to_string(),
        }
    }
}

/// Outcome of scraping one URL.
///
/// Serializes to either `{"products": [...], "platform": "amazon"}` or
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResult {
    Products {
        products: Vec<ProductRecord>,
        platform: Platform,
    },
    Error {
        error: String,
    },
}

impl ScrapeResult {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        ScrapeResult::Error {
            error: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ScrapeResult::Error { .. })
    }

    /// Products in document order; empty for the error shape.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        match self {
            ScrapeResult::Products { products, .. } => products,
            ScrapeResult::Error { .. } => &[],
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ScrapeResult::Error { error } => Some(error),
            ScrapeResult::Products { .. } => None,
        }
    }
}
