//! Product extraction from a parsed results page.
//!
//! Each [`Platform`] maps to one [`Strategy`]: the four known storefronts use
//! CSS selector rules over repeated listing cards, everything else falls back
//! to scanning text for currency markers. Every strategy returns at most
//! [`MAX_PRODUCTS`] records in document order.
//!
//! Selector sets are tied to each site's markup at the time they were
//! written. When a site redesigns, extraction silently returns nothing for
//! that site until the rules in [`rules`] are updated.

mod listing;
mod price_scan;
mod rules;

use dealscout_core::{Platform, ProductRecord, MAX_PRODUCTS};
use scraper::{ElementRef, Html, Selector};

pub(crate) use rules::SiteRules;

/// How a platform's pages are turned into records.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Strategy {
    /// Listing cards located by per-site selector rules.
    Listing(&'static SiteRules),
    /// Currency-marker text scan paired with the nearest heading.
    PriceScan,
}

impl Strategy {
    pub(crate) fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Amazon => Strategy::Listing(&rules::AMAZON),
            Platform::Ebay => Strategy::Listing(&rules::EBAY),
            Platform::Walmart => Strategy::Listing(&rules::WALMART),
            Platform::Bestbuy => Strategy::Listing(&rules::BESTBUY),
            Platform::Generic => Strategy::PriceScan,
        }
    }
}

/// Parses `html` and extracts up to [`MAX_PRODUCTS`] records using the
/// strategy for `platform`.
///
/// Never fails: malformed markup just yields fewer (or zero) records.
#[must_use]
pub fn extract_products(html: &str, platform: Platform) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    extract_from_document(&document, platform)
}

/// Same as [`extract_products`] for an already-parsed document.
#[must_use]
pub fn extract_from_document(document: &Html, platform: Platform) -> Vec<ProductRecord> {
    let products = match Strategy::for_platform(platform) {
        Strategy::Listing(rules) => listing::extract_listings(document, rules),
        Strategy::PriceScan => price_scan::extract_priced_headings(document),
    };
    debug_assert!(products.len() <= MAX_PRODUCTS);
    products
}

/// Ordered list of selectors tried one after another; the first that matches
/// anything wins.
#[derive(Debug)]
pub(crate) struct SelectorChain(Vec<Selector>);

impl SelectorChain {
    /// # Panics
    ///
    /// Panics if any source is not a valid CSS selector. All callers pass
    /// literals, so this only fires on a typo in the rule tables.
    pub(crate) fn parse(sources: &[&str]) -> Self {
        Self(
            sources
                .iter()
                .map(|source| Selector::parse(source).expect("valid CSS selector"))
                .collect(),
        )
    }

    /// All document elements matched by the first selector with any match.
    pub(crate) fn select_all<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for (idx, selector) in self.0.iter().enumerate() {
            let found: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !found.is_empty() {
                if idx > 0 {
                    tracing::debug!(fallback = idx, "primary item selector matched nothing");
                }
                return found;
            }
        }
        Vec::new()
    }

    /// First descendant of `scope` matched by the first selector with any match.
    pub(crate) fn select_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.0
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }
}

/// Concatenated descendant text with surrounding whitespace removed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
