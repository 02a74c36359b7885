//! Listing-card extraction for sites with known selector rules.

use dealscout_core::{ProductRecord, MAX_PRODUCTS, NOT_AVAILABLE};
use scraper::{ElementRef, Html};

use super::element_text;
use super::rules::{ExtraField, SiteRules};

/// Looks at the first [`MAX_PRODUCTS`] listing cards in document order and
/// keeps those that have both a title and a price. A disqualified card is not
/// replaced by a later one.
pub(super) fn extract_listings(document: &Html, rules: &SiteRules) -> Vec<ProductRecord> {
    let items = rules.items.select_all(document);
    if items.is_empty() {
        tracing::debug!(platform = %rules.platform, "no listing cards matched");
        return Vec::new();
    }

    items
        .into_iter()
        .take(MAX_PRODUCTS)
        .filter_map(|item| extract_item(item, rules))
        .collect()
}

/// Builds a record from one card, or `None` when the card lacks a non-empty
/// title or price.
fn extract_item(item: ElementRef<'_>, rules: &SiteRules) -> Option<ProductRecord> {
    let title = rules
        .title
        .select_first(item)
        .map(element_text)
        .filter(|t| !t.is_empty());
    let price = rules
        .price
        .select_first(item)
        .map(element_text)
        .filter(|p| !p.is_empty());

    let (Some(title), Some(price)) = (title, price) else {
        tracing::trace!(platform = %rules.platform, "skipping card without title or price");
        return None;
    };

    let mut record = ProductRecord::new(title, price, rules.platform);
    if let Some((field, chain)) = &rules.extra {
        let value = chain
            .select_first(item)
            .map(element_text)
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        match field {
            ExtraField::Rating => record.rating = Some(value),
            ExtraField::Shipping => record.shipping = Some(value),
        }
    }

    Some(record)
}
