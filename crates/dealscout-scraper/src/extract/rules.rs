//! Per-site selector tables.
//!
//! Each chain is tried in order; the second entry is the fallback for older
//! or alternate layouts of the same site.

use std::sync::LazyLock;

use dealscout_core::Platform;

use super::SelectorChain;

/// Which optional field a site's extra selector fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtraField {
    Rating,
    Shipping,
}

/// Selector rules for one storefront's results page.
#[derive(Debug)]
pub(crate) struct SiteRules {
    pub(crate) platform: Platform,
    /// Repeated listing cards.
    pub(crate) items: SelectorChain,
    /// Looked up inside each card.
    pub(crate) title: SelectorChain,
    pub(crate) price: SelectorChain,
    /// Optional per-site field, defaulted to `"N/A"` when absent.
    pub(crate) extra: Option<(ExtraField, SelectorChain)>,
}

pub(crate) static AMAZON: LazyLock<SiteRules> = LazyLock::new(|| SiteRules {
    platform: Platform::Amazon,
    items: SelectorChain::parse(&[
        r#".s-result-item[data-asin]:not([data-asin=""])"#,
        ".sg-col-inner",
    ]),
    title: SelectorChain::parse(&["h2 a span", ".a-text-normal"]),
    price: SelectorChain::parse(&[".a-price .a-offscreen", ".a-price-whole"]),
    extra: Some((
        ExtraField::Rating,
        SelectorChain::parse(&["i.a-icon-star-small span", ".a-icon-star"]),
    )),
});

pub(crate) static EBAY: LazyLock<SiteRules> = LazyLock::new(|| SiteRules {
    platform: Platform::Ebay,
    items: SelectorChain::parse(&[".s-item", ".srp-results .s-item"]),
    title: SelectorChain::parse(&[".s-item__title"]),
    price: SelectorChain::parse(&[".s-item__price"]),
    extra: Some((
        ExtraField::Shipping,
        SelectorChain::parse(&[".s-item__shipping"]),
    )),
});

pub(crate) static WALMART: LazyLock<SiteRules> = LazyLock::new(|| SiteRules {
    platform: Platform::Walmart,
    items: SelectorChain::parse(&[
        ".search-result-gridview-item",
        ".search-result-product",
    ]),
    title: SelectorChain::parse(&[".product-title-link", ".product-title"]),
    price: SelectorChain::parse(&[".price-current", ".price-main"]),
    extra: None,
});

pub(crate) static BESTBUY: LazyLock<SiteRules> = LazyLock::new(|| SiteRules {
    platform: Platform::Bestbuy,
    items: SelectorChain::parse(&[".sku-item", ".list-item"]),
    title: SelectorChain::parse(&[".sku-title", ".product-title"]),
    price: SelectorChain::parse(&[".priceView-customer-price", ".price-main"]),
    extra: None,
});
