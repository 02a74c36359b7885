//! Fallback extraction for storefronts without selector rules.
//!
//! Finds text containing a currency marker and pairs it with the first
//! heading found by climbing a few ancestors. Crude, but it works on most
//! simple product grids where each card has its own `<h2>`/`<h3>`.

use std::sync::LazyLock;

use dealscout_core::{Platform, ProductRecord, MAX_PRODUCTS};
use scraper::{ElementRef, Html, Selector};

use super::element_text;

/// Scanned in this order; every text node is visited once per marker.
const CURRENCY_MARKERS: [&str; 5] = ["$", "£", "€", "USD", "EUR"];

/// How many ancestors above a price text are searched for a heading.
const ANCESTOR_DEPTH: usize = 3;

/// Elements whose text is code or markup rather than page content.
const NON_CONTENT_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

static HEADINGS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    ["h1", "h2", "h3"].map(|tag| Selector::parse(tag).expect("valid heading selector"))
});

/// Collects up to [`MAX_PRODUCTS`] `(heading, price text)` pairs.
///
/// Titles are deduplicated by exact equality. When a heading is already
/// taken, the climb continues to the next ancestor, which may surface a
/// different heading. A second price under an already-claimed heading is
/// dropped even if it belongs to a different listing.
pub(super) fn extract_priced_headings(document: &Html) -> Vec<ProductRecord> {
    let mut products: Vec<ProductRecord> = Vec::new();

    'markers: for marker in CURRENCY_MARKERS {
        for node in document.tree.root().descendants() {
            if products.len() >= MAX_PRODUCTS {
                break 'markers;
            }

            let Some(text) = node.value().as_text() else {
                continue;
            };
            if !text.contains(marker) {
                continue;
            }

            let Some(parent) = node.parent() else {
                continue;
            };
            if ElementRef::wrap(parent)
                .is_some_and(|el| NON_CONTENT_TAGS.contains(&el.value().name()))
            {
                continue;
            }

            let mut ancestor = Some(parent);
            for _ in 0..ANCESTOR_DEPTH {
                let Some(current) = ancestor else {
                    break;
                };

                let scope = ElementRef::wrap(current).or_else(|| {
                    current
                        .value()
                        .is_document()
                        .then(|| document.root_element())
                });

                if let Some(title) = scope.and_then(first_heading) {
                    if !products.iter().any(|p| p.title == title) {
                        products.push(ProductRecord::new(title, text.trim(), Platform::Generic));
                        break;
                    }
                }

                ancestor = current.parent();
            }
        }
    }

    products
}

/// First non-empty `h1` under `scope`, else `h2`, else `h3`.
fn first_heading(scope: ElementRef<'_>) -> Option<String> {
    HEADINGS.iter().find_map(|selector| {
        scope
            .select(selector)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    })
}
