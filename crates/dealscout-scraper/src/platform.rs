//! URL to [`Platform`] classification.

use dealscout_core::Platform;

use crate::normalize::NormalizedUrl;

/// Substring checks in priority order; the first hit wins.
const PLATFORM_MARKERS: [(&str, Platform); 4] = [
    ("amazon", Platform::Amazon),
    ("ebay", Platform::Ebay),
    ("walmart", Platform::Walmart),
    ("bestbuy", Platform::Bestbuy),
];

/// Classifies a URL by case-insensitive substring match over the whole URL
/// string, not just the host. Unrecognised URLs map to [`Platform::Generic`].
#[must_use]
pub fn detect_platform(url: &NormalizedUrl) -> Platform {
    detect_platform_str(url.as_str())
}

pub(crate) fn detect_platform_str(url: &str) -> Platform {
    let lower = url.to_ascii_lowercase();
    PLATFORM_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map_or(Platform::Generic, |&(_, platform)| platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_known_platform() {
        assert_eq!(
            detect_platform_str("https://www.amazon.com/s?k=headphones"),
            Platform::Amazon
        );
        assert_eq!(
            detect_platform_str("https://www.ebay.com/sch/i.html?_nkw=lamp"),
            Platform::Ebay
        );
        assert_eq!(
            detect_platform_str("https://www.walmart.com/search?q=tv"),
            Platform::Walmart
        );
        assert_eq!(
            detect_platform_str("https://www.bestbuy.com/site/searchpage.jsp?st=tv"),
            Platform::Bestbuy
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect_platform_str("https://WWW.AMAZON.CO.UK/"), Platform::Amazon);
        assert_eq!(detect_platform_str("https://BestBuy.ca/en-ca"), Platform::Bestbuy);
    }

    #[test]
    fn first_marker_wins_when_several_match() {
        assert_eq!(
            detect_platform_str("https://www.ebay.com/itm/amazon-echo"),
            Platform::Amazon
        );
        assert_eq!(
            detect_platform_str("https://www.walmart.com/search?q=ebay+gift+card"),
            Platform::Ebay
        );
    }

    #[test]
    fn marker_in_path_or_query_counts() {
        assert_eq!(
            detect_platform_str("https://deals.example.com/redirect?to=walmart"),
            Platform::Walmart
        );
    }

    #[test]
    fn quoted_input_detects_after_normalizing() {
        let url = crate::normalize::normalize_url("  'https://www.amazon.com/s?k=headphones'  ")
            .unwrap();
        assert_eq!(detect_platform(&url), Platform::Amazon);
    }

    #[test]
    fn unknown_hosts_are_generic() {
        assert_eq!(
            detect_platform_str("https://shop.example.com/products"),
            Platform::Generic
        );
        assert_eq!(detect_platform_str("http://best-buy.example"), Platform::Generic);
    }
}
