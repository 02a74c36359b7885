//! Cleanup of the free-text URL handed over by the upstream search step.
//!
//! Agents tend to wrap URLs in quotes or pad them with whitespace. Only the
//! scheme is checked here; hosts and reachability are the fetcher's problem.

use crate::error::ScraperError;

const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// An absolute `http`/`https` URL string.
///
/// Only [`normalize_url`] constructs one, so the scheme prefix always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strips surrounding whitespace and enclosing quotes, then checks the scheme.
///
/// Given `"  'https://www.amazon.com/s?k=headphones'  "`, returns
/// `https://www.amazon.com/s?k=headphones`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the cleaned string does not start
/// with `http://` or `https://` (case-sensitive).
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, ScraperError> {
    let cleaned = raw
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim();

    if !ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| cleaned.starts_with(scheme))
    {
        return Err(ScraperError::InvalidUrl {
            input: raw.to_owned(),
        });
    }

    Ok(NormalizedUrl(cleaned.to_owned()))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
