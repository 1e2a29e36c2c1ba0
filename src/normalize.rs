//! URL normalization for external links.
//!
//! Normalization parses the raw URL, removes tracking query parameters
//! for known hosts, re-serializes, and strips a single trailing slash.
//! Strings that do not parse as URLs pass through unchanged so that a
//! typo never blocks insertion.

use url::Url;

/// Host whose query string is cleared entirely to drop share-tracking
/// parameters. Matched exactly: subdomains such as `www.twitter.com`
/// are left alone.
const TRACKED_HOST: &str = "twitter.com";

/// Normalizes a raw URL string for embedding in a markdown link.
///
/// Processing steps:
/// 1. Parse with the WHATWG URL parser.
/// 2. On parse failure, return the raw string unchanged.
/// 3. If the host is exactly `twitter.com`, clear the query string.
/// 4. Re-serialize to canonical form.
/// 5. Strip exactly one trailing `/`, if present.
///
/// Never fails and never panics; callers wanting to report unparseable
/// input separately can check [`is_well_formed`] first.
///
/// # Arguments
///
/// * `raw`: URL string as typed, not guaranteed to be parseable
///
/// # Returns
///
/// Normalized URL string, or `raw` unchanged when it does not parse
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    if url.host_str() == Some(TRACKED_HOST) {
        url.set_query(None);
    }

    let serialized = url.to_string();
    match serialized.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => serialized,
    }
}

/// Returns true when the string parses as an absolute URL.
///
/// Used by callers that insert unparseable URLs as typed but want to
/// note the fallback on a diagnostic channel.
///
/// # Arguments
///
/// * `raw`: URL string to check
pub fn is_well_formed(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}
