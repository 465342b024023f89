//! Canonical product links.
//!
//! Search result links carry tracking segments (`/ref=sr_1_1`), query strings
//! and, for sponsored placements, a click-tracking redirect. Normalization maps
//! every organic link for one product to the same `https://www.amazon.com/dp/<id>`
//! form and rejects sponsored redirects outright.

use std::sync::LazyLock;

/// Path marker of the sponsored-listing click redirect.
pub const SPONSORED_REDIRECT_MARKER: &str = "/sspa/click";

/// Base of every canonical product link.
pub const CANONICAL_BASE: &str = "https://www.amazon.com/dp/";

static DP_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"/dp/(\w+)").unwrap());

static GP_PRODUCT_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"/gp/product/(\w+)").unwrap());

/// Returns true for sponsored click-tracking links.
pub fn is_sponsored_redirect(url: &str) -> bool {
    url.contains(SPONSORED_REDIRECT_MARKER)
}

/// Extracts the product id from a `/dp/<id>` link, falling back to `/gp/product/<id>`.
pub fn product_id(url: &str) -> Option<&str> {
    DP_PATTERN
        .captures(url)
        .or_else(|| GP_PRODUCT_PATTERN.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Normalizes a product link.
///
/// Returns `None` for sponsored redirects, the canonical `/dp/<id>` link when a
/// product id is present, and otherwise the input with its query string removed.
pub fn normalize(url: &str) -> Option<String> {
    if is_sponsored_redirect(url) {
        return None;
    }

    if let Some(id) = product_id(url) {
        return Some(format!("{CANONICAL_BASE}{id}"));
    }

    let without_query = url.split('?').next().unwrap_or(url);
    Some(without_query.to_string())
}
