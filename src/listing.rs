//! Data models for search listings and ranked result sets.

use serde::{Deserialize, Serialize};

/// One fully-populated search result as read from the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    /// Listing title
    pub title: String,
    /// Displayed price text, e.g. "$15.99"
    pub price_text: String,
    /// Absolute link to the listing
    pub link: String,
    /// Star rating; `None` when the rating text held no number
    pub rating: Option<f64>,
}

impl RawListing {
    pub fn new(
        title: impl Into<String>,
        price_text: impl Into<String>,
        link: impl Into<String>,
        rating: Option<f64>,
    ) -> Self {
        Self { title: title.into(), price_text: price_text.into(), link: link.into(), rating }
    }
}

/// Staging record for a result item whose fields are still being located.
///
/// Only turns into a [`RawListing`] once every field was found.
#[derive(Debug, Clone, Default)]
pub struct ListingCard {
    pub title: Option<String>,
    pub price_text: Option<String>,
    pub link: Option<String>,
    /// Raw rating text, e.g. "4.5 out of 5 stars"
    pub rating_text: Option<String>,
}

impl ListingCard {
    /// Names of the fields that were not found.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.price_text.is_none() {
            missing.push("price");
        }
        if self.link.is_none() {
            missing.push("link");
        }
        if self.rating_text.is_none() {
            missing.push("rating");
        }
        missing
    }

    /// Builds the listing if all fields are present.
    pub fn into_listing(self) -> Option<RawListing> {
        let rating_text = self.rating_text?;
        Some(RawListing {
            title: self.title?,
            price_text: self.price_text?,
            link: self.link?,
            rating: parse_rating(&rating_text),
        })
    }
}

/// Reads the star rating from text like "4.5 out of 5 stars": the leading
/// number of the first space-separated token.
pub fn parse_rating(text: &str) -> Option<f64> {
    let first = text.trim().split(' ').next()?;
    crate::condition::leading_decimal(first)
}

/// A listing whose link has been canonicalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub title: String,
    pub price_text: String,
    /// Canonical product link
    pub link: String,
    pub rating: Option<f64>,
}

impl NormalizedListing {
    /// Replaces the link of `raw` with an already-normalized one.
    pub fn from_raw(raw: &RawListing, link: String) -> Self {
        Self {
            title: raw.title.clone(),
            price_text: raw.price_text.clone(),
            link,
            rating: raw.rating,
        }
    }
}

/// Counts recorded while running the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Listings handed to the pipeline
    pub found: usize,
    /// Listings that satisfied the price condition
    pub matched: usize,
    /// Matching listings dropped because their link was a sponsored redirect
    pub sponsored_dropped: usize,
    /// Listings in the final result set
    pub returned: usize,
}

/// Top-rated matches, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub listings: Vec<NormalizedListing>,
    #[serde(skip)]
    pub stats: PipelineStats,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
