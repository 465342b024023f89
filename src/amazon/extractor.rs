//! Extracts listings from an Amazon search results page.

use crate::amazon::selectors::{errors, search};
use crate::listing::{ListingCard, RawListing};
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Listings read from one results page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Fully-populated listings, in page order
    pub listings: Vec<RawListing>,
    /// Result items skipped because a field was missing
    pub skipped: usize,
}

/// Reads result items off a rendered search results page.
pub struct Extractor {
    base_url: String,
}

impl Extractor {
    /// Creates an extractor that resolves relative links against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Extracts every complete listing from `html`.
    ///
    /// Items missing a title, price, link or rating are skipped. A CAPTCHA or
    /// error page fails the whole extraction.
    pub fn extract(&self, html: &str) -> Result<Extraction> {
        let document = Html::parse_document(html);

        self.check_for_errors(&document)?;

        let mut extraction = Extraction::default();

        for item in document.select(&search::ITEM) {
            let card = self.read_card(item);
            let missing = card.missing_fields();

            match card.into_listing() {
                Some(listing) => {
                    trace!("Extracted listing: {} ({})", listing.title, listing.price_text);
                    extraction.listings.push(listing);
                }
                None => {
                    warn!("Skipped an item due to missing elements: {}", missing.join(", "));
                    extraction.skipped += 1;
                }
            }
        }

        debug!(
            "Extracted {} listings ({} items skipped)",
            extraction.listings.len(),
            extraction.skipped
        );

        Ok(extraction)
    }

    /// Checks for CAPTCHA or error pages.
    fn check_for_errors(&self, document: &Html) -> Result<()> {
        if document.select(&errors::CAPTCHA).next().is_some() {
            anyhow::bail!(
                "CAPTCHA detected. Amazon is blocking requests. \
                Try using a proxy or waiting before retrying."
            );
        }

        if document.select(&errors::DOG_PAGE).next().is_some() {
            anyhow::bail!(
                "Amazon error page detected (503). \
                The service may be temporarily unavailable."
            );
        }

        Ok(())
    }

    fn read_card(&self, item: ElementRef) -> ListingCard {
        ListingCard {
            title: first_text(item, &search::TITLE),
            price_text: first_text(item, &search::PRICE),
            link: item
                .select(&search::LINK)
                .next()
                .and_then(|e| e.value().attr("href"))
                .map(|href| self.absolute(href)),
            rating_text: first_text(item, &search::RATING),
        }
    }

    /// Resolves a page-relative href to an absolute URL.
    fn absolute(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }
}

fn first_text(item: ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(|e| e.text().collect::<String>().trim().to_string())
}
