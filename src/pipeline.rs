//! Filter, rank and shortlist extracted listings.

use crate::condition::PriceCondition;
use crate::link;
use crate::listing::{NormalizedListing, PipelineStats, RawListing, ResultSet};
use std::cmp::Ordering;
use tracing::debug;

/// Largest number of listings a result set may hold.
pub const MAX_RESULTS: usize = 5;

/// Turns a page worth of listings into the top-rated matches for a price condition.
///
/// Pure over its input: running it twice on the same listings gives the same result.
pub struct Pipeline {
    condition: PriceCondition,
}

impl Pipeline {
    pub fn new(condition: PriceCondition) -> Self {
        Self { condition }
    }

    /// Runs filter, sort, link normalization, sponsored-link removal and truncation, in that order.
    pub fn run(&self, listings: &[RawListing]) -> ResultSet {
        let mut stats = PipelineStats { found: listings.len(), ..Default::default() };

        let mut matched: Vec<&RawListing> =
            listings.iter().filter(|l| self.condition.evaluate(&l.price_text)).collect();
        stats.matched = matched.len();
        debug!(
            "{} of {} listings match {}",
            stats.matched,
            stats.found,
            self.condition.description()
        );

        // sort_by is stable, so equal ratings keep page order
        matched.sort_by(|a, b| compare_rating_desc(a.rating, b.rating));

        let mut shortlisted: Vec<NormalizedListing> = matched
            .into_iter()
            .filter_map(|raw| match link::normalize(&raw.link) {
                Some(canonical) => Some(NormalizedListing::from_raw(raw, canonical)),
                None => {
                    stats.sponsored_dropped += 1;
                    debug!("Dropping sponsored listing: {}", raw.title);
                    None
                }
            })
            .collect();

        shortlisted.truncate(MAX_RESULTS);
        stats.returned = shortlisted.len();

        ResultSet { listings: shortlisted, stats }
    }
}

/// Orders higher ratings first. A missing rating ranks below every real one.
fn compare_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}
