//! Output formatting for result sets (numbered report, JSON).

use crate::config::OutputFormat;
use crate::listing::{NormalizedListing, ResultSet};

/// Line printed after every report entry.
pub const SEPARATOR: &str = "----------------------------------";

/// Shown instead of a report when nothing matched.
pub const NO_MATCHES: &str = "No products found matching the criteria.";

/// Renders result sets for output.
pub struct Presenter {
    format: OutputFormat,
}

impl Presenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders the whole result set.
    pub fn render(&self, results: &ResultSet) -> String {
        match self.format {
            OutputFormat::Report => self.report(results),
            OutputFormat::Json => self.json(results),
        }
    }

    fn report(&self, results: &ResultSet) -> String {
        if results.is_empty() {
            return NO_MATCHES.to_string();
        }

        results
            .listings
            .iter()
            .enumerate()
            .map(|(index, listing)| Self::report_entry(index + 1, listing))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn report_entry(number: usize, listing: &NormalizedListing) -> String {
        let rating = match listing.rating {
            Some(stars) => format!("{} stars", stars),
            None => "N/A".to_string(),
        };

        [
            format!("Item {}:", number),
            format!("Title: {}", listing.title),
            format!("Price: {}", listing.price_text),
            format!("Rating: {}", rating),
            format!("Link: {}", listing.link),
            SEPARATOR.to_string(),
        ]
        .join("\n")
    }

    fn json(&self, results: &ResultSet) -> String {
        serde_json::to_string_pretty(&results.listings).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: &str, rating: Option<f64>) -> NormalizedListing {
        NormalizedListing {
            title: title.to_string(),
            price_text: price.to_string(),
            link: format!("https://www.amazon.com/dp/{}", title.to_uppercase()),
            rating,
        }
    }

    fn results(listings: Vec<NormalizedListing>) -> ResultSet {
        ResultSet { listings, ..Default::default() }
    }

    #[test]
    fn test_report_empty() {
        let presenter = Presenter::new(OutputFormat::Report);
        assert_eq!(presenter.render(&ResultSet::default()), NO_MATCHES);
    }

    #[test]
    fn test_report_single_entry() {
        let presenter = Presenter::new(OutputFormat::Report);
        let output = presenter.render(&results(vec![listing("b0mouse", "$15.99", Some(4.5))]));

        let expected = "Item 1:\n\
                        Title: b0mouse\n\
                        Price: $15.99\n\
                        Rating: 4.5 stars\n\
                        Link: https://www.amazon.com/dp/B0MOUSE\n\
                        ----------------------------------";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_report_numbering_and_order() {
        let presenter = Presenter::new(OutputFormat::Report);
        let output = presenter.render(&results(vec![
            listing("first", "$1.00", Some(5.0)),
            listing("second", "$2.00", Some(4.8)),
        ]));

        let first = output.find("Item 1:\nTitle: first").unwrap();
        let second = output.find("Item 2:\nTitle: second").unwrap();
        assert!(first < second);
        assert_eq!(output.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn test_report_whole_ratings_print_without_decimals() {
        let presenter = Presenter::new(OutputFormat::Report);
        let output = presenter.render(&results(vec![listing("a", "$1.00", Some(5.0))]));
        assert!(output.contains("Rating: 5 stars"));
    }

    #[test]
    fn test_report_price_text_unchanged() {
        let presenter = Presenter::new(OutputFormat::Report);
        let output = presenter.render(&results(vec![listing("a", "$1,299.00", Some(4.0))]));
        assert!(output.contains("Price: $1,299.00"));
    }

    #[test]
    fn test_report_missing_rating() {
        let presenter = Presenter::new(OutputFormat::Report);
        let output = presenter.render(&results(vec![listing("a", "$1.00", None)]));
        assert!(output.contains("Rating: N/A"));
    }

    #[test]
    fn test_json() {
        let presenter = Presenter::new(OutputFormat::Json);
        let output = presenter.render(&results(vec![listing("a", "$1.00", Some(4.0))]));

        let parsed: Vec<NormalizedListing> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].link, "https://www.amazon.com/dp/A");
        assert!(output.starts_with('['));
    }

    #[test]
    fn test_json_empty() {
        let presenter = Presenter::new(OutputFormat::Json);
        assert_eq!(presenter.render(&ResultSet::default()), "[]");
    }
}
