//! Search command implementation.

use crate::amazon::{AmazonClient, Extractor, SearchPage};
use crate::condition::PriceCondition;
use crate::config::Config;
use crate::format::Presenter;
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use tracing::info;

/// Runs one search: load the results page, extract listings, shortlist, render.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    ///
    /// The HTTP client lives only for the duration of this call and is
    /// released on every return path.
    pub async fn execute(&self, query: &str, condition: PriceCondition) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query, condition).await
    }

    /// Executes the search with a provided page source (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SearchPage,
        query: &str,
        condition: PriceCondition,
    ) -> Result<String> {
        info!("Searching for: {} ({})", query, condition.description());

        let html = client.fetch(query).await?;
        let extraction = Extractor::new(client.base_url()).extract(&html)?;
        info!("Products found: {}", extraction.listings.len());

        let results = Pipeline::new(condition).run(&extraction.listings);
        info!("Filtered products matching price condition: {}", results.stats.matched);

        let presenter = Presenter::new(self.config.format);
        Ok(presenter.render(&results))
    }
}
