//! HTTP client that loads Amazon search results pages.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Base URL of the storefront searched by default.
pub const DEFAULT_BASE_URL: &str = "https://www.amazon.com";

/// Source of rendered search results pages - enables mocking for tests.
#[async_trait]
pub trait SearchPage: Send + Sync {
    /// Submits a keyword search and returns the results page HTML.
    async fn fetch(&self, query: &str) -> Result<String>;

    /// Base URL that relative links on the returned page resolve against.
    fn base_url(&self) -> String;
}

/// Amazon HTTP client.
///
/// Requests fail once the configured timeout elapses; the caller decides how
/// long a page load may take.
pub struct AmazonClient {
    client: Client,
    base_url: Option<String>,
}

impl AmazonClient {
    /// Creates a new Amazon client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new Amazon client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .context("Failed to load search page")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Amazon answered 503; the page could not be loaded.");
            anyhow::bail!("Search page unavailable (503). Try again later or use a proxy.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl SearchPage for AmazonClient {
    async fn fetch(&self, query: &str) -> Result<String> {
        let url = format!("{}/s?k={}", self.base_url(), urlencoding::encode(query));

        info!("Searching Amazon for: {}", query);
        self.get(&url).await
    }

    fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
