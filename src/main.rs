//! amz-shortlist - Search Amazon and print the top-rated listings that meet a price condition.

use amz_shortlist::commands::SearchCommand;
use amz_shortlist::condition::PriceCondition;
use amz_shortlist::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-shortlist",
    version,
    about = "Search Amazon and print the top-rated listings that meet a price condition",
    after_help = "Price conditions apply the operator to the listing price:\n  \
                  20<  listings priced below 20\n  \
                  30>  listings priced above 30"
)]
struct Cli {
    /// Search term
    #[arg(value_parser = non_blank)]
    query: String,

    /// Price condition, e.g. 20< or 30>
    #[arg(value_name = "CONDITION")]
    condition: PriceCondition,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Seconds the search page may take to load
    #[arg(long, env = "AMZ_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("search term must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let cmd = SearchCommand::new(config);
    let output = cmd.execute(&cli.query, cli.condition).await?;
    println!("{}", output);

    Ok(())
}
