//! # newsdrop
//!
//! A small news pipeline that fetches articles from NewsAPI, prints a
//! per-article summary, and persists the batch to one or more sinks.
//!
//! ## Features
//!
//! - Fetches top headlines (category + country) or recent articles for a
//!   free-text query
//! - Normalizes the API's loosely-shaped records into fixed-shape
//!   articles with documented defaults
//! - Persists batches to a local JSON file, a DynamoDB table, and an S3
//!   bucket depending on the selected mode
//!
//! ## Usage
//!
//! ```sh
//! newsdrop --api-key KEY headlines -c technology --country in
//! newsdrop --api-key KEY archive -q "artificial intelligence" --bucket my-bucket
//! ```
//!
//! ## Architecture
//!
//! Both subcommands are configurations of the same linear pipeline:
//! 1. **Fetch**: One GET against the news API; any failure aborts the run
//! 2. **Normalize**: Apply defaults and content truncation per article
//! 3. **Display**: Print a human-readable summary of each article
//! 4. **Persist**: Write the batch through the mode's sinks; sink
//!    failures are logged and reported without crashing the process

use std::error::Error;

use aws_config::{BehaviorVersion, Region};
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod normalize;
mod sinks;
mod utils;

use api::NewsClient;
use cli::{Cli, Command};
use config::Config;
use models::NormalizedArticle;
use normalize::normalize_batch;
use sinks::{object::ObjectSink, table::TableSink};
use utils::{run_timestamp, truncate_chars};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsdrop starting up");

    let args = Cli::parse();
    let config = Config::from_cli(&args);
    debug!(region = %config.region, table = %config.table_name, "Configuration assembled");

    let news = NewsClient::new(reqwest::Client::new(), config.api_key.clone());

    match &args.command {
        Command::Headlines {
            category,
            country,
            page_size,
            output_dir,
        } => {
            run_headlines(&news, category, country, *page_size, output_dir).await?;
        }
        Command::Archive {
            query, page_size, ..
        } => {
            let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .load()
                .await;
            let table = TableSink::new(
                aws_sdk_dynamodb::Client::new(&sdk_config),
                config.table_name.clone(),
            );
            let bucket = config
                .bucket_name
                .clone()
                .ok_or("archive mode requires a bucket")?;
            let object = ObjectSink::new(aws_sdk_s3::Client::new(&sdk_config), bucket);

            run_archive(&news, query, *page_size, &table, &object).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Headlines mode: fetch top headlines and write them to a local file.
async fn run_headlines(
    news: &NewsClient,
    category: &str,
    country: &str,
    page_size: u32,
    output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    println!("newsdrop - top headlines");
    println!("{}", "=".repeat(80));

    let raw = match news.top_headlines(category, country, page_size).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "Fetch failed; nothing to persist");
            println!("error: {e}");
            return Err(e.into());
        }
    };
    println!("\nfetched {} articles\n", raw.len());

    let articles = normalize_batch(&raw, &run_timestamp());
    display_articles(&articles);

    match sinks::local::write_batch(&articles, output_dir).await {
        Ok(path) => println!("\nsaved articles to {}", path.display()),
        Err(e) => error!(error = %e, "Local sink failed"),
    }

    Ok(())
}

/// Archive mode: fetch recent articles for a query, write one table row
/// per article, and upload the batch document to the object store.
async fn run_archive(
    news: &NewsClient,
    query: &str,
    page_size: u32,
    table: &TableSink,
    object: &ObjectSink,
) -> Result<(), Box<dyn Error>> {
    println!("newsdrop - archive run");
    println!("{}", "=".repeat(80));

    info!(%query, "Fetching news");
    let raw = match news.everything(query, page_size).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "Fetch failed; nothing to persist");
            println!("error: {e}");
            return Err(e.into());
        }
    };

    if raw.is_empty() {
        warn!("No articles fetched; skipping persistence");
        println!("no articles fetched");
        return Ok(());
    }
    println!("\nfetched {} articles\n", raw.len());

    let articles = normalize_batch(&raw, &run_timestamp());
    display_articles(&articles);

    info!("Saving to table");
    match table.write_batch(&articles).await {
        Ok(saved) => println!("\nsaved {saved} articles to the table"),
        Err(e) => error!(error = %e, "Table sink failed"),
    }

    info!("Uploading to object store");
    match object.write_batch(&articles).await {
        Ok(location) => println!("uploaded batch to {location}"),
        Err(e) => error!(error = %e, "Object sink failed"),
    }

    Ok(())
}

/// Print the per-article summary block for a normalized batch.
///
/// Descriptions are truncated to 100 characters for the listing; the
/// records themselves are untouched.
fn display_articles(articles: &[NormalizedArticle]) {
    for (idx, article) in articles.iter().enumerate() {
        println!("{}. {}", idx + 1, article.title);
        println!("   Source: {}", article.source);
        println!("   Published: {}", article.published_at);
        println!("   URL: {}", article.url);
        let description = if article.description.is_empty() {
            "No description"
        } else {
            &article.description
        };
        println!("   Description: {}...", truncate_chars(description, 100));
        println!("{}", "-".repeat(80));
    }
}
