//! Command-line interface definitions for newsdrop.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. Secrets and deployment knobs can be supplied as flags or via
//! environment variables.

use clap::{Parser, Subcommand};

/// Command-line arguments for the newsdrop application.
///
/// Global options cover credentials shared by both modes; everything
/// mode-specific lives on the subcommand.
///
/// # Examples
///
/// ```sh
/// # Print today's US headlines and save them next to the binary
/// newsdrop --api-key YOUR_KEY headlines
///
/// # Archive recent AI coverage to DynamoDB and S3
/// NEWS_API_KEY=YOUR_KEY newsdrop archive --bucket my-news-bucket
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// AWS region used by the cloud sinks
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The two pipeline configurations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch top headlines and write them to a local JSON file
    Headlines {
        /// Headline category (business, entertainment, general, health,
        /// science, sports, technology)
        #[arg(short, long, default_value = "general")]
        category: String,

        /// Two-letter country code
        #[arg(long, default_value = "us")]
        country: String,

        /// Number of articles to request
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        page_size: u32,

        /// Directory the JSON document is written to
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },

    /// Fetch recent articles for a query and archive them to DynamoDB and S3
    Archive {
        /// Free-text search query
        #[arg(short, long, default_value = "artificial intelligence")]
        query: String,

        /// Number of articles to request
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
        page_size: u32,

        /// DynamoDB table receiving one row per article
        #[arg(long, env = "NEWS_TABLE_NAME", default_value = "NewsArticles")]
        table: String,

        /// S3 bucket receiving the batch document
        #[arg(long, env = "NEWS_S3_BUCKET")]
        bucket: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines_defaults() {
        let cli = Cli::parse_from(["newsdrop", "--api-key", "k", "headlines"]);

        match cli.command {
            Command::Headlines {
                category,
                country,
                page_size,
                output_dir,
            } => {
                assert_eq!(category, "general");
                assert_eq!(country, "us");
                assert_eq!(page_size, 10);
                assert_eq!(output_dir, ".");
            }
            other => panic!("expected headlines, got {other:?}"),
        }
        assert_eq!(cli.api_key, "k");
    }

    #[test]
    fn test_region_flag() {
        let cli = Cli::parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "--region",
            "ap-south-1",
            "headlines",
        ]);
        assert_eq!(cli.region, "ap-south-1");
    }

    #[test]
    fn test_headlines_flags() {
        let cli = Cli::parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "headlines",
            "-c",
            "technology",
            "--country",
            "in",
            "-p",
            "25",
            "-o",
            "/tmp/out",
        ]);

        match cli.command {
            Command::Headlines {
                category,
                country,
                page_size,
                output_dir,
            } => {
                assert_eq!(category, "technology");
                assert_eq!(country, "in");
                assert_eq!(page_size, 25);
                assert_eq!(output_dir, "/tmp/out");
            }
            other => panic!("expected headlines, got {other:?}"),
        }
    }

    #[test]
    fn test_archive_defaults() {
        let cli = Cli::parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "archive",
            "--bucket",
            "news-bucket",
        ]);

        match cli.command {
            Command::Archive {
                query,
                page_size,
                table,
                bucket,
            } => {
                assert_eq!(query, "artificial intelligence");
                assert_eq!(page_size, 5);
                assert_eq!(table, "NewsArticles");
                assert_eq!(bucket, "news-bucket");
            }
            other => panic!("expected archive, got {other:?}"),
        }
    }

    #[test]
    fn test_page_size_rejected_over_api_maximum() {
        let result = Cli::try_parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "headlines",
            "--page-size",
            "101",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_rejected_at_zero() {
        let result = Cli::try_parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "headlines",
            "--page-size",
            "0",
        ]);
        assert!(result.is_err());
    }
}
