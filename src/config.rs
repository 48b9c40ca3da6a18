//! Runtime configuration assembled once at startup.
//!
//! Components never read the process environment themselves; everything
//! they need is collected here from the parsed CLI (whose fields carry
//! the environment fallbacks) and passed down by reference.

use crate::cli::{Cli, Command};

/// The configuration a run operates under.
#[derive(Debug, Clone)]
pub struct Config {
    /// News API key.
    pub api_key: String,
    /// AWS region the cloud sinks talk to.
    pub region: String,
    /// DynamoDB table for the structured-record sink.
    pub table_name: String,
    /// S3 bucket for the object-store sink. `None` when the run uses no
    /// cloud sinks.
    pub bucket_name: Option<String>,
}

impl Config {
    /// Collect the configuration out of the parsed command line.
    pub fn from_cli(cli: &Cli) -> Self {
        let (table_name, bucket_name) = match &cli.command {
            Command::Archive { table, bucket, .. } => (table.clone(), Some(bucket.clone())),
            Command::Headlines { .. } => ("NewsArticles".to_string(), None),
        };

        Self {
            api_key: cli.api_key.clone(),
            region: cli.region.clone(),
            table_name,
            bucket_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_headlines_cli() {
        let cli = Cli::parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "--region",
            "us-east-1",
            "headlines",
        ]);
        let config = Config::from_cli(&cli);

        assert_eq!(config.api_key, "k");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.table_name, "NewsArticles");
        assert!(config.bucket_name.is_none());
    }

    #[test]
    fn test_config_from_archive_cli() {
        let cli = Cli::parse_from([
            "newsdrop",
            "--api-key",
            "k",
            "--region",
            "eu-west-1",
            "archive",
            "--table",
            "Stories",
            "--bucket",
            "news-bucket",
        ]);
        let config = Config::from_cli(&cli);

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.table_name, "Stories");
        assert_eq!(config.bucket_name.as_deref(), Some("news-bucket"));
    }
}
