//! News API client.
//!
//! Thin wrapper over the news aggregation service's two endpoints:
//! `top-headlines` (category and country filtered) and `everything`
//! (free-text query, newest first). Each call is a single GET with no
//! retry, pagination, or rate-limit handling.
//!
//! # Failure mapping
//!
//! - Transport problems and non-2xx statuses surface as
//!   [`FetchError::Transport`]
//! - A 200 whose envelope declares a non-ok status surfaces as
//!   [`FetchError::Api`] with the service's message

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::FetchError;
use crate::models::{ApiEnvelope, RawArticle};

/// Base URL of the news aggregation API.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Client for the news aggregation API.
///
/// Holds the shared HTTP client, the service base URL, and the API key.
/// Constructed once at startup and borrowed by the driver for the run.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl NewsClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::with_base_url(http, base_url, api_key)
    }

    /// Create a client against an alternate base URL.
    pub fn with_base_url(http: Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Fetch top headlines filtered by category and country.
    ///
    /// # Arguments
    ///
    /// * `category` - Headline category, e.g. `"general"` or `"technology"`
    /// * `country` - Two-letter country code, e.g. `"us"`
    /// * `page_size` - Number of articles to request (API caps at 100)
    #[instrument(level = "info", skip(self))]
    pub async fn top_headlines(
        &self,
        category: &str,
        country: &str,
        page_size: u32,
    ) -> Result<Vec<RawArticle>, FetchError> {
        let params = [
            ("category", category.to_string()),
            ("country", country.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        self.fetch("top-headlines", &params).await
    }

    /// Fetch worldwide articles matching a free-text query, newest first.
    ///
    /// Language is pinned to English and results are sorted by
    /// publication time, so a small page still surfaces the latest
    /// coverage of the query.
    #[instrument(level = "info", skip(self))]
    pub async fn everything(
        &self,
        query: &str,
        page_size: u32,
    ) -> Result<Vec<RawArticle>, FetchError> {
        let params = [
            ("q", query.to_string()),
            ("language", "en".to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("pageSize", page_size.to_string()),
        ];
        self.fetch("everything", &params).await
    }

    /// Issue one GET against `path` and unwrap the response envelope.
    async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<RawArticle>, FetchError> {
        let url = self
            .base_url
            .join(path)
            .expect("relative endpoint joins onto the base URL");

        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope = response.json().await?;
        debug!(
            status = %envelope.status,
            total_results = envelope.total_results,
            "Envelope received"
        );

        let articles = unwrap_envelope(envelope)?;
        info!(count = articles.len(), endpoint = path, "Fetched articles");
        Ok(articles)
    }
}

/// Split an [`ApiEnvelope`] into its article list or its error message.
///
/// A non-ok status with no message is reported as `"Unknown error"`.
pub(crate) fn unwrap_envelope(envelope: ApiEnvelope) -> Result<Vec<RawArticle>, FetchError> {
    if envelope.status == "ok" {
        Ok(envelope.articles)
    } else {
        Err(FetchError::Api(
            envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> ApiEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_unwrap_envelope_ok() {
        let env = envelope(
            r#"{
                "status": "ok",
                "totalResults": 1,
                "articles": [{"title": "One story", "url": "http://x"}]
            }"#,
        );
        let articles = unwrap_envelope(env).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("One story"));
    }

    #[test]
    fn test_unwrap_envelope_error_carries_message() {
        let env = envelope(r#"{"status": "error", "message": "apiKeyInvalid"}"#);
        let err = unwrap_envelope(env).unwrap_err();
        match err {
            FetchError::Api(message) => assert!(message.contains("apiKeyInvalid")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_envelope_error_without_message() {
        let env = envelope(r#"{"status": "error"}"#);
        let err = unwrap_envelope(env).unwrap_err();
        match err {
            FetchError::Api(message) => assert_eq!(message, "Unknown error"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_envelope_ok_with_empty_page() {
        let env = envelope(r#"{"status": "ok", "totalResults": 0, "articles": []}"#);
        assert!(unwrap_envelope(env).unwrap().is_empty());
    }

    #[test]
    fn test_endpoint_join() {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            base.join("top-headlines").unwrap().as_str(),
            "https://newsapi.org/v2/top-headlines"
        );
        assert_eq!(
            base.join("everything").unwrap().as_str(),
            "https://newsapi.org/v2/everything"
        );
    }
}
