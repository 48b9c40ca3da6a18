//! Data models for the news API wire format and normalized articles.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`ApiEnvelope`]: The response envelope returned by the news API
//! - [`RawArticle`]: An article exactly as the API returned it, every
//!   field optional
//! - [`NormalizedArticle`]: The fixed-shape record produced by the
//!   normalizer and consumed by every sink
//!
//! Wire-format structs use `#[serde(rename)]` where the API's camelCase
//! names differ from Rust field names.

use serde::{Deserialize, Serialize};

/// Response envelope shared by the `top-headlines` and `everything`
/// endpoints.
///
/// On success `status` is `"ok"` and `articles` holds the results; on
/// failure `status` carries an error code and `message` the detail. Both
/// list fields default so an error payload still deserializes.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// `"ok"` on success, an error code otherwise.
    pub status: String,
    /// Total number of results the API claims to have for the query.
    /// Informational only; it routinely exceeds the page returned.
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    /// The page of raw articles, empty on error responses.
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    /// Human-readable error detail, present when `status` is not `"ok"`.
    pub message: Option<String>,
}

/// The publication a raw article came from.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSource {
    /// Publication name, e.g. `"TechNews"`. Null for some outlets.
    pub name: Option<String>,
}

/// An article exactly as returned by the news API.
///
/// Every field is optional; the API omits or nulls fields freely
/// depending on the outlet. Defaulting happens in the normalizer, not
/// here, so this struct stays a faithful image of the wire format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    /// The publication this article came from.
    pub source: Option<RawSource>,
    /// Article author byline.
    pub author: Option<String>,
    /// Article headline.
    pub title: Option<String>,
    /// Short abstract of the article.
    pub description: Option<String>,
    /// Link to the full article.
    pub url: Option<String>,
    /// Publication time, ISO-8601.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Leading portion of the article body.
    pub content: Option<String>,
}

/// A fixed-shape article record with defaults applied, ready for
/// persistence.
///
/// Created once per raw article by [`crate::normalize::normalize`] and
/// never mutated afterwards. The `id` is unique within a run only: it is
/// the run's second-granularity timestamp plus the article's ordinal
/// position in the batch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizedArticle {
    /// `{run_timestamp}_{ordinal}`, the table sink's primary key.
    pub id: String,
    /// Headline, `"No title"` when the API had none.
    pub title: String,
    /// Publication name, empty when the API had none.
    pub source: String,
    /// Author byline, `"Unknown"` when the API had none.
    pub author: String,
    /// Short abstract, empty when the API had none.
    pub description: String,
    /// Link to the full article.
    pub url: String,
    /// Publication time as reported by the API, ISO-8601.
    pub published_at: String,
    /// Time this record was normalized, ISO-8601.
    pub fetched_at: String,
    /// Article body, truncated to the first 1000 characters.
    pub content: String,
}
