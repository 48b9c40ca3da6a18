//! Normalization of raw API articles into fixed-shape records.
//!
//! The news API omits or nulls fields freely, so every optional field
//! gets a documented default here: missing titles become `"No title"`,
//! missing authors `"Unknown"`, and the remaining text fields the empty
//! string. Body content is capped at the first 1000 characters.
//!
//! Ids are `{run_timestamp}_{ordinal}`. The run timestamp has second
//! granularity, so uniqueness holds within a run but not across runs
//! started inside the same second.

use chrono::Local;

use crate::models::{NormalizedArticle, RawArticle};
use crate::utils::truncate_chars;

/// Maximum number of characters of article body kept on a normalized
/// record.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Map a raw article onto a [`NormalizedArticle`].
///
/// Pure apart from reading the clock for `fetched_at`. The same raw
/// article normalized at the same position with the same run stamp
/// differs only in that field.
///
/// # Arguments
///
/// * `raw` - The article as returned by the API
/// * `index` - Ordinal position of the article within the fetched batch
/// * `run_stamp` - The run's `YYYYMMDDHHMMSS` timestamp, shared by the
///   whole batch
pub fn normalize(raw: &RawArticle, index: usize, run_stamp: &str) -> NormalizedArticle {
    let source = raw
        .source
        .as_ref()
        .and_then(|s| s.name.clone())
        .unwrap_or_default();

    let content = raw
        .content
        .as_deref()
        .map(|c| truncate_chars(c, MAX_CONTENT_CHARS))
        .unwrap_or_default();

    NormalizedArticle {
        id: format!("{}_{}", run_stamp, index),
        title: raw.title.clone().unwrap_or_else(|| "No title".to_string()),
        source,
        author: raw.author.clone().unwrap_or_else(|| "Unknown".to_string()),
        description: raw.description.clone().unwrap_or_default(),
        url: raw.url.clone().unwrap_or_default(),
        published_at: raw.published_at.clone().unwrap_or_default(),
        fetched_at: Local::now().to_rfc3339(),
        content,
    }
}

/// Normalize a whole fetched batch in order.
///
/// Ordinal positions start at zero, so a batch of N articles yields ids
/// `{run_stamp}_0` through `{run_stamp}_{N-1}`.
pub fn normalize_batch(raw: &[RawArticle], run_stamp: &str) -> Vec<NormalizedArticle> {
    raw.iter()
        .enumerate()
        .map(|(index, article)| normalize(article, index, run_stamp))
        .collect()
}
