//! Persistence sinks for normalized article batches.
//!
//! Three independent write paths, selected by the driver per mode:
//!
//! # Submodules
//!
//! - [`local`]: Writes the batch as one timestamped JSON document on the
//!   local filesystem
//! - [`table`]: Writes one DynamoDB row per article, keyed by
//!   `article_id`
//! - [`object`]: Uploads the batch as one JSON object to an S3 bucket
//!   under the `raw-news/` prefix
//!
//! Every sink reports its outcome as a `Result` and never panics past
//! its boundary; the driver logs failures and carries on. Re-running the
//! pipeline produces new timestamped artifacts rather than overwriting
//! old ones.

use crate::error::SinkError;
use crate::models::NormalizedArticle;

pub mod local;
pub mod object;
pub mod table;

/// Serialize a batch as the pretty-printed JSON document shared by the
/// local-file and object-store sinks.
///
/// Two-space indentation; non-ASCII characters are preserved unescaped.
pub(crate) fn encode_batch(articles: &[NormalizedArticle]) -> Result<String, SinkError> {
    Ok(serde_json::to_string_pretty(articles)?)
}
