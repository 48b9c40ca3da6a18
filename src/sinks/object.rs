//! Object-store sink backed by S3.
//!
//! Uploads the full normalized batch as a single JSON object under the
//! `raw-news/` prefix with a timestamped name. One all-or-nothing
//! operation per run.

use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{error, info, instrument};

use crate::error::SinkError;
use crate::models::NormalizedArticle;
use crate::utils::artifact_timestamp;

/// Key prefix every uploaded batch lands under.
pub const KEY_PREFIX: &str = "raw-news";

/// Sink uploading the batch document to a bucket.
#[derive(Debug, Clone)]
pub struct ObjectSink {
    client: Client,
    bucket: String,
}

impl ObjectSink {
    /// Create a sink against a named bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Upload a normalized batch as one JSON object.
    ///
    /// # Returns
    ///
    /// The `s3://bucket/key` location of the uploaded object.
    #[instrument(level = "info", skip_all, fields(bucket = %self.bucket))]
    pub async fn write_batch(&self, articles: &[NormalizedArticle]) -> Result<String, SinkError> {
        let json = super::encode_batch(articles)?;
        let key = object_key(&artifact_timestamp());

        match self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(json.into_bytes()))
            .content_type("application/json")
            .send()
            .await
        {
            Ok(_) => {
                let location = format!("s3://{}/{}", self.bucket, key);
                info!(%location, count = articles.len(), "Uploaded news batch");
                Ok(location)
            }
            Err(e) => {
                let detail = format!("{}", DisplayErrorContext(e));
                error!(%key, error = %detail, "Object upload rejected");
                Err(SinkError::Storage(detail))
            }
        }
    }
}

/// Build the object key for a batch uploaded at `stamp`.
fn object_key(stamp: &str) -> String {
    format!("{KEY_PREFIX}/news_{stamp}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_shape() {
        assert_eq!(
            object_key("20240101_083000"),
            "raw-news/news_20240101_083000.json"
        );
    }
}
