//! Structured-record sink backed by DynamoDB.
//!
//! Writes one row per normalized article, keyed by `article_id`. Writes
//! are best-effort: a rejected put is logged with the provider's error
//! detail and counted, and the loop moves on to the next article. The
//! sink only reports failure when every put in a non-empty batch was
//! rejected.

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info, instrument};

use crate::error::SinkError;
use crate::models::NormalizedArticle;
use crate::utils::truncate_chars;

/// Sink writing one table row per article.
///
/// The client is constructed once at startup and injected, so tests and
/// alternate deployments can substitute their own endpoint.
#[derive(Debug, Clone)]
pub struct TableSink {
    client: Client,
    table_name: String,
}

impl TableSink {
    /// Create a sink against a named table.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Write a normalized batch, one put per article.
    ///
    /// # Returns
    ///
    /// The number of rows written. A batch where at least one put landed
    /// counts as success; `Err` is returned only when every put of a
    /// non-empty batch was rejected.
    #[instrument(level = "info", skip_all, fields(table = %self.table_name))]
    pub async fn write_batch(&self, articles: &[NormalizedArticle]) -> Result<usize, SinkError> {
        let mut saved = 0usize;
        let mut last_error: Option<String> = None;

        for article in articles {
            let mut request = self.client.put_item().table_name(&self.table_name);
            for (name, value) in item_attributes(article) {
                request = request.item(name, value);
            }

            match request.send().await {
                Ok(_) => {
                    saved += 1;
                    println!("  saved: {}", truncate_chars(&article.title, 50));
                }
                Err(e) => {
                    let detail = format!("{}", DisplayErrorContext(e));
                    error!(id = %article.id, error = %detail, "Table write rejected");
                    last_error = Some(detail);
                }
            }
        }

        if saved == 0 {
            if let Some(detail) = last_error {
                return Err(SinkError::Storage(detail));
            }
        }

        info!(
            saved,
            failed = articles.len() - saved,
            "Table batch complete"
        );
        Ok(saved)
    }
}

/// The attribute set stored for one article row.
fn item_attributes(article: &NormalizedArticle) -> [(&'static str, AttributeValue); 9] {
    [
        ("article_id", AttributeValue::S(article.id.clone())),
        ("title", AttributeValue::S(article.title.clone())),
        ("source", AttributeValue::S(article.source.clone())),
        ("author", AttributeValue::S(article.author.clone())),
        ("description", AttributeValue::S(article.description.clone())),
        ("url", AttributeValue::S(article.url.clone())),
        ("published_at", AttributeValue::S(article.published_at.clone())),
        ("fetched_at", AttributeValue::S(article.fetched_at.clone())),
        ("content", AttributeValue::S(article.content.clone())),
    ]
}
