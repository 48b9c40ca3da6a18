//! Local-file sink.
//!
//! Serializes the full normalized batch as one JSON document named
//! `news_{YYYYMMDD_HHMMSS}.json` in the configured output directory
//! (the working directory by default).

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{error, info, instrument};

use crate::error::SinkError;
use crate::models::NormalizedArticle;
use crate::utils::artifact_timestamp;

/// Write a normalized batch to a timestamped JSON file.
///
/// Creates `output_dir` if it does not exist yet.
///
/// # Returns
///
/// The path of the file written, or a [`SinkError`] if serialization or
/// the filesystem write failed.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_batch(
    articles: &[NormalizedArticle],
    output_dir: &str,
) -> Result<PathBuf, SinkError> {
    let json = super::encode_batch(articles)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let filename = format!("news_{}.json", artifact_timestamp());
    let path = Path::new(output_dir).join(filename);

    fs::write(&path, json).await?;
    info!(path = %path.display(), count = articles.len(), "Wrote news batch");

    Ok(path)
}
