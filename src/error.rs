//! Error types for the fetch stage and the persistence sinks.
//!
//! The fetch stage aborts the whole run, so [`FetchError`] propagates up
//! to the driver. Sink errors stop at the sink boundary: the driver logs
//! them and keeps going, so [`SinkError`] never crosses `main`.

use thiserror::Error;

/// Failure while fetching articles from the news API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-layer failure: DNS, TLS, timeout, connection reset, or a
    /// non-2xx HTTP status. Also covers a body that fails to decode as the
    /// expected envelope.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered 200 but declared a non-ok status in its envelope.
    #[error("news api error: {0}")]
    Api(String),
}

/// Failure inside a persistence sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Local filesystem write rejected.
    #[error("filesystem write failed: {0}")]
    Filesystem(#[from] std::io::Error),

    /// The batch could not be serialized to JSON.
    #[error("encoding batch failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The table or object store rejected the write.
    #[error("storage rejected write: {0}")]
    Storage(String),
}
