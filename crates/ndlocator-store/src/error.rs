use thiserror::Error;

/// Errors from the remote record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A write that should return the affected row returned none,
    /// e.g. an update addressing an id that does not exist.
    #[error("no row returned for {context}")]
    EmptyResponse { context: String },

    /// The configured remote base URL is not a valid URL.
    #[error("invalid remote base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
