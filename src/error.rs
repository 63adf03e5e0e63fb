//! Error types for the flood proxy

/// Errors surfaced by the upstream client, the caching proxy and startup.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Upstream answered with a non-success status.
    #[error("upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Upstream answered 2xx but the body was not JSON.
    #[error("upstream returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProxyError>;
