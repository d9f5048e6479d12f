use thiserror::Error;

#[derive(Debug, Error)]
pub enum TumorboardError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed literature response for PMID {pmid}: {reason}")]
    MalformedLiteratureResponse { pmid: u64, reason: String },

    #[error("Security error: {0}")]
    SecurityError(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TumorboardError>;
