use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Elasticsearch error: {0}")]
    Elasticsearch(#[from] elasticsearch::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Index creation failed (status {status}): {details}")]
    IndexCreation { status: u16, details: String },

    #[error("Indexing message {id} failed (status {status}): {details}")]
    DocumentIndex {
        id: String,
        status: u16,
        details: String,
    },

    #[error("Search failed (status {status}): {details}")]
    Search { status: u16, details: String },

    #[error("Unexpected search response shape: {0}")]
    MalformedResponse(String),
}
