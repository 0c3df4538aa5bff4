use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Knowledge base not found: {0}")]
    KnowledgeNotFound(String),

    #[error("Invalid knowledge base id: {0:?}")]
    InvalidKnowledgeId(String),

    #[error("Knowledge store error: {0}")]
    StoreError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
