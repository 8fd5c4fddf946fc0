/// Result type alias for triage operations.
pub type Result<T> = std::result::Result<T, TriageError>;

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
