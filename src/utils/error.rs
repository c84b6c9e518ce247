use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("Missing input: an identifier value is required")]
    MissingInput,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
