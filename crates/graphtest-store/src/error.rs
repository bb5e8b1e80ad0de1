use thiserror::Error;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// Entity given to the store has an `id` field that disagrees with its key
    #[error("Entity id mismatch: stored under '{key}' but its id field is '{field}'")]
    IdMismatch { key: String, field: String },

    /// Failure log could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
