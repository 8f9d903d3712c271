use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed topology, label set, or training data.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A sample's feature count does not match the network input size.
    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A persisted model failed validation.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "serde")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
