use thiserror::Error;

/// Top-level error type for shared ontoseed types.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OntoseedError {
    #[error("Invalid id {value:?}: {reason}")]
    InvalidId { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
