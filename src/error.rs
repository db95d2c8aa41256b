//! Error taxonomy for node construction, field access and JSON input.
use thiserror::Error;

pub type Result<T, E = CardError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CardError {
    /// Declare-once insertion hit a key that is already present.
    #[error("key `{key}` already exists")]
    DuplicateKey { key: String },

    #[error("key `{key}` not found")]
    KeyNotFound { key: String },

    /// A data URI was given without the field that declares its content type.
    #[error("`{field}` is a data URI, so `{metadata}` must be declared")]
    MissingRequiredMetadata {
        field: &'static str,
        metadata: &'static str,
    },

    #[error("`{kind}` has no parameter named `{param}`")]
    UnknownParameter { kind: &'static str, param: String },

    #[error("`{kind}` requires `{param}`")]
    MissingArgument {
        kind: &'static str,
        param: &'static str,
    },

    /// JSON input that does not describe a node.
    #[error("at JSON path {path} → {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CardError {
    pub(crate) fn duplicate(key: impl Into<String>) -> Self {
        CardError::DuplicateKey { key: key.into() }
    }

    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        CardError::KeyNotFound { key: key.into() }
    }
}
