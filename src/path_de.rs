use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CardError, Result};

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize(&mut de).map_err(with_path)?;
    de.end()?;
    Ok(value)
}

/// Same as [`from_str_with_path`] for an already parsed document, e.g. the
/// output of a jq pre-filter.
pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(with_path)
}

fn with_path(err: serde_path_to_error::Error<serde_json::Error>) -> CardError {
    let path = err.path().to_string();
    CardError::Parse {
        path,
        message: err.into_inner().to_string(),
    }
}
