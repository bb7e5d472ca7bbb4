//! Field-oriented structured encoder capability
//!
//! Log sinks implement [`ObjectEncoder`]; values that know how to lay
//! themselves out as fields implement [`ObjectMarshaler`]. Nested objects are
//! written through `add_object`, so a sink can index fields at every depth
//! without materializing JSON first.

mod json;

pub use json::{marshal_to_value, JsonObjectEncoder};

use std::fmt;
use thiserror::Error;

/// Failure while encoding an object into an [`ObjectEncoder`]
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A reflected value could not be turned into JSON
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// A marshaler refused to encode itself
    #[error("Marshal error: {0}")]
    Marshal(String),
}

/// Structured sink accepting typed fields
pub trait ObjectEncoder {
    /// Add an integer field
    fn add_int(&mut self, key: &str, value: i64);

    /// Add a string field
    fn add_string(&mut self, key: &str, value: &str);

    /// Add a nested object field
    ///
    /// # Errors
    ///
    /// Returns the error reported by the nested marshaler.
    fn add_object(&mut self, key: &str, value: &dyn ObjectMarshaler) -> Result<(), EncodeError>;

    /// Add an opaque value the sink stores as-is
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot represent the value.
    fn add_reflected(&mut self, key: &str, value: &serde_json::Value) -> Result<(), EncodeError>;
}

/// A value that writes itself as fields into an [`ObjectEncoder`]
pub trait ObjectMarshaler: Send + Sync {
    /// Write this value's fields into `enc`
    ///
    /// # Errors
    ///
    /// Returns an error when a field cannot be encoded.
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), EncodeError>;
}

impl fmt::Debug for dyn ObjectMarshaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match marshal_to_value(self) {
            Ok(value) => write!(f, "{value}"),
            Err(e) => write!(f, "<unencodable: {e}>"),
        }
    }
}
