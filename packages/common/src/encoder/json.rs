//! In-memory JSON implementation of the structured encoder

use super::{EncodeError, ObjectEncoder, ObjectMarshaler};
use serde_json::{Map, Value};

/// [`ObjectEncoder`] that collects fields into a JSON object
#[derive(Debug, Clone, Default)]
pub struct JsonObjectEncoder {
    fields: Map<String, Value>,
}

impl JsonObjectEncoder {
    /// Create an empty encoder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields collected so far
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the encoder into a JSON object value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl ObjectEncoder for JsonObjectEncoder {
    fn add_int(&mut self, key: &str, value: i64) {
        self.fields.insert(key.to_string(), Value::from(value));
    }

    fn add_string(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), Value::from(value));
    }

    fn add_object(&mut self, key: &str, value: &dyn ObjectMarshaler) -> Result<(), EncodeError> {
        let nested = marshal_to_value(value)?;
        self.fields.insert(key.to_string(), nested);
        Ok(())
    }

    fn add_reflected(&mut self, key: &str, value: &Value) -> Result<(), EncodeError> {
        self.fields.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Encode a marshaler into a standalone JSON object
///
/// # Errors
///
/// Returns the error reported by the marshaler.
pub fn marshal_to_value(value: &dyn ObjectMarshaler) -> Result<Value, EncodeError> {
    let mut enc = JsonObjectEncoder::new();
    value.marshal_log_object(&mut enc)?;
    Ok(enc.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i64,
        y: i64,
    }

    impl ObjectMarshaler for Point {
        fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), EncodeError> {
            enc.add_int("x", self.x);
            enc.add_int("y", self.y);
            Ok(())
        }
    }

    #[test]
    fn test_nested_objects_become_json_objects() {
        let mut enc = JsonObjectEncoder::new();
        enc.add_string("name", "origin");
        let added = enc.add_object("at", &Point { x: 1, y: -2 });
        assert!(added.is_ok());

        let value = enc.into_value();
        assert_eq!(value["name"], "origin");
        assert_eq!(value["at"]["x"], 1);
        assert_eq!(value["at"]["y"], -2);
    }
}
