//! Tests for structured log encoding of error chains

use brick_common::JsonObjectEncoder;
use brick_error::{
    constructors, ChainedError, Code, Detail, EncodeError, ObjectEncoder, ObjectMarshaler, Status,
};
use serde_json::{json, Value};
use std::io;

/// Encoder that records which operation wrote each field
#[derive(Default)]
struct RecordingEncoder {
    calls: Vec<(String, String)>,
}

impl ObjectEncoder for RecordingEncoder {
    fn add_int(&mut self, key: &str, value: i64) {
        self.calls.push(("int".to_string(), format!("{key}={value}")));
    }

    fn add_string(&mut self, key: &str, value: &str) {
        self.calls.push(("string".to_string(), format!("{key}={value}")));
    }

    fn add_object(&mut self, key: &str, value: &dyn ObjectMarshaler) -> Result<(), EncodeError> {
        self.calls.push(("object".to_string(), key.to_string()));
        value.marshal_log_object(self)
    }

    fn add_reflected(&mut self, key: &str, value: &Value) -> Result<(), EncodeError> {
        self.calls.push(("reflected".to_string(), format!("{key}={value}")));
        Ok(())
    }
}

struct Failing;

impl ObjectMarshaler for Failing {
    fn marshal_log_object(&self, _enc: &mut dyn ObjectEncoder) -> Result<(), EncodeError> {
        Err(EncodeError::Marshal("refused".to_string()))
    }
}

struct Shard(i64);

impl ObjectMarshaler for Shard {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), EncodeError> {
        enc.add_int("shard", self.0);
        Ok(())
    }
}

fn kinds(enc: &RecordingEncoder) -> Vec<&str> {
    enc.calls.iter().map(|(kind, _)| kind.as_str()).collect()
}

#[test]
fn test_fields_without_detail_or_cause() {
    let err = constructors::not_found(None, "no such key", None);
    let mut enc = RecordingEncoder::default();
    err.marshal_log_object(&mut enc).unwrap();

    assert_eq!(kinds(&enc), vec!["int", "string"]);
    assert_eq!(enc.calls[0].1, "code=404");
    assert_eq!(enc.calls[1].1, "reason=no such key");
}

#[test]
fn test_detail_uses_object_when_marshaler() {
    let err = constructors::internal_error(None, "shard down", Some(Detail::object(Shard(3))));
    let mut enc = RecordingEncoder::default();
    err.marshal_log_object(&mut enc).unwrap();

    assert_eq!(kinds(&enc), vec!["int", "string", "object", "int"]);
    assert_eq!(enc.calls[3].1, "shard=3");
}

#[test]
fn test_detail_uses_reflected_otherwise() {
    let err = constructors::internal_error(None, "shard down", Some(Detail::reflect(&[1, 2])));
    let mut enc = RecordingEncoder::default();
    err.marshal_log_object(&mut enc).unwrap();

    assert_eq!(kinds(&enc), vec!["int", "string", "reflected"]);
    assert_eq!(enc.calls[2].1, "detail=[1,2]");
}

#[test]
fn test_next_nests_chained_and_stringifies_opaque() {
    let io_err = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
    let inner = constructors::request_timeout(Some(io_err.into()), "fetch failed", None);
    let outer = ChainedError::wrap(Status::new(Code::GATEWAY_TIMEOUT, "upstream", None), inner);

    let mut enc = JsonObjectEncoder::new();
    outer.marshal_log_object(&mut enc).unwrap();
    assert_eq!(
        enc.into_value(),
        json!({
            "code": 504,
            "reason": "upstream",
            "next": {"code": 408, "reason": "fetch failed", "next": "read timed out"}
        })
    );
}

#[test]
fn test_failing_detail_is_reported() {
    let err = constructors::internal_error(None, "x", Some(Detail::object(Failing)));
    let mut enc = JsonObjectEncoder::new();
    let result = err.marshal_log_object(&mut enc);
    assert!(matches!(result, Err(EncodeError::Marshal(_))));

    // Rendering still succeeds; the detail degrades to null.
    let parsed: Value = serde_json::from_str(&err.to_string()).unwrap();
    assert_eq!(parsed["detail"], Value::Null);
}
