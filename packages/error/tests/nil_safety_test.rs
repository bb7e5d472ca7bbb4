//! Tests for accessors on absent errors

use brick_error::{constructors, ChainedError, Code, OptionExt, Status};
use std::io;

#[test]
fn test_absent_error_returns_empty_values() {
    let absent: Option<&ChainedError> = None;

    assert_eq!(absent.error_string(), "");
    assert_eq!(absent.status().code(), Code::UNKNOWN);
    assert!(std::ptr::eq(absent.status(), Status::unknown()));
    assert!(absent.stack().is_empty());
    assert!(absent.cause().is_none());
    assert!(absent.source_error().is_none());
}

#[test]
fn test_owned_absent_error_returns_empty_values() {
    let absent: Option<ChainedError> = None;

    assert_eq!(absent.error_string(), "");
    assert_eq!(absent.status().reason(), "unknown");
    assert!(absent.stack().is_empty());
    assert!(absent.cause().is_none());
    assert!(absent.source_error().is_none());
}

#[test]
fn test_present_error_delegates() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no file");
    let err = constructors::not_found(Some(io_err.into()), "missing", None);
    let present = Some(&err);

    assert_eq!(present.error_string(), err.to_string());
    assert_eq!(present.status().code(), Code::NOT_FOUND);
    assert!(!present.stack().is_empty());
    assert_eq!(present.cause().map(|c| c.to_string()).as_deref(), Some("no file"));
    assert_eq!(present.source_error().map(|c| c.to_string()).as_deref(), Some("no file"));
}

#[test]
fn test_unknown_sentinel_has_no_detail() {
    let unknown = Status::unknown();
    assert!(unknown.code().is_unknown());
    assert!(unknown.detail().is_none());
}
