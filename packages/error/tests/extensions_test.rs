//! Tests for `Result` wrapping and the error macros

use brick_error::{bail, ensure, err, has_code, ChainedError, Code, ResultExt, StackList, Status};
use std::io;

fn read_config() -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "app.toml"))
}

#[inline(never)]
fn find_user(id: u32) -> Result<String, ChainedError> {
    if id == 0 {
        bail!(invalid_argument, "user id must be positive");
    }
    ensure!(id < 100, not_found, "user {id} not found");
    Ok(format!("user-{id}"))
}

fn first_function(err: &ChainedError) -> String {
    err.stack()
        .frames()
        .first()
        .map(|f| f.function.clone())
        .unwrap_or_default()
}

#[test]
fn test_or_not_found_wraps_opaque_error() {
    let err = read_config().or_not_found("configuration missing").unwrap_err();

    assert_eq!(err.status().code(), Code::NOT_FOUND);
    assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("app.toml"));
    let first = first_function(&err);
    assert!(first.contains("test_or_not_found_wraps_opaque_error"), "first frame: {first}");
}

#[test]
fn test_wrap_status_keeps_structured_stack() {
    let origin = find_user(500).unwrap_err();
    let err = Err::<(), _>(origin.clone())
        .wrap_status(Status::new(Code::INTERNAL_ERROR, "lookup failed", None))
        .unwrap_err();

    assert!(StackList::ptr_eq(err.stack(), origin.stack()));
    assert!(has_code(Some(&err), Code::INTERNAL_ERROR));
}

#[test]
fn test_ok_values_pass_through() {
    let value: Result<u8, io::Error> = Ok(3);
    assert_eq!(value.or_internal("unused").unwrap(), 3);

    let value: Result<u8, io::Error> = Ok(4);
    assert_eq!(value.or_invalid_argument("unused").unwrap(), 4);
}

#[test]
fn test_string_errors_are_accepted() {
    let result: Result<(), String> = Err("bad header".to_string());
    let err = result.or_invalid_argument("malformed request").unwrap_err();
    assert_eq!(err.status().code(), Code::INVALID_ARGUMENT);
    assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("bad header"));
}

#[test]
fn test_bail_and_ensure_record_the_enclosing_function() {
    let invalid = find_user(0).unwrap_err();
    assert_eq!(invalid.status().code(), Code::INVALID_ARGUMENT);
    assert!(first_function(&invalid).ends_with("find_user"));

    let missing = find_user(250).unwrap_err();
    assert_eq!(missing.status().reason(), "user 250 not found");
    assert!(first_function(&missing).ends_with("find_user"));

    assert_eq!(find_user(7).unwrap(), "user-7");
}

#[test]
fn test_err_macro_with_cause() {
    let io_err = io::Error::new(io::ErrorKind::TimedOut, "socket timeout");
    let e = err!(gateway_timeout, cause = io_err, "payment gateway after {}ms", 3000);

    assert_eq!(e.status().code(), Code::GATEWAY_TIMEOUT);
    assert_eq!(e.status().reason(), "payment gateway after 3000ms");
    assert_eq!(e.cause().map(|c| c.to_string()).as_deref(), Some("socket timeout"));
}
