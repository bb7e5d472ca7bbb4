//! Error constructors
//!
//! Every constructor either inherits the stack of a structured cause or
//! captures a fresh one whose first frame is the constructor's caller.

use super::types::{BoxError, ChainedError};
use brick_common::{Code, Detail, Status};
use brick_stack::{take_stack, StackList, STACKTRACE_MAX};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

impl ChainedError {
    /// Create an error from a status, optionally wrapping a cause
    ///
    /// If `cause` is itself a `ChainedError` its stack is inherited. Helpers
    /// that call this on behalf of their own caller should use
    /// [`ChainedError::new_with_skip`] instead, or the trace starts at them.
    #[inline(never)]
    #[must_use]
    pub fn new(status: Status, cause: Option<BoxError>) -> Self {
        let stack = match inherited_stack(cause.as_deref()) {
            Some(stack) => stack,
            None => take_stack(1, STACKTRACE_MAX),
        };
        Self::from_parts(cause, status, stack)
    }

    /// Create an error wrapping `cause`
    #[inline(never)]
    #[must_use]
    pub fn wrap<E: Into<BoxError>>(status: Status, cause: E) -> Self {
        Self::new_with_skip(Some(cause.into()), status, 1)
    }

    /// Like [`ChainedError::new`], skipping `skip` extra caller frames when a
    /// fresh stack is captured
    #[inline(never)]
    #[must_use]
    pub fn new_with_skip(cause: Option<BoxError>, status: Status, skip: usize) -> Self {
        let stack = match inherited_stack(cause.as_deref()) {
            Some(stack) => stack,
            None => take_stack(skip + 1, STACKTRACE_MAX),
        };
        Self::from_parts(cause, status, stack)
    }
}

fn inherited_stack(cause: Option<&(dyn Error + Send + Sync + 'static)>) -> Option<StackList> {
    cause?
        .downcast_ref::<ChainedError>()
        .map(|orig| orig.stack().clone())
}

macro_rules! status_constructors {
    ($($(#[$doc:meta])* $name:ident, $name_fmt:ident => $code:expr;)*) => {
        $(
            $(#[$doc])*
            #[inline(never)]
            #[must_use]
            pub fn $name(
                cause: Option<BoxError>,
                reason: impl Into<Cow<'static, str>>,
                detail: Option<Detail>,
            ) -> ChainedError {
                ChainedError::new_with_skip(cause, Status::new($code, reason, detail), 1)
            }

            $(#[$doc])*
            ///
            /// Formatted variant; the reason is rendered from `args`.
            #[inline(never)]
            #[must_use]
            pub fn $name_fmt(cause: Option<BoxError>, args: fmt::Arguments<'_>) -> ChainedError {
                ChainedError::new_with_skip(cause, Status::new($code, fmt::format(args), None), 1)
            }
        )*
    };
}

status_constructors! {
    /// Create an invalid argument error
    invalid_argument, invalid_argument_fmt => Code::INVALID_ARGUMENT;
    /// Create a not found error
    not_found, not_found_fmt => Code::NOT_FOUND;
    /// Create a request timeout error
    request_timeout, request_timeout_fmt => Code::REQUEST_TIMEOUT;
    /// Create a gateway timeout error
    gateway_timeout, gateway_timeout_fmt => Code::GATEWAY_TIMEOUT;
    /// Create a client closed error
    client_closed, client_closed_fmt => Code::CLIENT_CLOSED;
    /// Create an already exists error
    already_exists, already_exists_fmt => Code::ALREADY_EXISTS;
    /// Create an internal error
    internal_error, internal_error_fmt => Code::INTERNAL_ERROR;
}
