//! Chained status errors
//!
//! [`ChainedError`] attaches a [`Status`] and a captured call stack to a
//! failure and may wrap another error as its cause. Wrapping a
//! `ChainedError` inherits its stack, so the trace always points at the
//! place the failure was first reported.
//!
//! ```
//! use brick_error::{constructors, has_code, Code};
//!
//! let missing = constructors::not_found(None, "user 42 not found", None);
//! let err = constructors::internal_error(Some(missing.clone().into()), "load profile", None);
//!
//! assert!(has_code(Some(&err), Code::INTERNAL_ERROR));
//! assert!(brick_error::StackList::ptr_eq(err.stack(), missing.stack()));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigError, FormatConfig, LogLevel};
pub use error::*;

pub use brick_common::{Code, Detail, EncodeError, ObjectEncoder, ObjectMarshaler, Status};
pub use brick_stack::{Frame, StackList};
