//! Shared building blocks for brick crates
//!
//! This crate provides:
//! - [`Code`]: open, comparable status codes with a canonical integer form
//! - [`Status`] and [`Detail`]: immutable code/reason/detail values
//! - [`ObjectEncoder`] and [`ObjectMarshaler`]: the structured log encoder capability
//! - [`LoggingTransformer`]: `env_logger` bootstrap

#![forbid(unsafe_code)]

pub mod code;
pub mod encoder;
pub mod logging;
pub mod status;

pub use code::Code;
pub use encoder::{marshal_to_value, EncodeError, JsonObjectEncoder, ObjectEncoder, ObjectMarshaler};
pub use logging::LoggingTransformer;
pub use status::{Detail, Status};
