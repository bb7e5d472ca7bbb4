//! Bounded call-stack capture
//!
//! [`take_stack`] records raw frame tokens only; turning them into
//! function/file/line triples is deferred until a caller renders the trace.

#![forbid(unsafe_code)]

pub mod capture;
pub mod frame;
pub mod list;

pub use capture::{take_stack, STACKTRACE_MAX};
pub use frame::{Frame, FrameToken};
pub use list::StackList;
