//! Core error type

use brick_common::{Code, Status};
use brick_stack::StackList;
use std::sync::Arc;

/// Boxed error accepted as a cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error carrying a status, an optional cause and the stack of its origin
///
/// Immutable once built; clones share the same allocation.
#[derive(Debug, Clone)]
pub struct ChainedError {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// Wrapped error, structured or opaque
    pub cause: Option<BoxError>,
    /// Business status of this link
    pub status: Status,
    /// Stack captured at the first structured link of the chain
    pub stack: StackList,
}

impl ChainedError {
    pub(super) fn from_parts(cause: Option<BoxError>, status: Status, stack: StackList) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                cause,
                status,
                stack,
            }),
        }
    }

    /// Status of this link
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.inner.status
    }

    /// Captured or inherited stack
    #[must_use]
    pub fn stack(&self) -> &StackList {
        &self.inner.stack
    }

    /// The wrapped error, if any
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.inner.cause.as_deref()
    }

    /// Whether this link's code equals `code`
    #[must_use]
    pub fn has_code(&self, code: Code) -> bool {
        self.inner.status.code().to_int() == code.to_int()
    }
}

/// Result type alias using [`ChainedError`]
pub type Result<T> = std::result::Result<T, ChainedError>;
