//! Absent-safe accessors and `Result` wrapping

use super::format::SummaryCodec;
use super::types::{BoxError, ChainedError};
use brick_common::{Code, Status};
use brick_stack::StackList;
use std::borrow::Cow;
use std::error::Error as StdError;

/// Accessors on a possibly absent [`ChainedError`]
///
/// An absent error answers with empty values: an empty string, the unknown
/// sentinel status, an empty stack and no cause.
pub trait OptionExt {
    /// Rendered JSON chain, `""` when absent
    fn error_string(&self) -> String;

    /// Status, [`Status::unknown`] when absent
    fn status(&self) -> &Status;

    /// Stack, empty when absent
    fn stack(&self) -> StackList;

    /// Wrapped cause, `None` when absent
    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)>;

    /// Wrapped cause as a plain `dyn Error`, `None` when absent
    fn source_error(&self) -> Option<&(dyn StdError + 'static)>;
}

impl OptionExt for Option<&ChainedError> {
    fn error_string(&self) -> String {
        self.map_or_else(String::new, |e| e.to_json_with(&SummaryCodec::compact()))
    }

    fn status(&self) -> &Status {
        match self {
            Some(e) => e.status(),
            None => Status::unknown(),
        }
    }

    fn stack(&self) -> StackList {
        self.map_or_else(StackList::empty, |e| e.stack().clone())
    }

    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.and_then(ChainedError::cause)
    }

    fn source_error(&self) -> Option<&(dyn StdError + 'static)> {
        self.and_then(|e| e.source())
    }
}

impl OptionExt for Option<ChainedError> {
    fn error_string(&self) -> String {
        self.as_ref().error_string()
    }

    fn status(&self) -> &Status {
        match self {
            Some(e) => e.status(),
            None => Status::unknown(),
        }
    }

    fn stack(&self) -> StackList {
        self.as_ref().stack()
    }

    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.as_ref().and_then(ChainedError::cause)
    }

    fn source_error(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_ref().and_then(|e| e.source())
    }
}

/// Wrap the error of a `Result` into a [`ChainedError`]
///
/// A structured error keeps its stack; any other error gets a stack whose
/// first frame is the caller of these methods.
pub trait ResultExt<T> {
    /// Wrap the error with `status`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_status(self, status: Status) -> Result<T, ChainedError>;

    /// Wrap the error as not found
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn or_not_found(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError>;

    /// Wrap the error as invalid argument
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn or_invalid_argument(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError>;

    /// Wrap the error as internal
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn or_internal(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[inline(never)]
    fn wrap_status(self, status: Status) -> Result<T, ChainedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::new_with_skip(Some(e.into()), status, 1)),
        }
    }

    #[inline(never)]
    fn or_not_found(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::new_with_skip(
                Some(e.into()),
                Status::new(Code::NOT_FOUND, reason, None),
                1,
            )),
        }
    }

    #[inline(never)]
    fn or_invalid_argument(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::new_with_skip(
                Some(e.into()),
                Status::new(Code::INVALID_ARGUMENT, reason, None),
                1,
            )),
        }
    }

    #[inline(never)]
    fn or_internal(self, reason: impl Into<Cow<'static, str>>) -> Result<T, ChainedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ChainedError::new_with_skip(
                Some(e.into()),
                Status::new(Code::INTERNAL_ERROR, reason, None),
                1,
            )),
        }
    }
}
