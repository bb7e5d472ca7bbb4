//! Machine-readable status codes
//!
//! A [`Code`] is an open newtype over an integer. The constants below are the
//! well-known codes used by the constructor family in `brick_error`; callers
//! are free to mint their own with [`Code::new`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, comparable status code with a canonical integer form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(i32);

impl Code {
    /// Code carried by the unknown sentinel status
    pub const UNKNOWN: Code = Code(0);
    /// The caller supplied an argument that failed validation
    pub const INVALID_ARGUMENT: Code = Code(400);
    /// The requested entity does not exist
    pub const NOT_FOUND: Code = Code(404);
    /// The request did not complete in time
    pub const REQUEST_TIMEOUT: Code = Code(408);
    /// The entity the caller tried to create already exists
    pub const ALREADY_EXISTS: Code = Code(409);
    /// The client went away before the request finished
    pub const CLIENT_CLOSED: Code = Code(499);
    /// Invariant broken inside the service
    pub const INTERNAL_ERROR: Code = Code(500);
    /// An upstream dependency did not answer in time
    pub const GATEWAY_TIMEOUT: Code = Code(504);

    /// Create a code from its integer form
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Canonical integer form, used for comparison and the `code` log field
    #[must_use]
    pub const fn to_int(self) -> i32 {
        self.0
    }

    /// Label of a well-known code, `None` for caller-defined codes
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Unknown"),
            400 => Some("InvalidArgument"),
            404 => Some("NotFound"),
            408 => Some("RequestTimeout"),
            409 => Some("AlreadyExists"),
            499 => Some("ClientClosed"),
            500 => Some("InternalError"),
            504 => Some("GatewayTimeout"),
            _ => None,
        }
    }

    /// Whether this is the unknown code
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_known_codes() {
        assert_eq!(Code::NOT_FOUND.to_string(), "NotFound(404)");
        assert_eq!(Code::new(7001).to_string(), "7001");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Code::GATEWAY_TIMEOUT).unwrap_or_default();
        assert_eq!(json, "504");
    }
}
