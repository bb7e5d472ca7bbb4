//! Status values attached to errors

use crate::code::Code;
use crate::encoder::{marshal_to_value, ObjectMarshaler};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

static UNKNOWN: Lazy<Status> = Lazy::new(|| Status::new(Code::UNKNOWN, "unknown", None));

/// Optional structured payload carried by a [`Status`]
#[derive(Debug, Clone)]
pub enum Detail {
    /// Opaque value reflected as JSON
    Reflected(Value),
    /// Value that can write itself into a structured encoder
    Object(Arc<dyn ObjectMarshaler>),
}

impl Detail {
    /// Reflect any serializable value
    ///
    /// A value that fails to serialize is kept as `null`.
    pub fn reflect<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Self::Reflected(value),
            Err(e) => {
                tracing::warn!("Status detail could not be reflected: {e}");
                Self::Reflected(Value::Null)
            }
        }
    }

    /// Wrap a structured marshaler
    pub fn object<M: ObjectMarshaler + 'static>(value: M) -> Self {
        Self::Object(Arc::new(value))
    }

    /// The marshaler, if this detail exposes one
    #[must_use]
    pub fn as_object(&self) -> Option<&dyn ObjectMarshaler> {
        match self {
            Self::Object(obj) => Some(obj.as_ref()),
            Self::Reflected(_) => None,
        }
    }

    /// JSON form of the detail
    ///
    /// Marshalers are encoded through a fresh JSON encoder; one that fails
    /// yields `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Reflected(value) => value.clone(),
            Self::Object(obj) => marshal_to_value(obj.as_ref()).unwrap_or(Value::Null),
        }
    }
}

impl From<Value> for Detail {
    fn from(value: Value) -> Self {
        Self::Reflected(value)
    }
}

impl Serialize for Detail {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Immutable code, reason and optional detail
#[derive(Debug, Clone)]
pub struct Status {
    code: Code,
    reason: Cow<'static, str>,
    detail: Option<Detail>,
}

impl Status {
    /// Create a status
    pub fn new(code: Code, reason: impl Into<Cow<'static, str>>, detail: Option<Detail>) -> Self {
        Self {
            code,
            reason: reason.into(),
            detail,
        }
    }

    /// The reserved sentinel reported where no status exists
    #[must_use]
    pub fn unknown() -> &'static Status {
        &UNKNOWN
    }

    /// Machine-readable code
    #[must_use]
    pub fn code(&self) -> Code {
        self.code
    }

    /// Human-readable reason
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Structured detail, if any
    #[must_use]
    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.reason)
    }
}
