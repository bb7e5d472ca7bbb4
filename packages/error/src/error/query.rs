//! Code membership over error chains

use super::types::ChainedError;
use brick_common::Code;
use std::error::Error as StdError;

/// Borrow a value as a `'static` trait object error
///
/// Implemented for every concrete error type and for the common boxed trait
/// objects, so [`has_code`] accepts `&ChainedError`, `&io::Error` and
/// `&*Box<dyn Error + Send + Sync>` alike.
pub trait AsDynError {
    /// The value as `dyn Error`
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + 'static> AsDynError for E {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// Nearest [`ChainedError`] reachable from `err` through `source()`, `err` included
#[must_use]
pub fn find_chained<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ChainedError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(chained) = e.downcast_ref::<ChainedError>() {
            return Some(chained);
        }
        current = e.source();
    }
    None
}

/// Whether the outermost structured link of `err` carries `code`
///
/// Only the first [`ChainedError`] found while walking the chain is checked;
/// deeper links are never consulted. `None` and chains without a structured
/// link yield `false`.
#[must_use]
pub fn has_code<E: AsDynError + ?Sized>(err: Option<&E>, code: Code) -> bool {
    let Some(err) = err else {
        return false;
    };
    find_chained(err.as_dyn_error()).is_some_and(|chained| chained.has_code(code))
}
