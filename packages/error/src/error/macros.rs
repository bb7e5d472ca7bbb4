//! Macros for building errors at the call site

/// Build an error with one of the [`constructors`](crate::error::constructors)
///
/// The reason is formatted like `format!`; an optional `cause = expr` wraps
/// another error.
///
/// ```
/// use brick_error::{err, Code};
///
/// let id = 7;
/// let e = err!(not_found, "user {id} not found");
/// assert_eq!(e.status().code(), Code::NOT_FOUND);
/// assert_eq!(e.status().reason(), "user 7 not found");
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident, cause = $cause:expr, $($arg:tt)+) => {
        $crate::error::constructors::$kind(
            ::std::option::Option::Some(::std::convert::Into::into($cause)),
            ::std::format!($($arg)+),
            ::std::option::Option::None,
        )
    };
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::constructors::$kind(
            ::std::option::Option::None,
            ::std::format!($($arg)+),
            ::std::option::Option::None,
        )
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err(::std::convert::Into::into($crate::err!($($arg)+)))
    };
}

/// Return early with an error built by [`err!`] unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
