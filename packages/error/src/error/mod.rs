//! Chained status errors
//!
//! - [`types`]: the error value and its accessors
//! - [`constructors`]: construction with stack capture or inheritance
//! - [`format`]: nested JSON summaries
//! - [`marshal`]: structured log encoding
//! - [`query`]: code membership over mixed error chains
//! - [`extensions`]: absent-safe accessors and `Result` wrapping

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod format;
pub mod macros;
pub mod marshal;
pub mod query;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use format::{Next, Summary, SummaryCodec};
pub use query::{find_chained, has_code, AsDynError};
pub use types::{BoxError, ChainedError, Result};
