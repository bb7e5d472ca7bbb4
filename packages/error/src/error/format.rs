//! Nested JSON summaries of error chains

use super::types::ChainedError;
use crate::config::FormatConfig;
use brick_common::Code;
use serde::Serialize;
use serde_json::Value;

/// One link of a summarized chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Status code of the link
    pub code: Code,
    /// Status reason of the link
    pub reason: String,
    /// Status detail, `null` when absent
    pub detail: Option<Value>,
    /// Summary of the cause, `null` when there is none
    pub next: Option<Next>,
}

/// What follows a link in a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Next {
    /// The cause is structured and summarized recursively
    Chained(Box<Summary>),
    /// The cause is opaque; its message ends the chain
    Message(String),
}

/// JSON serializer for summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCodec {
    pretty: bool,
}

impl SummaryCodec {
    /// Single-line output
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Codec matching a format configuration
    #[must_use]
    pub fn from_config(config: &FormatConfig) -> Self {
        Self {
            pretty: config.pretty,
        }
    }

    /// Serialize a summary
    ///
    /// # Errors
    ///
    /// Returns an error if a detail value cannot be written as JSON.
    pub fn encode(&self, summary: &Summary) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(summary)
        } else {
            serde_json::to_string(summary)
        }
    }
}

impl ChainedError {
    /// Summarize this link and everything it wraps
    #[must_use]
    pub fn summary(&self) -> Summary {
        let status = self.status();
        let next = self.cause().map(|cause| match cause.downcast_ref::<ChainedError>() {
            Some(chained) => Next::Chained(Box::new(chained.summary())),
            None => Next::Message(cause.to_string()),
        });
        Summary {
            code: status.code(),
            reason: status.reason().to_string(),
            detail: status.detail().map(brick_common::Detail::to_json),
            next,
        }
    }

    /// Render the chain with `codec`, empty if encoding fails
    #[must_use]
    pub fn to_json_with(&self, codec: &SummaryCodec) -> String {
        codec.encode(&self.summary()).unwrap_or_default()
    }
}
