//! Rendering and logging configuration

use crate::error::SummaryCodec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a [`FormatConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON
    #[error("Invalid format configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Severity used when reporting errors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Report at `ERROR`
    #[default]
    Error,
    /// Report at `WARN`
    Warn,
    /// Report at `INFO`
    Info,
}

/// How error chains are rendered and logged
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Indent rendered JSON
    #[serde(default)]
    pub pretty: bool,
    /// Attach the resolved stack when logging
    #[serde(default = "default_include_stack")]
    pub include_stack: bool,
    /// Maximum number of rendered frames (None renders every captured frame)
    #[serde(default)]
    pub stack_render_depth: Option<usize>,
    /// Severity of logged errors
    #[serde(default)]
    pub level: LogLevel,
}

fn default_include_stack() -> bool {
    true
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            include_stack: default_include_stack(),
            stack_render_depth: None,
            level: LogLevel::default(),
        }
    }
}

impl FormatConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializer matching this configuration
    #[must_use]
    pub fn codec(&self) -> SummaryCodec {
        SummaryCodec::from_config(self)
    }
}
