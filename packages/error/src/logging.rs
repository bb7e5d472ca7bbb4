//! Reporting errors through `tracing`
//!
//! The chain is encoded with [`ObjectMarshaler`] into a JSON object, so the
//! `code`/`reason` of every link survives as structure in the `chain` field.

use crate::config::{FormatConfig, LogLevel};
use crate::error::ChainedError;
use brick_common::marshal_to_value;
use brick_stack::StackList;

/// Render `stack` one frame per entry, at most `depth` frames
#[must_use]
pub fn render_stack(stack: &StackList, depth: Option<usize>) -> String {
    let frames = match depth {
        Some(depth) => stack.frames_limit(depth),
        None => stack.frames(),
    };
    frames
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit one event describing `err`
pub fn log_error(err: &ChainedError, config: &FormatConfig) {
    let chain = match marshal_to_value(err) {
        Ok(value) if config.pretty => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        Ok(value) => value.to_string(),
        Err(e) => {
            tracing::warn!("Error chain could not be encoded: {e}");
            err.to_json_with(&config.codec())
        }
    };
    let stack = if config.include_stack {
        render_stack(err.stack(), config.stack_render_depth)
    } else {
        String::new()
    };
    let code = err.status().code().to_int();
    let reason = err.status().reason();

    match config.level {
        LogLevel::Error => {
            tracing::error!(code, reason, chain = %chain, stack = %stack, "{reason}");
        }
        LogLevel::Warn => {
            tracing::warn!(code, reason, chain = %chain, stack = %stack, "{reason}");
        }
        LogLevel::Info => {
            tracing::info!(code, reason, chain = %chain, stack = %stack, "{reason}");
        }
    }
}

/// Log the error of `result`, if any, and pass it through
///
/// # Errors
///
/// Returns `result` unchanged.
pub fn log_result<T>(
    result: Result<T, ChainedError>,
    config: &FormatConfig,
) -> Result<T, ChainedError> {
    if let Err(e) = &result {
        log_error(e, config);
    }
    result
}
