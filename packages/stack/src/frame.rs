//! Frame tokens and their on-demand resolution

use serde::Serialize;
use std::ffi::c_void;
use std::fmt;

/// Instruction pointer recorded for one captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(usize);

impl FrameToken {
    pub(crate) fn new(ip: usize) -> Self {
        Self(ip)
    }

    /// Raw instruction pointer
    #[must_use]
    pub fn ip(self) -> usize {
        self.0
    }

    /// Resolve this token into source frames
    ///
    /// One token may yield several frames when code was inlined into it, the
    /// innermost first. Symbols in synthetic files are dropped; symbols with
    /// a name but no file information are kept with an empty file.
    #[must_use]
    pub fn resolve(self) -> Vec<Frame> {
        let mut frames = Vec::new();
        backtrace::resolve(self.0 as *mut c_void, |symbol| {
            let frame = Frame::from_symbol(
                symbol.name().map(|n| format!("{n:#}")),
                symbol.filename().map(|p| p.display().to_string()),
                symbol.lineno(),
            );
            frames.extend(frame);
        });
        frames
    }
}

/// Resolved source location of a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Demangled function path without the hash suffix
    pub function: String,
    /// Source file, empty when the binary carries no debug info
    pub file: String,
    /// Line within `file`, 0 when unknown
    pub line: u32,
}

impl Frame {
    // Builds a frame from raw symbol data. Marker files and symbols with
    // neither a name nor a file yield nothing.
    pub(crate) fn from_symbol(
        function: Option<String>,
        file: Option<String>,
        line: Option<u32>,
    ) -> Option<Self> {
        let file = file.unwrap_or_default();
        if is_synthetic_file(&file) {
            return None;
        }
        let function = function.unwrap_or_default();
        if function.is_empty() && file.is_empty() {
            return None;
        }
        let line = if file.is_empty() { 0 } else { line.unwrap_or(0) };
        Some(Self {
            function,
            file,
            line,
        })
    }

    /// Whether source location information was available
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.file.is_empty()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_location() {
            write!(f, "{}\n\t{}:{}", self.function, self.file, self.line)
        } else {
            write!(f, "{}\n\t(unknown location)", self.function)
        }
    }
}

// Generated code reports marker names such as `<autogenerated>` instead of a path.
fn is_synthetic_file(file: &str) -> bool {
    file.starts_with('<') && file.ends_with('>')
}
