//! Captured stacks

use crate::frame::{Frame, FrameToken};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Immutable, cheaply shared sequence of captured frame tokens
///
/// Clones share the same allocation; [`StackList::ptr_eq`] tells whether two
/// lists are the same capture rather than equal ones.
#[derive(Debug, Clone)]
pub struct StackList {
    tokens: Arc<[FrameToken]>,
}

impl StackList {
    /// A list with no frames
    #[must_use]
    pub fn empty() -> Self {
        Self::from_tokens(Vec::new())
    }

    pub(crate) fn from_tokens(tokens: Vec<FrameToken>) -> Self {
        Self {
            tokens: Arc::from(tokens),
        }
    }

    /// Number of captured tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Captured tokens, innermost first
    pub fn iter(&self) -> impl Iterator<Item = FrameToken> + '_ {
        self.tokens.iter().copied()
    }

    /// Whether both lists share the same capture
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.tokens, &b.tokens)
    }

    /// Resolve every captured token
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.iter().flat_map(FrameToken::resolve).collect()
    }

    /// Resolve frames until `depth` of them have been produced
    ///
    /// The limit counts rendered frames, after inlined symbols are expanded,
    /// so it may stop part-way through a token.
    #[must_use]
    pub fn frames_limit(&self, depth: usize) -> Vec<Frame> {
        self.iter().flat_map(FrameToken::resolve).take(depth).collect()
    }
}

impl Default for StackList {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for StackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

impl Serialize for StackList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.frames())
    }
}
