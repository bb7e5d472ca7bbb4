//! Stack walking

use crate::frame::FrameToken;
use crate::list::StackList;

/// Upper bound on the number of frames recorded by [`take_stack`]
pub const STACKTRACE_MAX: usize = 32;

// Frames inspected when the anchor frame cannot be found by address.
const ANCHOR_SCAN_LIMIT: usize = 16;

/// Capture the current call stack
///
/// With `skip == 0` the first recorded frame is the function that called
/// `take_stack`; each additional `skip` drops one more caller frame. At most
/// `max_depth` frames are kept, never more than [`STACKTRACE_MAX`], innermost
/// first.
#[inline(never)]
#[must_use]
pub fn take_stack(skip: usize, max_depth: usize) -> StackList {
    let depth = max_depth.min(STACKTRACE_MAX);
    if depth == 0 {
        return StackList::empty();
    }

    let anchor = take_stack as fn(usize, usize) -> StackList as usize;
    let mut raw: Vec<FrameToken> = Vec::with_capacity(ANCHOR_SCAN_LIMIT + skip + depth);
    let mut anchor_at: Option<usize> = None;

    backtrace::trace(|frame| {
        if anchor_at.is_none() && frame.symbol_address() as usize == anchor {
            anchor_at = Some(raw.len());
        }
        raw.push(FrameToken::new(frame.ip() as usize));
        match anchor_at {
            Some(at) => raw.len() < at + 1 + skip + depth,
            None => raw.len() < ANCHOR_SCAN_LIMIT + skip + depth,
        }
    });

    let anchor_at = anchor_at.or_else(|| find_anchor_by_name(&raw));
    let start = anchor_at.map_or(0, |at| at + 1) + skip;
    let tokens: Vec<FrameToken> = raw.into_iter().skip(start).take(depth).collect();
    StackList::from_tokens(tokens)
}

// Slow path for unwinders that cannot report a frame's symbol address.
fn find_anchor_by_name(raw: &[FrameToken]) -> Option<usize> {
    let found = raw.iter().take(ANCHOR_SCAN_LIMIT).position(|token| {
        token
            .resolve()
            .iter()
            .any(|frame| frame.function.ends_with("capture::take_stack"))
    });
    if found.is_none() {
        tracing::debug!("stack anchor not found, keeping frames from the unwinder");
    }
    found
}
