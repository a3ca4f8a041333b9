//! Harness-facing entry points.
//!
//! Each function takes an optional queue, the way a test harness drives the
//! structure, and reports the outcome as a flag rather than a `Result`. An
//! absent queue is [`QueueError::InvalidQueue`]: the call fails (or is a
//! no-op for `reverse`/`sort`) and nothing is touched.
//!
//! ```
//! use str_queue::ops;
//!
//! let mut q = ops::create().unwrap();
//! assert!(ops::insert_tail(Some(&mut q), "banana"));
//! assert!(ops::insert_tail(Some(&mut q), "apple"));
//! ops::sort(Some(&mut q));
//!
//! let mut buf = [0u8; 16];
//! assert!(ops::remove_head(Some(&mut q), Some(&mut buf)));
//! assert_eq!(&buf[..6], b"apple\0");
//! assert_eq!(ops::size(Some(&q)), 1);
//! assert!(!ops::insert_head(None, "lost"));
//! ops::destroy(Some(q));
//! ```

use crate::error::{QueueError, Result};
use crate::queue::StrQueue;

/// New empty queue.
pub fn create() -> Result<StrQueue> {
    StrQueue::try_with_capacity(0)
}

/// Releases the queue and everything it owns. `None` is a no-op.
pub fn destroy(queue: Option<StrQueue>) {
    drop(queue);
}

fn require<'a>(queue: Option<&'a mut StrQueue>, op: &'static str) -> Result<&'a mut StrQueue> {
    queue.ok_or_else(|| {
        tracing::debug!(op, "called without a queue");
        QueueError::InvalidQueue
    })
}

/// Inserts a copy of `s` at the head. `false` on absent queue or
/// allocation failure.
pub fn insert_head(queue: Option<&mut StrQueue>, s: &str) -> bool {
    require(queue, "insert_head")
        .and_then(|q| q.insert_head(s))
        .is_ok()
}

/// Inserts a copy of `s` at the tail. `false` on absent queue or
/// allocation failure.
pub fn insert_tail(queue: Option<&mut StrQueue>, s: &str) -> bool {
    require(queue, "insert_tail")
        .and_then(|q| q.insert_tail(s))
        .is_ok()
}

/// Removes the head, copying it into `buf` with truncation when given.
/// `false` on absent or empty queue.
pub fn remove_head(queue: Option<&mut StrQueue>, buf: Option<&mut [u8]>) -> bool {
    require(queue, "remove_head")
        .and_then(|q| q.remove_head(buf))
        .is_ok()
}

/// Element count, 0 for an absent queue.
pub fn size(queue: Option<&StrQueue>) -> usize {
    queue.map_or(0, StrQueue::len)
}

/// Reverses in place; no-op on absent queue.
pub fn reverse(queue: Option<&mut StrQueue>) {
    if let Some(q) = queue {
        q.reverse();
    }
}

/// Sorts ascending in place; no-op on absent queue.
pub fn sort(queue: Option<&mut StrQueue>) {
    if let Some(q) = queue {
        q.sort();
    }
}
