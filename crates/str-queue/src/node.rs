//! Chain nodes and arena slots.
//!
//! A node is addressed by its `u32` slot index in the queue's arena. The
//! arena is the only owner of node storage; `next` links, the queue head and
//! the cached tail are plain indices into it.

use std::fmt;

/// Stable handle to a node in a [`StrQueue`](crate::StrQueue).
///
/// Ids survive [`reverse`](crate::StrQueue::reverse) and
/// [`sort`](crate::StrQueue::sort) unchanged, since those only relink
/// existing nodes. An id is invalidated when its node is removed; the slot may
/// then be reused by a later insertion.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw slot index.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One link of the chain.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub value: String,
    pub next: Option<u32>,
}

impl Node {
    pub fn new(value: String) -> Self {
        Self { value, next: None }
    }
}

/// Arena slot: either a live node or a link in the free list.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<u32> },
}
