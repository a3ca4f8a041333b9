use std::cmp::Ordering;
use std::fmt;

use crate::arena::Arena;
use crate::error::{QueueError, Result};
use crate::iter::{Iter, NodeIds};
use crate::node::{Node, NodeId};
use crate::sort::merge_sort;

/// A queue of owned strings kept as a singly-linked chain.
///
/// Nodes live in an arena owned by the queue. `head` owns the chain in the
/// logical sense; `tail` is a cached index of the last node, kept only so
/// [`insert_tail`](Self::insert_tail) is O(1). Every mutating operation
/// re-establishes it before returning.
///
/// Slots are addressed by `u32`, so a queue holds at most 2^32 live nodes.
/// Inserting past that fails with [`QueueError::Allocation`], the same as
/// running out of memory.
#[derive(Clone, Default)]
pub struct StrQueue {
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
    arena: Arena,
}

impl StrQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails; see
    /// [`try_with_capacity`](Self::try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(q) => q,
            Err(e) => panic!("StrQueue::with_capacity({capacity}): {e}"),
        }
    }

    /// Creates an empty queue with room for `capacity` nodes, reporting
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            head: None,
            tail: None,
            len: 0,
            arena: Arena::try_with_capacity(capacity)?,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First value, if any.
    pub fn head(&self) -> Option<&str> {
        self.head.map(|i| self.arena.value(i))
    }

    /// Last value, if any.
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|i| self.arena.value(i))
    }

    fn try_node(&mut self, s: &str) -> Result<u32> {
        let mut value = String::new();
        value.try_reserve_exact(s.len())?;
        value.push_str(s);
        self.arena.try_alloc(Node::new(value))
    }

    /// Copies `s` into a new node at the front.
    ///
    /// On allocation failure the queue is left untouched.
    pub fn insert_head(&mut self, s: &str) -> Result<NodeId> {
        let idx = self.try_node(s).inspect_err(|e| {
            tracing::debug!(error = %e, "insert_head rejected");
        })?;
        self.arena.set_next(idx, self.head);
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
        Ok(NodeId(idx))
    }

    /// Copies `s` into a new node at the back.
    ///
    /// On allocation failure the queue is left untouched.
    pub fn insert_tail(&mut self, s: &str) -> Result<NodeId> {
        let idx = self.try_node(s).inspect_err(|e| {
            tracing::debug!(error = %e, "insert_tail rejected");
        })?;
        match self.tail {
            Some(t) => self.arena.set_next(t, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(NodeId(idx))
    }

    /// Detaches the head node and returns its value.
    pub fn pop_head(&mut self) -> Result<String> {
        let idx = self.head.ok_or(QueueError::EmptyQueue)?;
        let node = self.arena.release(idx);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the head element, optionally copying it out.
    ///
    /// When `buf` is given and non-empty, up to `buf.len() - 1` bytes of the
    /// value are copied followed by a NUL byte. Longer values are truncated
    /// silently. Returns the number of value bytes copied.
    ///
    /// ```
    /// use str_queue::StrQueue;
    ///
    /// let mut q = StrQueue::new();
    /// q.insert_tail("hello").unwrap();
    /// let mut buf = [0xffu8; 3];
    /// assert_eq!(q.remove_head(Some(&mut buf)).unwrap(), 2);
    /// assert_eq!(&buf, b"he\0");
    /// assert!(q.is_empty());
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<usize> {
        let value = self.pop_head()?;
        Ok(match buf {
            Some(buf) if !buf.is_empty() => copy_truncated(value.as_bytes(), buf),
            _ => 0,
        })
    }

    /// Reverses the chain in place.
    ///
    /// Only `next` links and the cached ends change; no node is allocated or
    /// freed and no string is copied.
    pub fn reverse(&mut self) {
        let Some(first) = self.head else {
            return;
        };
        tracing::trace!(len = self.len, "reversing queue");
        let mut prev: Option<u32> = None;
        let mut curr = first;
        let mut upcoming = self.arena.next(curr);
        loop {
            self.arena.set_next(curr, prev);
            match upcoming {
                Some(n) => {
                    prev = Some(curr);
                    curr = n;
                    upcoming = self.arena.next(n);
                }
                None => break,
            }
        }
        self.head = Some(curr);
        self.tail = Some(first);
    }

    /// Sorts in ascending byte-wise lexicographic order.
    ///
    /// Stable merge sort on the links themselves: no node is allocated or
    /// freed, and every [`NodeId`] keeps its value.
    ///
    /// ```
    /// use str_queue::StrQueue;
    ///
    /// let mut q: StrQueue = ["banana", "apple", "cherry"].into_iter().collect();
    /// q.sort();
    /// assert_eq!(q.iter().collect::<Vec<_>>(), ["apple", "banana", "cherry"]);
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Sorts with a custom comparator. Equal elements keep their order.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        let Some(head) = self.head else {
            return;
        };
        if self.len < 2 {
            return;
        }
        tracing::trace!(len = self.len, "sorting queue");
        let (head, tail) = merge_sort(&mut self.arena, head, &mut cmp);
        self.head = Some(head);
        self.tail = Some(tail);
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing queue");
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.head, self.len)
    }

    /// Node ids from head to tail.
    pub fn node_ids(&self) -> NodeIds<'_> {
        NodeIds::new(&self.arena, self.head, self.len)
    }

    /// Value held by `id`, or `None` if the node has been removed.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.arena.try_get(id.0).map(|n| n.value.as_str())
    }

    /// Arena slots ever created, live and free.
    pub fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }

    /// Arena slots waiting for reuse.
    pub fn free_slots(&self) -> usize {
        self.arena.free_len()
    }

    /// Walks the chain and checks the head/tail/count invariants.
    pub fn check_invariants(&self) -> Result<()> {
        let corrupted = |msg: String| -> Result<()> { Err(QueueError::Corrupted(msg)) };

        match (self.head, self.tail, self.len) {
            (None, None, 0) => {
                return if self.arena.live_len() == 0 {
                    Ok(())
                } else {
                    corrupted(format!("empty queue holds {} live nodes", self.arena.live_len()))
                };
            }
            (Some(_), Some(_), n) if n > 0 => {}
            (h, t, n) => return corrupted(format!("head {h:?}, tail {t:?}, len {n} disagree")),
        }

        let mut visited = 0usize;
        let mut last = None;
        let mut curr = self.head;
        while let Some(i) = curr {
            if visited == self.len {
                return corrupted(format!("chain longer than len {} (cycle?)", self.len));
            }
            if self.arena.try_get(i).is_none() {
                return corrupted(format!("chain links to vacant slot {i}"));
            }
            visited += 1;
            last = Some(i);
            curr = self.arena.next(i);
        }
        if visited != self.len {
            return corrupted(format!("chain has {visited} nodes, len is {}", self.len));
        }
        if last != self.tail {
            return corrupted(format!("tail {:?} is not last node {last:?}", self.tail));
        }
        if self.arena.live_len() != self.len {
            return corrupted(format!(
                "{} live nodes but {} reachable",
                self.arena.live_len(),
                self.len
            ));
        }
        Ok(())
    }
}

/// Copies as much of `src` as fits before a trailing NUL in `dst`.
fn copy_truncated(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len().min(dst.len() - 1);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    n
}

impl fmt::Debug for StrQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for StrQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for StrQueue {}

impl<S: AsRef<str>> Extend<S> for StrQueue {
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            if let Err(e) = self.insert_tail(s.as_ref()) {
                panic!("StrQueue::extend: {e}");
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StrQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut q = StrQueue::new();
        q.extend(iter);
        q
    }
}
