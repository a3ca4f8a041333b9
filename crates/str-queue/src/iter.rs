//! Iterators over a [`StrQueue`].

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::NodeId;
use crate::queue::StrQueue;

/// Borrowing iterator over values, head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    arena: &'a Arena,
    curr: Option<u32>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(arena: &'a Arena, head: Option<u32>, len: usize) -> Self {
        Self {
            arena,
            curr: head,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let idx = self.curr?;
        let node = self.arena.get(idx);
        self.curr = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Node ids in chain order.
#[derive(Clone)]
pub struct NodeIds<'a> {
    arena: &'a Arena,
    curr: Option<u32>,
    remaining: usize,
}

impl<'a> NodeIds<'a> {
    pub(crate) fn new(arena: &'a Arena, head: Option<u32>, len: usize) -> Self {
        Self {
            arena,
            curr: head,
            remaining: len,
        }
    }
}

impl Iterator for NodeIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let idx = self.curr?;
        self.curr = self.arena.next(idx);
        self.remaining -= 1;
        Some(NodeId(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for NodeIds<'_> {}
impl FusedIterator for NodeIds<'_> {}

/// Owning iterator; drains the queue from the head.
pub struct IntoIter {
    queue: StrQueue,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.queue.pop_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for StrQueue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
