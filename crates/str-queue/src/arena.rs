//! Index-addressed node storage.
//!
//! Slots are handed out from an intrusive free list first and only then by
//! growing the backing `Vec`. Growth goes through `try_reserve`, so running
//! out of memory surfaces as [`QueueError::Allocation`] instead of aborting.

use crate::error::{QueueError, Result};
use crate::node::{Node, Slot};

#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Option<u32>,
    free_len: usize,
}

impl Arena {
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free: None,
            free_len: 0,
        })
    }

    /// Stores `node` and returns its slot index.
    ///
    /// On failure nothing is stored and `node` is dropped.
    pub fn try_alloc(&mut self, node: Node) -> Result<u32> {
        if let Some(idx) = self.free {
            let slot = &mut self.slots[idx as usize];
            let Slot::Vacant { next_free } = *slot else {
                unreachable!("free list points at occupied slot {idx}");
            };
            *slot = Slot::Occupied(node);
            self.free = next_free;
            self.free_len -= 1;
            return Ok(idx);
        }
        let idx = slot_index(self.slots.len())?;
        self.slots.try_reserve(1)?;
        self.slots.push(Slot::Occupied(node));
        Ok(idx)
    }

    /// Takes the node out of `idx` and puts the slot on the free list.
    pub fn release(&mut self, idx: u32) -> Node {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[idx as usize], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.free_len += 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released vacant slot {idx}"),
        }
    }

    pub fn try_get(&self, idx: u32) -> Option<&Node> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get(&self, idx: u32) -> &Node {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {idx} linked into chain"),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, idx: u32) -> &mut Node {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {idx} linked into chain"),
        }
    }

    #[inline]
    pub fn next(&self, idx: u32) -> Option<u32> {
        self.get(idx).next
    }

    #[inline]
    pub fn set_next(&mut self, idx: u32, next: Option<u32>) {
        self.get_mut(idx).next = next;
    }

    #[inline]
    pub fn value(&self, idx: u32) -> &str {
        &self.get(idx).value
    }

    /// Total slots, live and free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn free_len(&self) -> usize {
        self.free_len
    }

    pub fn live_len(&self) -> usize {
        self.slots.len() - self.free_len
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.free_len = 0;
    }
}

/// Index for a slot pushed at position `len`. Slots past `u32::MAX` cannot
/// be addressed.
fn slot_index(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| QueueError::Allocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_reuses_released_slots() {
        let mut arena = Arena::default();
        let a = arena.try_alloc(Node::new("a".into())).unwrap();
        let b = arena.try_alloc(Node::new("b".into())).unwrap();
        assert_eq!((a, b), (0, 1));

        let node = arena.release(a);
        assert_eq!(node.value, "a");
        assert_eq!(arena.free_len(), 1);
        assert!(arena.try_get(a).is_none());

        let c = arena.try_alloc(Node::new("c".into())).unwrap();
        assert_eq!(c, a);
        assert_eq!(arena.value(c), "c");
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena.free_len(), 0);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::default();
        for s in ["a", "b", "c"] {
            arena.try_alloc(Node::new(s.into())).unwrap();
        }
        arena.release(0);
        arena.release(2);
        assert_eq!(arena.live_len(), 1);
        assert_eq!(arena.try_alloc(Node::new("x".into())).unwrap(), 2);
        assert_eq!(arena.try_alloc(Node::new("y".into())).unwrap(), 0);
        assert_eq!(arena.try_alloc(Node::new("z".into())).unwrap(), 3);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn slot_index_stops_at_u32_range() {
        assert_eq!(slot_index(0), Ok(0));
        assert_eq!(slot_index(u32::MAX as usize), Ok(u32::MAX));
        assert_eq!(
            slot_index(u32::MAX as usize + 1),
            Err(QueueError::Allocation)
        );
    }

    #[test]
    fn oversized_capacity_fails_cleanly() {
        assert_eq!(
            Arena::try_with_capacity(usize::MAX).unwrap_err(),
            QueueError::Allocation
        );
    }

    #[test]
    fn links() {
        let mut arena = Arena::default();
        let a = arena.try_alloc(Node::new("a".into())).unwrap();
        let b = arena.try_alloc(Node::new("b".into())).unwrap();
        arena.set_next(a, Some(b));
        assert_eq!(arena.next(a), Some(b));
        assert_eq!(arena.next(b), None);
        arena.clear();
        assert_eq!(arena.slot_count(), 0);
    }
}
