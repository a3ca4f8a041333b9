use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use str_queue::{ops, QueueError, StrQueue};

/// System allocator that returns null while the current thread has failures
/// switched on.
struct Switchable;

thread_local! {
    static FAIL: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for Switchable {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if FAIL.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOC: Switchable = Switchable;

/// Runs `f` with every allocation on this thread failing.
fn failing<T>(f: impl FnOnce() -> T) -> T {
    FAIL.with(|c| c.set(true));
    let out = f();
    FAIL.with(|c| c.set(false));
    out
}

/// Two elements in an arena that is exactly full.
fn full_queue() -> StrQueue {
    let mut q = StrQueue::try_with_capacity(2).unwrap();
    q.insert_tail("a").unwrap();
    q.insert_tail("b").unwrap();
    assert_eq!(q.slot_count(), 2);
    q
}

fn assert_untouched(q: &StrQueue) {
    assert_eq!(q.len(), 2);
    assert_eq!(q.slot_count(), 2);
    assert_eq!(q.free_slots(), 0);
    assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(q.head(), Some("a"));
    assert_eq!(q.tail(), Some("b"));
    q.check_invariants().unwrap();
}

#[test]
fn string_copy_failure_rolls_back_matrix() {
    let mut q = full_queue();
    let (tail, head) = failing(|| (q.insert_tail("xyz"), q.insert_head("xyz")));
    assert_eq!(tail, Err(QueueError::Allocation));
    assert_eq!(head, Err(QueueError::Allocation));
    assert_untouched(&q);
}

#[test]
fn node_slot_failure_rolls_back_matrix() {
    // An empty string needs no buffer, so only the arena growth can fail.
    let mut q = full_queue();
    let (tail, head) = failing(|| (q.insert_tail(""), q.insert_head("")));
    assert_eq!(tail, Err(QueueError::Allocation));
    assert_eq!(head, Err(QueueError::Allocation));
    assert_untouched(&q);
}

#[test]
fn free_slot_reuse_needs_no_allocation_matrix() {
    let mut q = full_queue();
    q.pop_head().unwrap();
    let reused = failing(|| q.insert_tail(""));
    assert!(reused.is_ok());
    assert_eq!(q.iter().collect::<Vec<_>>(), ["b", ""]);
    assert_eq!(q.slot_count(), 2);
    q.check_invariants().unwrap();
}

#[test]
fn ops_report_allocation_failure_matrix() {
    let mut q = full_queue();
    let (tail, head) = failing(|| {
        (
            ops::insert_tail(Some(&mut q), "xyz"),
            ops::insert_head(Some(&mut q), "xyz"),
        )
    });
    assert!(!tail);
    assert!(!head);
    assert_eq!(ops::size(Some(&q)), 2);
    assert_untouched(&q);
}

#[test]
fn capacity_failure_creates_nothing_matrix() {
    let res = failing(|| StrQueue::try_with_capacity(8).map(|q| q.len()));
    assert_eq!(res, Err(QueueError::Allocation));
}

#[test]
fn recovers_once_memory_is_back_matrix() {
    let mut q = full_queue();
    let failed = failing(|| q.insert_tail("c"));
    assert!(failed.is_err());
    q.insert_tail("c").unwrap();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    q.check_invariants().unwrap();
}
