//! Merge sort over an arena-linked chain.
//!
//! Nothing here allocates: sub-lists are cut and spliced by rewriting `next`
//! links only, so every node keeps its slot (and thus its
//! [`NodeId`](crate::NodeId)) across a sort. Auxiliary space is the
//! recursion stack, at most ⌈log2 n⌉ frames deep.

use std::cmp::Ordering;

use crate::arena::Arena;

/// Cuts the chain starting at `head` in two and returns the head of the
/// second half, or `None` when the chain has a single node.
///
/// `slow` advances one node for every two of `fast`, so the first half ends
/// up with ⌈n/2⌉ nodes.
pub(crate) fn split(arena: &mut Arena, head: u32) -> Option<u32> {
    let mut slow = head;
    let mut fast = arena.next(head);
    while let Some(step) = fast.and_then(|f| arena.next(f)) {
        // `slow` trails `fast`, so it always has a successor here.
        match arena.next(slow) {
            Some(s) => slow = s,
            None => break,
        }
        fast = arena.next(step);
    }
    let second = arena.next(slow);
    arena.set_next(slow, None);
    second
}

/// Merges two sorted, non-empty chains given as `(head, tail)` pairs.
///
/// On ties the node from `left` goes first, which keeps the sort stable.
/// Returns the `(head, tail)` of the merged chain.
pub(crate) fn merge<F>(
    arena: &mut Arena,
    left: (u32, u32),
    right: (u32, u32),
    cmp: &mut F,
) -> (u32, u32)
where
    F: FnMut(&str, &str) -> Ordering,
{
    let mut a = Some(left.0);
    let mut b = Some(right.0);
    let mut head: Option<u32> = None;
    let mut tail = left.0;

    loop {
        let picked = match (a, b) {
            (Some(x), Some(y)) => {
                if cmp(arena.value(x), arena.value(y)) != Ordering::Greater {
                    a = arena.next(x);
                    x
                } else {
                    b = arena.next(y);
                    y
                }
            }
            (Some(rest), None) => {
                arena.set_next(tail, Some(rest));
                tail = left.1;
                break;
            }
            (None, Some(rest)) => {
                arena.set_next(tail, Some(rest));
                tail = right.1;
                break;
            }
            (None, None) => break,
        };
        match head {
            None => head = Some(picked),
            Some(_) => arena.set_next(tail, Some(picked)),
        }
        tail = picked;
    }

    (head.unwrap_or(left.0), tail)
}

/// Sorts the chain starting at `head`, returning its new `(head, tail)`.
pub(crate) fn merge_sort<F>(arena: &mut Arena, head: u32, cmp: &mut F) -> (u32, u32)
where
    F: FnMut(&str, &str) -> Ordering,
{
    let Some(second) = split(arena, head) else {
        return (head, head);
    };
    let left = merge_sort(arena, head, cmp);
    let right = merge_sort(arena, second, cmp);
    merge(arena, left, right, cmp)
}
