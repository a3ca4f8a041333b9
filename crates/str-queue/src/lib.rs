//! Singly-linked string queue.
//!
//! [`StrQueue`] keeps owned strings in a chain of nodes with cached head and
//! tail, giving O(1) insertion at either end, O(1) head removal, in-place
//! O(n) reversal and an in-place O(n log n) merge sort.
//!
//! Instead of boxed nodes, every "pointer" is an `Option<u32>` index into an
//! arena owned by the queue. The cached tail is just another index into the
//! same chain, never a second owner. Reversal and sorting only rewrite links,
//! so a [`NodeId`] keeps naming the same string across both.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`error`] | [`QueueError`] and the crate [`Result`] alias |
//! `node` | [`NodeId`] and arena slots |
//! `arena` | slot storage with a free list and fallible growth |
//! `queue` | [`StrQueue`] |
//! `sort` | split / merge / recursion for the linked merge sort |
//! [`iter`] | [`Iter`], [`NodeIds`], [`IntoIter`] |
//! [`ops`] | flag-returning functions over `Option<&mut StrQueue>` |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`StrQueue`] as a sequence of
//!   strings. Its tests live in `tests/serde_matrix.rs` and only build with
//!   the feature on (`cargo test --all-features`).
//!
//! # Example
//!
//! ```
//! use str_queue::StrQueue;
//!
//! let mut q = StrQueue::new();
//! q.insert_head("a").unwrap();
//! q.insert_head("b").unwrap();
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["b", "a"]);
//!
//! q.reverse();
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b"]);
//! assert_eq!(q.len(), 2);
//! ```

mod arena;
pub mod error;
pub mod iter;
mod node;
pub mod ops;
mod queue;
#[cfg(feature = "serde")]
mod serde_impl;
mod sort;

pub use error::{QueueError, Result};
pub use iter::{IntoIter, Iter, NodeIds};
pub use node::NodeId;
pub use queue::StrQueue;
