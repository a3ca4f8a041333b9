//! Queue error type.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Failures reported by queue operations.
///
/// None of these are fatal: every operation that returns one leaves the
/// queue exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The operation was invoked without a queue.
    #[error("queue is absent")]
    InvalidQueue,
    /// Removal was requested from a queue with no elements.
    #[error("queue is empty")]
    EmptyQueue,
    /// Node or string storage could not be allocated.
    #[error("allocation failed")]
    Allocation,
    /// A structural invariant does not hold.
    #[error("queue corrupted: {0}")]
    Corrupted(String),
}

impl From<TryReserveError> for QueueError {
    fn from(_: TryReserveError) -> Self {
        QueueError::Allocation
    }
}
