use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by the fallible operations of a [`Queue`].
///
/// A failed operation never leaves a half-inserted element behind: the queue
/// is exactly as it was before the call.
///
/// [`Queue`]: crate::Queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Reserving storage for the payload or for the node failed.
    #[error("failed to allocate queue storage: {0}")]
    Alloc(#[from] TryReserveError),

    /// The queue was created with [`Queue::bounded`] and is full.
    ///
    /// [`Queue::bounded`]: crate::Queue::bounded
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },
}
