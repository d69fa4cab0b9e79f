//! This crate provides a queue of owned strings, implemented as a cyclic
//! doubly-linked list whose nodes live in an arena.
//!
//! The [`Queue`] allows inserting and removing elements at both ends in
//! constant time, and offers a family of in-place transformations that only
//! relink nodes: reversal, pairwise swap, middle deletion, deletion of
//! duplicated values, and a stable merge sort.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("a").unwrap();
//! queue.insert_head("b").unwrap(); // becomes [b, b, a]
//!
//! queue.sort(); // becomes [a, b, b]
//! assert_eq!(queue, Queue::from_iter(["a", "b", "b"]));
//!
//! let element = queue.remove_head().unwrap(); // becomes [b, b]
//! assert_eq!(element.value(), "a");
//! element.release();
//!
//! queue.delete_dup(); // every duplicated value is gone
//! assert!(queue.is_empty());
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a queue live in two parallel tables. The link table holds the
//! `next` and `prev` indices of every node, and the slot table holds its
//! payload:
//! ```text
//!            0 (ghost)     1 (scratch)   2             3             4
//!          ╔═══════════╗ ╔═══════════╗ ╔═══════════╗ ╔═══════════╗ ╔═══════════╗
//!   links  ║ next:   3 ║ ║ next:   1 ║ ║ next:   0 ║ ║ next:   2 ║ ║ next:   4 ║
//!          ║ prev:   2 ║ ║ prev:   1 ║ ║ prev:   3 ║ ║ prev:   0 ║ ║ prev:   4 ║
//!          ╟───────────╢ ╟───────────╢ ╟───────────╢ ╟───────────╢ ╟───────────╢
//!   slots  ║  (ghost)  ║ ║  (ghost)  ║ ║   "b"     ║ ║   "a"     ║ ║  vacant   ║
//!          ╚═══════════╝ ╚═══════════╝ ╚═══════════╝ ╚═══════════╝ ╚═══════════╝
//! ```
//! The queue above is `["a", "b"]`: following `next` from the ghost node
//! visits node 3, then node 2, then comes back to the ghost node.
//!
//! - Node `0` is the ghost node. It never holds a payload. `ghost.next` is the
//!   first element, and `ghost.prev` is the last one. In an empty queue both
//!   point to the ghost node itself.
//! - Node `1` anchors a scratch ring used to batch deletions. It is empty
//!   between operations.
//! - A vacant slot belongs to a removed element. Vacant slots are chained in
//!   a free list and reused by later insertions.
//!
//! In a queue with length *n*, the elements are indexed by 0, 1, ..., *n* - 1,
//! and the ghost node is indexed by *n*.
//!
//! # Remove vs Delete
//!
//! *Removing* ([`Queue::remove_head`], [`Queue::remove_tail`]) unlinks an
//! element and hands its payload over to the caller as an [`Element`], which
//! the caller releases with [`Element::release`]. *Deleting*
//! ([`Queue::delete_mid`], [`Queue::delete_dup`]) unlinks and frees the
//! element at once.
//!
//! # Handles
//!
//! Insertions return a [`Handle`], a stable reference to the new element.
//! Since the transformations never move payloads, a handle follows its
//! element through reversal, swaps and sorting. It stops resolving once the
//! element is removed or deleted.
//!
//! # Operation Surface
//!
//! The [`ops`] module offers the same functionality as free functions that
//! accept an absent container (`None`) and report failures as `false` or
//! `None`.
//!
//! [`Queue`]: crate::Queue
//! [`Element`]: crate::Element
//! [`Handle`]: crate::Handle

#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use queue::cursor::Cursor;
#[doc(inline)]
pub use queue::element::Element;
#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::{Handle, Queue};

pub mod error;
pub mod ops;
pub mod queue;
