//! The link primitive of the queue.
//!
//! Every node of the arena owns exactly one [`Link`], stored in a table apart
//! from the payloads, so nothing in this module can see or touch a payload.
//! Rings are anchored by a sentinel: an empty ring is a node whose `next` and
//! `prev` both point to itself.

use std::collections::TryReserveError;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// The ghost node anchoring the ring of queued elements.
    pub(crate) const GHOST: NodeIndex = NodeIndex(0);
    /// The anchor of the scratch ring used for batched deletion.
    pub(crate) const SCRATCH: NodeIndex = NodeIndex(1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) next: NodeIndex,
    pub(crate) prev: NodeIndex,
}

/// The link table of the arena.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Links {
    links: Vec<Link>,
}

impl Links {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.links.try_reserve(additional)
    }

    /// Append a new node forming a ring of one, and return its index.
    ///
    /// Storage must have been reserved beforehand for this to be infallible.
    pub(crate) fn push_ring(&mut self) -> NodeIndex {
        let node = NodeIndex(self.links.len());
        self.links.push(Link {
            next: node,
            prev: node,
        });
        node
    }

    #[inline]
    pub(crate) fn next(&self, node: NodeIndex) -> NodeIndex {
        self.links[node.0].next
    }

    #[inline]
    pub(crate) fn prev(&self, node: NodeIndex) -> NodeIndex {
        self.links[node.0].prev
    }

    /// Overwrite `node.next` only. The ring is ill-formed until the matching
    /// `prev` links are repaired.
    #[inline]
    pub(crate) fn set_next(&mut self, node: NodeIndex, next: NodeIndex) {
        self.links[node.0].next = next;
    }

    /// Overwrite `node.prev` only. See [`Links::set_next`].
    #[inline]
    pub(crate) fn set_prev(&mut self, node: NodeIndex, prev: NodeIndex) {
        self.links[node.0].prev = prev;
    }

    /// Make `node` a ring of one.
    pub(crate) fn init(&mut self, node: NodeIndex) {
        self.links[node.0] = Link {
            next: node,
            prev: node,
        };
    }

    pub(crate) fn is_empty(&self, anchor: NodeIndex) -> bool {
        self.next(anchor) == anchor
    }

    pub(crate) fn connect(&mut self, prev: NodeIndex, next: NodeIndex) {
        self.set_next(prev, next);
        self.set_prev(next, prev);
    }

    /// Splice `node` between the adjacent nodes `prev` and `next`.
    pub(crate) fn relink(&mut self, prev: NodeIndex, node: NodeIndex, next: NodeIndex) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
    }

    pub(crate) fn insert_after(&mut self, anchor: NodeIndex, node: NodeIndex) {
        self.relink(anchor, node, self.next(anchor));
    }

    pub(crate) fn insert_before(&mut self, anchor: NodeIndex, node: NodeIndex) {
        self.relink(self.prev(anchor), node, anchor);
    }

    /// Remove `node` from whatever ring it is in. The node is left as a ring
    /// of one.
    pub(crate) fn unlink(&mut self, node: NodeIndex) {
        self.connect(self.prev(node), self.next(node));
        self.init(node);
    }

    /// Move `node` from its ring to the position right after `anchor`.
    pub(crate) fn move_to(&mut self, node: NodeIndex, anchor: NodeIndex) {
        self.unlink(node);
        self.insert_after(anchor, node);
    }

    /// Exchange `next` and `prev` of a single node.
    pub(crate) fn flip(&mut self, node: NodeIndex) {
        let link = &mut self.links[node.0];
        std::mem::swap(&mut link.next, &mut link.prev);
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeIndex, next: NodeIndex) {
        assert_eq!(self.next(prev), next);
        assert_eq!(self.prev(next), prev);
    }
}
