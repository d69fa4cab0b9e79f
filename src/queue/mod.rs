use std::fmt::{Debug, Formatter};

use crate::error::QueueError;
use crate::queue::cursor::Cursor;
use crate::queue::link::{Links, NodeIndex};
use crate::{Element, Iter};

pub mod cursor;
pub mod element;
pub mod iterator;

mod algorithms;
mod link;

/// The `Queue` is an ordered container of owned strings, implemented as a
/// cyclic doubly-linked list whose nodes live in an arena.
///
/// Inserting and removing at both ends take *O*(1) time. The structural
/// transformations ([`reverse`], [`swap_pairs`], [`delete_mid`],
/// [`delete_dup`], [`sort`]) only relink nodes: payloads are never copied or
/// moved, and every [`Handle`] stays valid across them.
///
/// The `Queue` contains:
/// - the link table of the arena, where node `0` is the ghost node of the
///   ring and node `1` anchors a scratch ring;
/// - the slot table holding the payloads, with vacant slots chained in a free
///   list;
/// - a length field `len`. It can be disabled by disabling the `length`
///   feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// cyclic_queue = { default-features = false }
/// ```
///
/// [`reverse`]: Queue::reverse
/// [`swap_pairs`]: Queue::swap_pairs
/// [`delete_mid`]: Queue::delete_mid
/// [`delete_dup`]: Queue::delete_dup
/// [`sort`]: Queue::sort
#[derive(Clone)]
pub struct Queue {
    links: Links,
    slots: Vec<Slot>,
    free: Option<NodeIndex>,
    limit: Option<usize>,
    #[cfg(feature = "length")]
    /// the length of the queue
    pub(crate) len: usize,
}

#[derive(Debug, Clone)]
pub(crate) enum Slot {
    /// A ring anchor, which never holds a payload.
    Ghost,
    Occupied {
        generation: u32,
        value: String,
    },
    Vacant {
        generation: u32,
        next_free: Option<NodeIndex>,
    },
}

/// A stable handle to an element of a [`Queue`].
///
/// Handles are returned by [`Queue::insert_head`] and [`Queue::insert_tail`],
/// and by [`Cursor::handle`]. They survive every transformation of the queue,
/// and stop resolving once their element is removed or deleted.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// let b = queue.insert_tail("b").unwrap();
/// let a = queue.insert_tail("a").unwrap();
///
/// queue.sort();
/// assert_eq!(queue.get(a), Some("a"));
/// assert_eq!(queue.get(b), Some("b"));
///
/// queue.remove_head().unwrap().release();
/// assert_eq!(queue.get(a), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: NodeIndex,
    generation: u32,
}

// private methods
impl Queue {
    fn with_storage(mut links: Links, mut slots: Vec<Slot>, limit: Option<usize>) -> Self {
        for anchor in [NodeIndex::GHOST, NodeIndex::SCRATCH] {
            let node = links.push_ring();
            debug_assert_eq!(node, anchor);
            slots.push(Slot::Ghost);
        }
        Self {
            links,
            slots,
            free: None,
            limit,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    pub(crate) fn ghost_node(&self) -> NodeIndex {
        NodeIndex::GHOST
    }

    pub(crate) fn front_node(&self) -> NodeIndex {
        self.links.next(NodeIndex::GHOST)
    }

    pub(crate) fn back_node(&self) -> NodeIndex {
        self.links.prev(NodeIndex::GHOST)
    }

    /// The payload of `node`, or `None` for a ring anchor.
    pub(crate) fn value_of(&self, node: NodeIndex) -> Option<&str> {
        match &self.slots[node.0] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub(crate) fn handle_of(&self, node: NodeIndex) -> Option<Handle> {
        match &self.slots[node.0] {
            Slot::Occupied { generation, .. } => Some(Handle {
                index: node,
                generation: *generation,
            }),
            _ => None,
        }
    }

    /// Store `value` in a vacant slot, or in a new one at the end of the
    /// arena. The new node is a ring of one.
    fn alloc_node(&mut self, value: String) -> Result<Handle, QueueError> {
        if let Some(capacity) = self.limit {
            if self.len() >= capacity {
                return Err(QueueError::Full { capacity });
            }
        }
        let (index, generation) = match self.free {
            Some(index) => {
                let Slot::Vacant {
                    generation,
                    next_free,
                } = self.slots[index.0]
                else {
                    unreachable!("free list points at a live slot");
                };
                self.free = next_free;
                self.links.init(index);
                (index, generation)
            }
            None => {
                self.links.try_reserve(1)?;
                self.slots.try_reserve(1)?;
                (self.links.push_ring(), 0)
            }
        };
        let slot = Slot::Occupied { generation, value };
        if index.0 == self.slots.len() {
            self.slots.push(slot);
        } else {
            self.slots[index.0] = slot;
        }
        Ok(Handle { index, generation })
    }

    /// Return the slot of an unlinked `node` to the free list, and hand its
    /// payload back.
    fn release_node(&mut self, node: NodeIndex) -> String {
        let next_free = self.free;
        match std::mem::replace(&mut self.slots[node.0], Slot::Ghost) {
            Slot::Occupied { generation, value } => {
                self.slots[node.0] = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                    next_free,
                };
                self.free = Some(node);
                value
            }
            _ => unreachable!("only occupied nodes are released"),
        }
    }

    /// Attach a single unlinked `node` to the ring, between the adjacent nodes
    /// `prev` and `next`.
    pub(crate) fn attach_node(&mut self, prev: NodeIndex, node: NodeIndex, next: NodeIndex) {
        self.links.relink(prev, node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Detach a single `node` from the ring, free its slot and return its
    /// payload.
    pub(crate) fn detach_node(&mut self, node: NodeIndex) -> String {
        debug_assert!(self.value_of(node).is_some(), "cannot detach an anchor");
        self.links.unlink(node);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        self.release_node(node)
    }

    /// Free every node of the ring anchored at `anchor`, which must not be
    /// the ghost ring. Returns the number of freed nodes.
    pub(crate) fn free_ring(&mut self, anchor: NodeIndex) -> usize {
        let mut freed = 0;
        while !self.links.is_empty(anchor) {
            let node = self.links.next(anchor);
            self.links.unlink(node);
            drop(self.release_node(node));
            freed += 1;
        }
        freed
    }

    fn insert_between(
        &mut self,
        prev: NodeIndex,
        next: NodeIndex,
        value: &str,
    ) -> Result<Handle, QueueError> {
        let handle = copy_payload(value)
            .and_then(|payload| self.alloc_node(payload))
            .map_err(|err| {
                log::warn!("insert of {} bytes rolled back: {}", value.len(), err);
                err
            })?;
        self.attach_node(prev, handle.index, next);
        Ok(handle)
    }

    /// The number of live elements in the arena, whether linked or not.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied { .. }))
            .count()
    }

    /// Check the ring invariants of the ghost ring and the cached length.
    #[cfg(test)]
    pub(crate) fn assert_well_formed(&self) {
        let mut count = 0;
        let mut node = self.ghost_node();
        loop {
            assert_eq!(self.links.prev(self.links.next(node)), node);
            assert_eq!(self.links.next(self.links.prev(node)), node);
            node = self.links.next(node);
            if node == self.ghost_node() {
                break;
            }
            assert!(self.value_of(node).is_some());
            count += 1;
        }
        assert_eq!(count, self.len());
        assert!(self.links.is_empty(NodeIndex::SCRATCH));
        assert_eq!(self.links.len(), self.slots.len());
    }
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(Links::default(), Vec::new(), None)
    }

    /// Create an empty `Queue`, reporting allocation failure instead of
    /// aborting.
    pub fn try_new() -> Result<Self, QueueError> {
        let mut links = Links::default();
        links.try_reserve(2)?;
        let mut slots = Vec::new();
        slots.try_reserve(2)?;
        Ok(Self::with_storage(links, slots, None))
    }

    /// Create an empty `Queue` holding at most `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Queue, QueueError};
    ///
    /// let mut queue = Queue::bounded(1);
    /// assert!(queue.insert_tail("a").is_ok());
    /// assert_eq!(
    ///     queue.insert_tail("b"),
    ///     Err(QueueError::Full { capacity: 1 })
    /// );
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn bounded(capacity: usize) -> Self {
        Self::with_storage(Links::default(), Vec::new(), Some(capacity))
    }

    /// The maximum number of elements, or `None` for an unbounded queue.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty(self.ghost_node())
    }

    /// Returns the number of elements in the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length`
    /// feature, and in *O*(*n*) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("b").unwrap();
    /// queue.insert_tail("c").unwrap();
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length`
    /// feature, and in *O*(*n*) time without it.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes and frees all elements of the `Queue`.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            drop(self.detach_node(self.front_node()));
        }
    }

    /// Provides a reference to the first element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&str> {
        self.value_of(self.front_node())
    }

    /// Provides a reference to the last element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&str> {
        self.value_of(self.back_node())
    }

    /// Provides a reference to the element of `handle`, or `None` if it has
    /// been removed or deleted.
    pub fn get(&self, handle: Handle) -> Option<&str> {
        match self.slots.get(handle.index.0) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Returns `true` if the `Queue` contains an element equal to `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|e| e == value)
    }

    /// Copies `value` into a new element at the front of the queue.
    ///
    /// On failure nothing is inserted and the queue is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("b").unwrap();
    /// queue.insert_head("a").unwrap();
    /// assert_eq!(queue.front(), Some("a"));
    /// assert_eq!(queue.back(), Some("b"));
    /// ```
    pub fn insert_head(&mut self, value: &str) -> Result<Handle, QueueError> {
        self.insert_between(self.ghost_node(), self.front_node(), value)
    }

    /// Copies `value` into a new element at the back of the queue.
    ///
    /// On failure nothing is inserted and the queue is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("a").unwrap();
    /// queue.insert_tail("b").unwrap();
    /// assert_eq!(queue.front(), Some("a"));
    /// assert_eq!(queue.back(), Some("b"));
    /// ```
    pub fn insert_tail(&mut self, value: &str) -> Result<Handle, QueueError> {
        self.insert_between(self.back_node(), self.ghost_node(), value)
    }

    /// Unlinks the first element and hands it over to the caller, or returns
    /// `None` if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.remove_head().is_none());
    ///
    /// queue.insert_tail("a").unwrap();
    /// queue.insert_tail("b").unwrap();
    /// assert_eq!(queue.remove_head().unwrap().value(), "a");
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn remove_head(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(Element::new(self.detach_node(self.front_node())))
    }

    /// Unlinks the last element and hands it over to the caller, or returns
    /// `None` if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn remove_tail(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(Element::new(self.detach_node(self.back_node())))
    }

    /// Provides a cursor at the first element.
    ///
    /// The cursor is pointing to the ghost node if the queue is empty.
    pub fn cursor_start(&self) -> Cursor<'_> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_> {
        Cursor::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a forward iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let queue = Queue::from_iter(["a", "b"]);
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next(), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_payload(value: &str) -> Result<String, QueueError> {
    let mut payload = String::new();
    payload.try_reserve_exact(value.len())?;
    payload.push_str(value);
    Ok(payload)
}
