use crate::queue::link::NodeIndex;
use crate::queue::{Handle, Queue};
use std::fmt;
use std::fmt::Formatter;

/// A read-only cursor over a `Queue`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a queue with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the queue.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// // Create a queue: [ A B C #]
/// let queue = Queue::from_iter(["A", "B", "C"]);
///
/// // Create a cursor at start: [|A B C #]
/// let mut cursor = queue.cursor_start();
/// assert_eq!(cursor.current(), Some("A"));
///
/// // Move cursor forward: [ A|B C #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some("B"));
///
/// // Create a cursor in the end: [ A B C|#]
/// let mut cursor = queue.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor forward, cyclically: [|A B C #]
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some("A"));
/// ```
#[derive(Clone)]
pub struct Cursor<'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NodeIndex,
    pub(crate) queue: &'a Queue,
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same queue and have the same positions
/// are considered equal.
impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.queue, other.queue) && self.current == other.current
    }
}

impl<'a> Eq for Cursor<'a> {}

impl<'a> Cursor<'a> {
    pub(crate) fn new(
        queue: &'a Queue,
        current: NodeIndex,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            queue,
        }
    }

    pub(crate) fn next_node(&self) -> NodeIndex {
        self.queue.links.next(self.current)
    }

    pub(crate) fn prev_node(&self) -> NodeIndex {
        self.queue.links.prev(self.current)
    }

    fn is_front_node(&self) -> bool {
        self.prev_node() == self.queue.ghost_node()
    }

    #[cfg(feature = "length")]
    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor is at the ghost node.
    pub fn is_ghost(&self) -> bool {
        self.current == self.queue.ghost_node()
    }

    /// Move the cursor to the next position, where passing through the
    /// ghost node is allowed.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_next_cyclic(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        #[cfg(feature = "length")]
        if self.is_ghost() {
            self.index = 0;
        } else {
            self.index += 1;
        }
        self.current = self.next_node();
    }

    /// Move the cursor to the previous position, where passing through the
    /// ghost node is allowed.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_prev_cyclic(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        #[cfg(feature = "length")]
        if self.is_front_node() {
            self.index = self.queue.len();
        } else {
            self.index -= 1;
        }
        self.current = self.prev_node();
    }

    /// Move the cursor to the next position, or return an error when it
    /// would pass through the ghost node.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        if !self.queue.is_empty() && !self.is_ghost() {
            self.move_next_cyclic();
            return Ok(());
        }
        Err("`move_next` across ghost boundary")
    }

    /// Move the cursor to the previous position, or return an error when it
    /// would pass through the ghost node.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let queue = Queue::from_iter(["a", "b"]);
    /// let mut cursor = queue.cursor_end();
    /// assert!(cursor.move_prev().is_ok());
    /// assert_eq!(cursor.current(), Some("b"));
    /// assert!(cursor.move_prev().is_ok());
    /// assert!(cursor.move_prev().is_err());
    /// assert_eq!(cursor.current(), Some("a"));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), &'static str> {
        if !self.queue.is_empty() && !self.is_front_node() {
            self.move_prev_cyclic();
            return Ok(());
        }
        Err("`move_prev` across ghost boundary")
    }

    /// Move the cursor to the first element (or the ghost node if the queue
    /// is empty).
    pub fn move_to_start(&mut self) {
        #[cfg(feature = "length")]
        {
            self.index = 0;
        }
        self.current = self.queue.front_node();
    }

    /// Move the cursor to the ghost node.
    pub fn move_to_end(&mut self) {
        #[cfg(feature = "length")]
        {
            self.index = self.queue.len();
        }
        self.current = self.queue.ghost_node();
    }

    /// The element at the cursor, or `None` at the ghost node.
    pub fn current(&self) -> Option<&'a str> {
        self.queue.value_of(self.current)
    }

    /// The element after the cursor, or `None` if it is the ghost node.
    pub fn peek_next(&self) -> Option<&'a str> {
        self.queue.value_of(self.next_node())
    }

    /// The element before the cursor, or `None` if it is the ghost node.
    pub fn peek_prev(&self) -> Option<&'a str> {
        self.queue.value_of(self.prev_node())
    }

    /// The handle of the element at the cursor, or `None` at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// let handle = queue.insert_tail("a").unwrap();
    /// assert_eq!(queue.cursor_start().handle(), Some(handle));
    /// assert_eq!(queue.cursor_end().handle(), None);
    /// ```
    pub fn handle(&self) -> Option<Handle> {
        self.queue.handle_of(self.current)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Cursor");
        #[cfg(feature = "length")]
        f.field("index", &self.index);
        f.field("current", &self.current()).finish()
    }
}

/// A cyclic, not fused iterator created from a [`Cursor`].
///
/// It yields `None` once per lap, when passing the ghost node.
#[derive(Clone)]
pub struct CursorIter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> CursorIter<'a> {
    pub fn into_cursor(self) -> Cursor<'a> {
        self.cursor
    }
}

impl<'a> Iterator for CursorIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.current();
        self.cursor.move_next_cyclic();
        current
    }
}

/// Convert the cursor to an iterator, which is cyclic and not fused.
impl<'a> IntoIterator for Cursor<'a> {
    type Item = &'a str;
    type IntoIter = CursorIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}
