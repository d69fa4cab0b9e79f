use crate::queue::link::NodeIndex;
use crate::Queue;
use std::hash::{Hash, Hasher};

mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl Queue {
    /// Reverse the queue in place.
    ///
    /// Every node, the ghost node included, exchanges its `next` and `prev`
    /// links. Nothing is allocated, freed or moved, so handles stay valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    /// queue.reverse();
    /// assert_eq!(queue, Queue::from_iter(["c", "b", "a"]));
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            self.links.flip(node);
            // after the flip, the old `next` is `prev`
            node = self.links.prev(node);
            if node == ghost {
                break;
            }
        }
    }

    /// Swap every two adjacent elements: positions 0 and 1 trade places,
    /// then 2 and 3, and so on. With an odd length the last element stays
    /// where it is.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
    /// queue.swap_pairs();
    /// assert_eq!(queue, Queue::from_iter(["b", "a", "d", "c", "e"]));
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut left = self.front_node();
        while left != ghost {
            let right = self.links.next(left);
            if right == ghost {
                break;
            }
            self.links.move_to(left, right);
            left = self.links.next(left);
        }
    }

    /// Delete the middle element, which is the element at index ⌊*n* / 2⌋
    /// (0-based). Returns `false` if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e", "f"]);
    /// assert!(queue.delete_mid());
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "c", "e", "f"]));
    ///
    /// let mut queue = Queue::new();
    /// assert!(!queue.delete_mid());
    /// ```
    pub fn delete_mid(&mut self) -> bool {
        let Some(mid) = self.mid_node() else {
            return false;
        };
        log::trace!("delete middle node {:?}", mid);
        drop(self.detach_node(mid));
        true
    }

    /// Delete every element whose value occurs more than once, leaving the
    /// values that occur exactly once in their original order. Returns the
    /// number of deleted elements.
    ///
    /// The queue must be sorted. On an unsorted queue only adjacent equal
    /// elements are detected, but the queue stays well-formed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
    /// assert_eq!(queue.delete_dup(), 4);
    /// assert_eq!(queue, Queue::from_iter(["b"]));
    /// ```
    pub fn delete_dup(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let (ghost, scratch) = (self.ghost_node(), NodeIndex::SCRATCH);
        debug_assert!(self.links.is_empty(scratch));

        let mut prev_same = false;
        let mut node = self.front_node();
        loop {
            let next = self.links.next(node);
            if next == ghost {
                break;
            }
            let same = self.value_of(node) == self.value_of(next);
            if same || prev_same {
                self.links.move_to(node, scratch);
            }
            prev_same = same;
            node = next;
        }
        // the last node has no successor to compare with
        if prev_same {
            self.links.move_to(node, scratch);
        }

        let deleted = self.free_ring(scratch);
        #[cfg(feature = "length")]
        {
            self.len -= deleted;
        }
        log::trace!("deleted {} duplicated elements", deleted);
        deleted
    }

    /// Locate the node at index ⌊*n* / 2⌋ with two pointers walking from
    /// both ends toward each other.
    fn mid_node(&self) -> Option<NodeIndex> {
        if self.is_empty() {
            return None;
        }
        let (mut forward, mut backward) = (self.front_node(), self.back_node());
        while forward != backward && self.links.next(forward) != backward {
            forward = self.links.next(forward);
            backward = self.links.prev(backward);
        }
        // with an even length the pointers stop side by side
        Some(backward)
    }
}
