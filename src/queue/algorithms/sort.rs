use crate::queue::link::NodeIndex;
use crate::Queue;

impl Queue {
    /// Sort the queue in ascending byte-wise order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements), and only
    /// relinks nodes, so handles stay valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack.
    ///
    /// # Current Implementation
    ///
    /// The ring is opened into a forward chain that ends at the ghost node,
    /// merge sorted recursively, and closed again with all `prev` links
    /// repaired in a single pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["b", "a", "b", "c"]);
    /// queue.sort();
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "b", "c"]));
    /// ```
    pub fn sort(&mut self) {
        // empty, or only one element
        if self.front_node() == self.back_node() {
            return;
        }
        log::trace!("merge sort {} elements", self.len());
        let head = self.merge_sort_chain(self.front_node());
        self.close_chain(head);
    }

    /// Sort the forward chain starting at `head` and ending at the ghost
    /// node, and return the new head. The `prev` links of the chain are
    /// stale.
    fn merge_sort_chain(&mut self, head: NodeIndex) -> NodeIndex {
        let end = self.ghost_node();
        if self.links.next(head) == end {
            return head;
        }
        let (left_back, mid) = self.split_chain(head);
        self.links.set_next(left_back, end);

        let left = self.merge_sort_chain(head);
        let right = self.merge_sort_chain(mid);
        self.merge_chains(left, right)
    }

    /// Find the node at index ⌊*n* / 2⌋ of a chain with at least two nodes,
    /// and the node before it.
    fn split_chain(&self, head: NodeIndex) -> (NodeIndex, NodeIndex) {
        let end = self.ghost_node();
        let (mut before_mid, mut mid, mut fast) = (head, head, head);
        while fast != end {
            fast = self.links.next(fast);
            if fast != end {
                fast = self.links.next(fast);
                before_mid = mid;
                mid = self.links.next(mid);
            }
        }
        (before_mid, mid)
    }

    /// Merge two sorted chains. On ties the node of `left` goes first.
    fn merge_chains(&mut self, mut left: NodeIndex, mut right: NodeIndex) -> NodeIndex {
        // The ghost node is not part of any chain while sorting, so its `next`
        // link serves as the head of the merged chain.
        let end = self.ghost_node();
        let mut tail = end;
        while left != end && right != end {
            let next = if self.value_of(right) < self.value_of(left) {
                let node = right;
                right = self.links.next(node);
                node
            } else {
                let node = left;
                left = self.links.next(node);
                node
            };
            self.links.set_next(tail, next);
            tail = next;
        }
        self.links.set_next(tail, if left != end { left } else { right });
        self.links.next(end)
    }

    /// Close the sorted chain starting at `head` into the ghost ring, and
    /// repair every `prev` link.
    fn close_chain(&mut self, head: NodeIndex) {
        let ghost = self.ghost_node();
        self.links.set_next(ghost, head);
        let mut prev = ghost;
        let mut node = head;
        while node != ghost {
            self.links.set_prev(node, prev);
            prev = node;
            node = self.links.next(node);
        }
        self.links.set_prev(ghost, prev);
    }
}
