use std::fmt;

/// An element removed from a [`Queue`].
///
/// Removing is different from deleting: [`Queue::remove_head`] and
/// [`Queue::remove_tail`] unlink the node and hand its payload over to the
/// caller instead of freeing it. The caller owns the `Element` until it is
/// released with [`Element::release`] (or dropped).
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("foo").unwrap();
///
/// let element = queue.remove_head().unwrap();
/// assert_eq!(element.value(), "foo");
/// assert!(queue.is_empty());
/// element.release();
/// ```
///
/// [`Queue`]: crate::Queue
/// [`Queue::remove_head`]: crate::Queue::remove_head
/// [`Queue::remove_tail`]: crate::Queue::remove_tail
#[must_use = "a removed element owns its payload and should be released"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// The payload of the element.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the element, keeping its payload.
    pub fn into_value(self) -> String {
        self.value
    }

    /// Release the element and its payload.
    pub fn release(self) {
        log::trace!("release element ({} bytes)", self.value.len());
    }

    /// Copy the payload into `buf` as a NUL-terminated byte string.
    ///
    /// At most `buf.len() - 1` bytes of the payload are copied, followed by a
    /// NUL byte. Longer payloads are truncated. Nothing is written into an
    /// empty buffer.
    ///
    /// Returns the number of payload bytes copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("gerbil").unwrap();
    ///
    /// let mut buf = [0xff_u8; 4];
    /// let element = queue.remove_head().unwrap();
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"ger\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let copied = room.min(self.value.len());
        buf[..copied].copy_from_slice(&self.value.as_bytes()[..copied]);
        buf[copied] = 0;
        copied
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn element_copy_to() {
        let element = Element::new(String::from("abc"));

        let mut buf = [0xff_u8; 8];
        assert_eq!(element.copy_to(&mut buf), 3);
        assert_eq!(&buf[..4], b"abc\0");
        assert_eq!(buf[4], 0xff);

        let mut buf = [0xff_u8; 4];
        assert_eq!(element.copy_to(&mut buf), 3);
        assert_eq!(&buf, b"abc\0");

        let mut buf = [0xff_u8; 2];
        assert_eq!(element.copy_to(&mut buf), 1);
        assert_eq!(&buf, b"a\0");

        let mut buf = [0xff_u8; 1];
        assert_eq!(element.copy_to(&mut buf), 0);
        assert_eq!(&buf, b"\0");

        assert_eq!(element.copy_to(&mut []), 0);
    }

    #[test]
    fn element_payload() {
        let element = Element::new(String::from("xyz"));
        assert_eq!(element.to_string(), "xyz");
        assert_eq!(element.as_ref(), "xyz");
        assert_eq!(element.clone().into_value(), "xyz");
        element.release();
    }
}
