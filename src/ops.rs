//! The classic queue-exercise operation surface.
//!
//! Each function takes the container as an `Option`, where `None` stands
//! for an absent container. Mutating operations become no-ops on `None` and
//! report failure through their return value; queries return their zero
//! value. Errors of the typed [`Queue`] API are collapsed into `false` or
//! `None` here.
//!
//! # Examples
//!
//! ```
//! use cyclic_queue::ops::*;
//!
//! let mut queue = q_new();
//! assert!(q_insert_tail(queue.as_mut(), "b"));
//! assert!(q_insert_head(queue.as_mut(), "a"));
//! assert_eq!(q_size(queue.as_ref()), 2);
//!
//! let mut buf = [0_u8; 8];
//! let element = q_remove_head(queue.as_mut(), Some(&mut buf[..])).unwrap();
//! assert_eq!(&buf[..2], b"a\0");
//! q_release_element(element);
//!
//! q_free(queue);
//! assert_eq!(q_size(None), 0);
//! ```

use crate::{Element, Queue};

/// Create an empty queue, or `None` if allocation fails.
pub fn q_new() -> Option<Queue> {
    Queue::try_new()
        .map_err(|err| log::warn!("cannot create queue: {}", err))
        .ok()
}

/// Free the queue and every element still linked into it.
///
/// Elements previously removed from the queue belong to the caller and are
/// not affected.
pub fn q_free(queue: Option<Queue>) {
    drop(queue);
}

/// Insert a copy of `value` at the head. Returns `false` if the queue is
/// absent or the insertion failed, in which case the queue is unchanged.
pub fn q_insert_head(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_head(value).is_ok())
}

/// Insert a copy of `value` at the tail. Returns `false` if the queue is
/// absent or the insertion failed, in which case the queue is unchanged.
pub fn q_insert_tail(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_tail(value).is_ok())
}

/// Remove the head element and hand it over to the caller. If `buf` is
/// given, the payload is also copied into it, see [`Element::copy_to`].
///
/// Returns `None` if the queue is absent or empty.
pub fn q_remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let element = queue?.remove_head()?;
    copy_out(&element, buf);
    Some(element)
}

/// Remove the tail element and hand it over to the caller. If `buf` is
/// given, the payload is also copied into it, see [`Element::copy_to`].
///
/// Returns `None` if the queue is absent or empty.
pub fn q_remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let element = queue?.remove_tail()?;
    copy_out(&element, buf);
    Some(element)
}

/// Release an element obtained from [`q_remove_head`] or [`q_remove_tail`].
pub fn q_release_element(element: Element) {
    element.release();
}

/// The number of elements, or `0` if the queue is absent.
pub fn q_size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::len)
}

/// Delete the middle element. Returns `false` if the queue is absent or
/// empty.
pub fn q_delete_mid(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_mid)
}

/// Delete every element whose value is duplicated in the sorted queue.
/// Returns `false` only if the queue is absent.
pub fn q_delete_dup(queue: Option<&mut Queue>) -> bool {
    queue.map(Queue::delete_dup).is_some()
}

/// Swap every two adjacent elements.
pub fn q_swap(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.swap_pairs();
    }
}

/// Reverse the queue.
pub fn q_reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sort the queue in ascending order.
pub fn q_sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn copy_out(element: &Element, buf: Option<&mut [u8]>) {
    if let Some(buf) = buf {
        element.copy_to(buf);
    }
}
