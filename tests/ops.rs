use cyclic_queue::ops::*;
use cyclic_queue::Queue;

fn queue_of(values: &[&str]) -> Option<Queue> {
    let mut queue = q_new();
    for value in values {
        assert!(q_insert_tail(queue.as_mut(), value));
    }
    queue
}

fn contents(queue: &Option<Queue>) -> Vec<String> {
    queue
        .iter()
        .flat_map(|queue| queue.iter().map(String::from))
        .collect()
}

#[test]
fn absent_queue() {
    assert!(!q_insert_head(None, "a"));
    assert!(!q_insert_tail(None, "a"));
    assert!(q_remove_head(None, None).is_none());

    let mut buf = [0xff_u8; 4];
    assert!(q_remove_tail(None, Some(&mut buf[..])).is_none());
    assert_eq!(buf, [0xff; 4]);

    assert_eq!(q_size(None), 0);
    assert!(!q_delete_mid(None));
    assert!(!q_delete_dup(None));
    q_swap(None);
    q_reverse(None);
    q_sort(None);
    q_free(None);
}

#[test]
fn empty_queue() {
    let mut queue = q_new();
    assert!(queue.is_some());
    assert_eq!(q_size(queue.as_ref()), 0);
    assert!(q_remove_head(queue.as_mut(), None).is_none());
    assert!(q_remove_tail(queue.as_mut(), None).is_none());
    assert!(!q_delete_mid(queue.as_mut()));
    assert!(q_delete_dup(queue.as_mut()));
    q_swap(queue.as_mut());
    q_reverse(queue.as_mut());
    q_sort(queue.as_mut());
    assert_eq!(q_size(queue.as_ref()), 0);
    q_free(queue);
}

#[test]
fn size_follows_inserts_and_removes() {
    let mut queue = q_new();
    let (mut inserted, mut removed) = (0, 0);
    for i in 0..50 {
        match i % 5 {
            0 | 1 | 2 => {
                assert!(q_insert_tail(queue.as_mut(), &i.to_string()));
                inserted += 1;
            }
            3 => {
                assert!(q_insert_head(queue.as_mut(), &i.to_string()));
                inserted += 1;
            }
            _ => {
                if let Some(element) = q_remove_head(queue.as_mut(), None) {
                    q_release_element(element);
                    removed += 1;
                }
            }
        }
        assert_eq!(q_size(queue.as_ref()), inserted - removed);
    }
    q_free(queue);
}

#[test]
fn insert_then_remove_head() {
    let mut queue = queue_of(&["p", "q"]);
    assert!(q_insert_head(queue.as_mut(), "x"));

    let mut buf = [0_u8; 8];
    let element = q_remove_head(queue.as_mut(), Some(&mut buf[..])).unwrap();
    assert_eq!(element.value(), "x");
    assert_eq!(&buf[..2], b"x\0");
    q_release_element(element);

    assert_eq!(q_size(queue.as_ref()), 2);
    assert_eq!(contents(&queue), ["p", "q"]);
}

#[test]
fn remove_copies_truncated_payload() {
    let mut queue = queue_of(&["aardvark", "bear"]);

    let mut buf = [0xff_u8; 5];
    let element = q_remove_tail(queue.as_mut(), Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"bear\0");
    q_release_element(element);

    let mut buf = [0xff_u8; 5];
    let element = q_remove_tail(queue.as_mut(), Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"aard\0");
    assert_eq!(element.value(), "aardvark");
    q_release_element(element);

    assert_eq!(q_size(queue.as_ref()), 0);
}

#[test]
fn removed_elements_outlive_the_queue() {
    let mut queue = queue_of(&["a", "b", "c"]);
    let element = q_remove_head(queue.as_mut(), None).unwrap();
    q_free(queue);
    assert_eq!(element.value(), "a");
    q_release_element(element);
}

#[test]
fn sort_scenarios() {
    let mut queue = queue_of(&["b", "a", "b", "c"]);
    q_sort(queue.as_mut());
    assert_eq!(contents(&queue), ["a", "b", "b", "c"]);

    q_sort(queue.as_mut());
    assert_eq!(contents(&queue), ["a", "b", "b", "c"]);
}

#[test]
fn delete_dup_scenario() {
    let mut queue = queue_of(&["a", "a", "b", "c", "c"]);
    assert!(q_delete_dup(queue.as_mut()));
    assert_eq!(contents(&queue), ["b"]);
    assert_eq!(q_size(queue.as_ref()), 1);
}

#[test]
fn delete_mid_scenario() {
    let mut queue = queue_of(&["a", "b", "c", "d", "e", "f"]);
    assert!(q_delete_mid(queue.as_mut()));
    assert_eq!(contents(&queue), ["a", "b", "c", "e", "f"]);

    let mut queue = queue_of(&["a"]);
    assert!(q_delete_mid(queue.as_mut()));
    assert_eq!(q_size(queue.as_ref()), 0);
}

#[test]
fn swap_scenario() {
    let mut queue = queue_of(&["a", "b", "c", "d", "e"]);
    q_swap(queue.as_mut());
    assert_eq!(contents(&queue), ["b", "a", "d", "c", "e"]);
}

#[test]
fn reverse_scenario() {
    let mut queue = queue_of(&["a", "b", "c"]);
    q_reverse(queue.as_mut());
    assert_eq!(contents(&queue), ["c", "b", "a"]);
    q_reverse(queue.as_mut());
    assert_eq!(contents(&queue), ["a", "b", "c"]);
}

#[test]
fn sort_then_delete_dup() {
    let mut queue = queue_of(&["c", "a", "b", "a", "d", "c", "c"]);
    q_sort(queue.as_mut());
    assert!(q_delete_dup(queue.as_mut()));
    assert_eq!(contents(&queue), ["b", "d"]);
}
