//! Model-based checks of the queue against a `Vec<String>`.

use cyclic_queue::Queue;
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<String>> {
    // a small alphabet, so that duplicates are common
    prop::collection::vec("[a-d]{0,2}", 0..40)
}

fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(String::from).collect()
}

#[derive(Debug, Clone)]
enum Op {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    RemoveTail,
    DeleteMid,
    Swap,
    Reverse,
    Sort,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(Op::InsertHead),
        "[a-c]{1,2}".prop_map(Op::InsertTail),
        Just(Op::RemoveHead),
        Just(Op::RemoveTail),
        Just(Op::DeleteMid),
        Just(Op::Swap),
        Just(Op::Reverse),
        Just(Op::Sort),
    ]
}

proptest! {
    #[test]
    fn sort_matches_vec(input in values()) {
        let mut queue = Queue::from_iter(input.iter().map(String::as_str));
        let mut expected = input;
        expected.sort();

        queue.sort();
        prop_assert_eq!(contents(&queue), expected.clone());
        prop_assert_eq!(queue.len(), expected.len());

        queue.sort();
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn sort_is_stable(input in values()) {
        let mut queue = Queue::new();
        let mut expected = Vec::new();
        for value in &input {
            expected.push((value.clone(), queue.insert_tail(value).unwrap()));
        }
        // `sort_by` is stable, so equal values keep their insertion order
        expected.sort_by(|a, b| a.0.cmp(&b.0));

        queue.sort();
        let mut cursor = queue.cursor_start();
        let mut handles = Vec::new();
        while let Some(handle) = cursor.handle() {
            handles.push(handle);
            cursor.move_next_cyclic();
        }
        let expected = expected.into_iter().map(|(_, handle)| handle).collect::<Vec<_>>();
        prop_assert_eq!(handles, expected);
    }

    #[test]
    fn delete_dup_keeps_unique_values(input in values()) {
        let mut sorted = input;
        sorted.sort();
        let mut queue = Queue::from_iter(sorted.iter().map(String::as_str));

        let expected = sorted
            .iter()
            .filter(|value| sorted.iter().filter(|other| other == value).count() == 1)
            .cloned()
            .collect::<Vec<_>>();
        let deleted = queue.delete_dup();
        prop_assert_eq!(deleted, sorted.len() - expected.len());
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn reverse_twice_is_identity(input in values()) {
        let mut queue = Queue::from_iter(input.iter().map(String::as_str));
        queue.reverse();
        let mut reversed = input.clone();
        reversed.reverse();
        prop_assert_eq!(contents(&queue), reversed);
        queue.reverse();
        prop_assert_eq!(contents(&queue), input);
    }

    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut queue = Queue::new();
        let mut model: Vec<String> = Vec::new();
        for op in ops {
            match op {
                Op::InsertHead(value) => {
                    queue.insert_head(&value).unwrap();
                    model.insert(0, value);
                }
                Op::InsertTail(value) => {
                    queue.insert_tail(&value).unwrap();
                    model.push(value);
                }
                Op::RemoveHead => {
                    let removed = queue.remove_head().map(|e| e.into_value());
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(removed, expected);
                }
                Op::RemoveTail => {
                    let removed = queue.remove_tail().map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop());
                }
                Op::DeleteMid => {
                    prop_assert_eq!(queue.delete_mid(), !model.is_empty());
                    if !model.is_empty() {
                        model.remove(model.len() / 2);
                    }
                }
                Op::Swap => {
                    for pair in model.chunks_mut(2) {
                        pair.reverse();
                    }
                    queue.swap_pairs();
                }
                Op::Reverse => {
                    model.reverse();
                    queue.reverse();
                }
                Op::Sort => {
                    model.sort();
                    queue.sort();
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(contents(&queue), model.clone());
            prop_assert_eq!(queue.iter().rev().count(), model.len());
        }
    }
}
