// Copyright (C) Brian G. Milnes 2025

//! Tests for overload disambiguation

use javadoc2metadata::{MethodKey, OverloadCounter};

#[test]
fn test_indices_increase_from_one() {
    let mut counter = OverloadCounter::new();
    let key = MethodKey::new("doFoo", 1);

    assert_eq!(counter.next_index(key.clone()), 1);
    assert_eq!(counter.next_index(key.clone()), 2);
    assert_eq!(counter.next_index(key.clone()), 3);
    assert_eq!(counter.count(&key), 3);
}

#[test]
fn test_arity_is_part_of_key() {
    let mut counter = OverloadCounter::new();

    assert_eq!(counter.next_index(MethodKey::new("doFoo", 1)), 1);
    assert_eq!(counter.next_index(MethodKey::new("doFoo", 1)), 2);
    assert_eq!(counter.next_index(MethodKey::new("doFoo", 2)), 1);
    assert_eq!(counter.next_index(MethodKey::new("doBar", 1)), 1);
}

#[test]
fn test_name_and_arity_do_not_collide() {
    // "foo1" with arity 1 and "foo" with arity 11 are different keys.
    let mut counter = OverloadCounter::new();

    assert_eq!(counter.next_index(MethodKey::new("foo1", 1)), 1);
    assert_eq!(counter.next_index(MethodKey::new("foo", 11)), 1);
}

#[test]
fn test_fresh_counter_restarts() {
    let mut first = OverloadCounter::new();
    first.next_index(MethodKey::new("doFoo", 1));
    first.next_index(MethodKey::new("doFoo", 1));

    let mut second = OverloadCounter::new();
    assert!(second.is_empty());
    assert_eq!(second.next_index(MethodKey::new("doFoo", 1)), 1);
}
