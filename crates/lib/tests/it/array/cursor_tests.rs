//! Cursor navigation tests
//!
//! The cursor moves only through the navigation methods and the mutations
//! that reset it. `offset_set`, `append` and `push` leave it alone.

use array_object::{Cursor, Key, SortFlag, Value, array};

use crate::helpers::*;

fn letters() -> Counted {
    counted(array![100 => "a", 101 => "b", 102 => "c"])
}

/// `[101 => 'b', 100 => 'a', 103 => 'd', 102 => 'c']`, cursor on the last entry
fn at_end() -> Counted {
    let mut array = counted(array![101 => "b", 100 => "a", 103 => "d", 102 => "c"]);
    array.end();
    array
}

// ===== NAVIGATION =====

#[test]
fn test_navigation_sequence() {
    let mut array = letters();
    assert_eq!(array.current(), Some(&Value::from("a")));
    assert_eq!(array.key(), Some(&Key::Int(100)));

    assert_eq!(array.next(), Some(&Value::from("b")));
    assert_eq!(array.next(), Some(&Value::from("c")));
    assert_eq!(array.key(), Some(&Key::Int(102)));

    assert_eq!(array.next(), None);
    assert_eq!(array.key(), None);
    assert_eq!(array.cursor(), Cursor::OutOfBounds);

    // out of bounds is sticky in both directions
    assert_eq!(array.prev(), None);
    assert_eq!(array.next(), None);

    assert_eq!(array.reset(), Some(&Value::from("a")));
    assert_eq!(array.end(), Some(&Value::from("c")));
    assert_eq!(array.prev(), Some(&Value::from("b")));
    assert_eq!(array.key(), Some(&Key::Int(101)));
}

#[test]
fn test_prev_from_first_falls_off() {
    let mut array = letters();
    assert_eq!(array.prev(), None);
    assert_eq!(array.cursor(), Cursor::OutOfBounds);
    assert_eq!(array.end(), Some(&Value::from("c")));
}

#[test]
fn test_navigation_never_fires_hook() {
    let mut array = letters();
    array.next();
    array.prev();
    array.end();
    array.reset();
    array.seek(1);
    assert_eq!(array.hook().count(), 0);
}

#[test]
fn test_empty_array_navigation() {
    let mut array = counted(array![]);
    assert_eq!(array.current(), None);
    assert_eq!(array.key(), None);
    assert_eq!(array.next(), None);
    assert_eq!(array.end(), None);
    assert_eq!(array.cursor(), Cursor::OutOfBounds);
}

#[test]
fn test_cursor_is_independent_of_iteration() {
    let mut array = letters();
    array.next();
    let seen: Vec<String> = array.iter().map(|(_, v)| v.to_string()).collect();
    assert_eq!(seen, ["a", "b", "c"]);
    assert_eq!(array.key(), Some(&Key::Int(101)));
}

// ===== RESET MATRIX =====

#[test]
fn test_mutations_that_keep_cursor() {
    let keepers: [(&str, fn(&mut Counted)); 3] = [
        ("push", |a: &mut Counted| {
            a.push([Value::from("e")]);
        }),
        ("append", |a: &mut Counted| {
            a.append(Value::from("e"));
        }),
        ("offset_set", |a: &mut Counted| {
            a.offset_set(Some(Key::Int(100)), Value::from("A"));
        }),
    ];

    for (name, mutate) in keepers {
        let mut array = at_end();
        mutate(&mut array);
        assert_eq!(array.key(), Some(&Key::Int(102)), "{name} moved the cursor");
    }
}

#[test]
fn test_mutations_that_reset_cursor() {
    let resetters: [(&str, fn(&mut Counted)); 12] = [
        ("pop", |a: &mut Counted| {
            a.pop();
        }),
        ("shift", |a: &mut Counted| {
            a.shift();
        }),
        ("unshift", |a: &mut Counted| {
            a.unshift([Value::from("z")]);
        }),
        ("offset_unset", |a: &mut Counted| {
            a.offset_unset(100);
        }),
        ("sort", |a: &mut Counted| a.sort(SortFlag::Regular)),
        ("a_sort", |a: &mut Counted| a.a_sort(SortFlag::Regular)),
        ("k_sort", |a: &mut Counted| a.k_sort(SortFlag::Regular)),
        ("nat_sort", |a: &mut Counted| a.nat_sort()),
        ("reverse", |a: &mut Counted| a.reverse(true)),
        ("shuffle", |a: &mut Counted| a.shuffle()),
        ("change_key_case", |a: &mut Counted| {
            a.change_key_case(Default::default())
        }),
        ("exchange_array", |a: &mut Counted| {
            a.exchange_array(array!["x", "y"]);
        }),
    ];

    for (name, mutate) in resetters {
        let mut array = at_end();
        mutate(&mut array);
        assert_eq!(array.cursor(), Cursor::At(0), "{name} should reset the cursor");
        assert_eq!(array.key(), array.key_first(), "{name} should point at the first entry");
    }
}

#[test]
fn test_reset_after_sort_points_at_smallest() {
    let mut array = at_end();
    array.a_sort(SortFlag::Regular);
    assert_eq!(array.current(), Some(&Value::from("a")));
    assert_eq!(array.key(), Some(&Key::Int(100)));
}
