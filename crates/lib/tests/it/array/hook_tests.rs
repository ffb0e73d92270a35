//! Mutation hook tests
//!
//! Every mutating call fires the hook exactly once; every read leaves it at
//! zero.

use std::cell::Cell;
use std::rc::Rc;

use array_object::{
    ArrayObject, Key, KeyCase, MutationHook, OrderedMap, SortFlag, UpdateCounter, Value, array,
};

use crate::helpers::*;

/// `[10 => 'ten', 11 => 'eleven', 12 => 'twelve', 'tWeNtY' => 20, 'zero' => 0, 'false' => false]`
fn fixture() -> OrderedMap<Value> {
    array![
        10 => "ten",
        11 => "eleven",
        12 => "twelve",
        "tWeNtY" => 20,
        "zero" => 0,
        "false" => false,
    ]
}

type Step = (&'static str, fn(&mut Counted));

#[test]
fn test_mutators_fire_once_and_change_contents() {
    let mutators: [Step; 20] = [
        ("offset_set", |a: &mut Counted| {
            a.offset_set(Some(Key::from("new")), Value::from(1));
        }),
        ("append", |a: &mut Counted| {
            a.append(Value::from(1));
        }),
        ("offset_unset", |a: &mut Counted| {
            a.offset_unset(10);
        }),
        ("exchange_array", |a: &mut Counted| {
            a.exchange_array(array![1, 2]);
        }),
        ("change_key_case", |a: &mut Counted| a.change_key_case(KeyCase::Upper)),
        ("reverse", |a: &mut Counted| a.reverse(true)),
        ("shuffle", |a: &mut Counted| a.shuffle()),
        ("push", |a: &mut Counted| {
            a.push([Value::from("x")]);
        }),
        ("pop", |a: &mut Counted| {
            a.pop();
        }),
        ("shift", |a: &mut Counted| {
            a.shift();
        }),
        ("unshift", |a: &mut Counted| {
            a.unshift([Value::from("x")]);
        }),
        ("sort", |a: &mut Counted| a.sort(SortFlag::String)),
        ("r_sort", |a: &mut Counted| a.r_sort(SortFlag::String)),
        ("a_sort", |a: &mut Counted| a.a_sort(SortFlag::String)),
        ("a_r_sort", |a: &mut Counted| a.a_r_sort(SortFlag::String)),
        ("k_sort", |a: &mut Counted| a.k_sort(SortFlag::String)),
        ("k_r_sort", |a: &mut Counted| a.k_r_sort(SortFlag::String)),
        ("nat_case_sort", |a: &mut Counted| a.nat_case_sort()),
        ("u_a_sort", |a: &mut Counted| {
            a.u_a_sort(|x, y| x.to_string().cmp(&y.to_string()))
        }),
        ("unserialize", |a: &mut Counted| {
            a.unserialize(r#"{"a":1}"#).unwrap();
        }),
    ];

    for (name, mutate) in mutators {
        let mut array = counted(fixture());
        mutate(&mut array);
        assert_eq!(array.hook().count(), 1, "{name} should fire the hook once");
        assert_ne!(array, fixture(), "{name} should change the contents");
    }
}

#[test]
fn test_reads_never_fire() {
    let array = counted(fixture());
    let ten = Value::from("ten");

    array.chunk(2, false);
    array.contains(&ten, false);
    array.filter(|v| v.as_int().is_some());
    array.filter_truthy();
    array.in_array(&ten, true);
    array.is_list();
    array.key_exists("zero");
    array.key_first();
    array.key_last();
    array.keys();
    array.keys_of(&ten, false);
    array.rand(2).unwrap();
    array.search(&ten, false);
    array.slice(1, Some(2), true);
    array.unique(SortFlag::Regular);
    array.values();
    array.flip();
    array.map(|v| v.to_string());
    array.max().unwrap();
    array.serialize().unwrap();
    array.get_array_copy();
    array.offset_get(12);

    assert_eq!(array.hook().count(), 0);
}

#[test]
fn test_mutating_with_no_effect_still_fires() {
    let mut array = counted(fixture());
    array.offset_unset("missing");
    array.pop();
    array.push([]);
    assert_eq!(array.hook().count(), 3);
}

#[test]
fn test_copy_is_independent() {
    let mut array = counted(fixture());
    let copy = array.get_array_copy();
    array.offset_set(Some(Key::Int(10)), Value::from("TEN"));
    assert_eq!(copy.get(&Key::Int(10)), Some(&Value::from("ten")));
    assert_eq!(array.hook().count(), 1);
}

// ===== CUSTOM HOOKS =====

/// Shares its counter with the test through an `Rc`
#[derive(Default, Clone)]
struct Shared(Rc<Cell<usize>>);

impl MutationHook for Shared {
    fn on_after_update(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_custom_hook() {
    let calls = Shared::default();
    let mut array = ArrayObject::from_map_with_hook(fixture(), calls.clone());
    array.sort(SortFlag::String);
    array.append(Value::Null);
    array.slice(0, None, false);
    assert_eq!(calls.0.get(), 2);
}

#[test]
fn test_hook_can_be_reset() {
    let mut array: ArrayObject<Value, UpdateCounter> = ArrayObject::default();
    array.append(Value::from(1));
    array.hook_mut().clear();
    array.append(Value::from(2));
    assert_eq!(array.hook().count(), 1);
}

#[test]
fn test_clone_keeps_hook_state() {
    let mut array = counted(fixture());
    array.pop();
    let mut clone = array.clone();
    clone.pop();
    assert_eq!(array.hook().count(), 1);
    assert_eq!(clone.hook().count(), 2);
}
