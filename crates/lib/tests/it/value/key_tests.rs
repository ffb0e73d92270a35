//! Key normalization tests

use array_object::{Key, OrderedMap, array};

#[test]
fn test_numeric_strings_become_ints() {
    assert_eq!(Key::from("12"), Key::Int(12));
    assert_eq!(Key::from("-5"), Key::Int(-5));
    assert_eq!(Key::from("0"), Key::Int(0));
    assert_eq!(Key::from(String::from("42")), Key::Int(42));
}

#[test]
fn test_non_canonical_strings_stay_strings() {
    for s in ["012", "-0", "+1", " 1", "1.5", "1e3", "", "99999999999999999999"] {
        assert_eq!(Key::from(s), Key::Str(s.to_string()), "{s:?} should stay a string");
    }
}

#[test]
fn test_key_display_and_case() {
    assert_eq!(Key::Int(-3).to_string(), "-3");
    assert_eq!(Key::from("Name").to_lowercase(), Key::from("name"));
    assert_eq!(Key::from("Name").to_uppercase(), Key::from("NAME"));
    assert_eq!(Key::Int(7).to_uppercase(), Key::Int(7));
}

#[test]
fn test_map_uses_normalized_keys() {
    let map = array!["12" => "twelve", 12 => "TWELVE"];
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Key::Int(12)).map(|v| v.to_string()), Some("TWELVE".to_string()));
}

#[test]
fn test_next_int_key() {
    let mut map: OrderedMap<i64> = OrderedMap::new();
    assert_eq!(map.append(1), Key::Int(0));
    map.insert(-10, 2);
    assert_eq!(map.append(3), Key::Int(1));
    map.insert("20", 4);
    assert_eq!(map.append(5), Key::Int(21));
    map.remove(&Key::Int(21));
    assert_eq!(map.append(6), Key::Int(22));
}
