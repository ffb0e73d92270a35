//! Value type tests

use std::cmp::Ordering;

use array_object::{Element, Key, SortFlag, Value, array};

#[test]
fn test_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3), Value::Int(3));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Key::Int(4)), Value::Int(4));
    assert!(Value::from(array![1]).is_array());
}

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Bool(false).to_string(), "");
    assert_eq!(Value::Bool(true).to_string(), "1");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Float(3.0).to_string(), "3");
    assert_eq!(Value::from(array![1]).to_string(), "Array");
}

#[test]
fn test_truthiness() {
    let falsy_values = [
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(0.0),
        Value::from(""),
        Value::from("0"),
        Value::from(array![]),
    ];
    for falsy in falsy_values {
        assert!(!falsy.is_truthy(), "{falsy:?} should be falsy");
    }
    let truthy_values = [
        Value::from(true),
        Value::from(-1),
        Value::from("0.0"),
        Value::from(" "),
        Value::from(array![0]),
    ];
    for truthy in truthy_values {
        assert!(truthy.is_truthy(), "{truthy:?} should be truthy");
    }
}

#[test]
fn test_loose_and_strict_equality() {
    assert!(Value::from(12).loose_eq(&Value::from("12")));
    assert!(!Value::from(12).strict_eq(&Value::from("12")));
    assert!(Value::from("abc").loose_eq(&Value::from(true)));
    assert!(Value::Null.loose_eq(&Value::from("")));
    assert!(!Value::Null.loose_eq(&Value::from("0")));
    assert!(!Value::from(0).loose_eq(&Value::from("abc")));
}

#[test]
fn test_arrays_in_comparisons() {
    let short = Value::from(array![5, 6]);
    let long = Value::from(array![1, 2, 3]);
    assert_eq!(short.compare(&long, SortFlag::Regular), Ordering::Less);
    assert_eq!(long.compare(&Value::from(1000), SortFlag::Regular), Ordering::Greater);
    assert!(Value::from(array![1, "2"]).loose_eq(&Value::from(array![1, 2])));
    assert!(!Value::from(array![1, "2"]).strict_eq(&Value::from(array![1, 2])));
}

#[test]
fn test_record_fields() {
    let record = Value::from(array!["id" => 1, "name" => "bob"]);
    assert_eq!(record.field(&Key::from("name")), Some(&Value::from("bob")));
    assert_eq!(record.field(&Key::from("missing")), None);
    assert_eq!(Value::from(1).field(&Key::from("id")), None);
}

#[test]
fn test_to_key() {
    assert_eq!(Value::from("12").to_key(), Some(Key::Int(12)));
    assert_eq!(Value::from("a").to_key(), Some(Key::from("a")));
    assert_eq!(Value::from(1.5).to_key(), None);
    assert_eq!(Value::Null.to_key(), None);
}

#[test]
fn test_json_shapes() {
    let value: Value = serde_json::from_str(r#"[1, 2.5, "x", null, true, {"k": [ ]}]"#).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items.get(&Key::Int(1)), Some(&Value::Float(2.5)));
    assert_eq!(items.get(&Key::Int(3)), Some(&Value::Null));
    assert!(items.get(&Key::Int(5)).is_some_and(Value::is_array));

    assert_eq!(serde_json::to_string(&value).unwrap(), r#"[1,2.5,"x",null,true,{"k":[]}]"#);
}
