use array_object::{ArrayObject, Key, OrderedMap, UpdateCounter, Value, array};

/// Array object with a counting hook
pub type Counted = ArrayObject<Value, UpdateCounter>;

/// Wraps `map` in an array object that counts hook calls
pub fn counted(map: OrderedMap<Value>) -> Counted {
    ArrayObject::from(map)
}

/// `[10 => "ten", 11 => "eleven", 12 => "twelve"]`
pub fn numbers() -> Counted {
    counted(array![10 => "ten", 11 => "eleven", 12 => "twelve"])
}

/// Two user records with string and integer fields
pub fn users() -> Counted {
    counted(array![
        array!["id" => 1, "name" => "bob", 5 => "BOB"],
        array!["id" => 2, "name" => "jim", 5 => "JIM"],
    ])
}

/// The array's keys
pub fn keys(array: &Counted) -> Vec<Key> {
    array.keys()
}

/// Shorthand for a vector of keys
pub fn key_vec<K: Into<Key>, const N: usize>(keys: [K; N]) -> Vec<Key> {
    keys.into_iter().map(Into::into).collect()
}

/// The array's values as text
pub fn texts(array: &Counted) -> Vec<String> {
    array.iter().map(|(_, v)| v.to_string()).collect()
}
