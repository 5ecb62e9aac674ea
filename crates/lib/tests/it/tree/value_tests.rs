//! Value type integration tests
//!
//! Covers conversions, accessors, comparisons and typed extraction on the
//! [`Value`] sum type.

use dotpath::{List, Map, Value};

#[test]
fn test_value_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(42i32), Value::Int(42));
    assert_eq!(Value::from(42u32), Value::Int(42));
    assert_eq!(Value::from("hello"), Value::Text("hello".to_string()));
    assert_eq!(Value::from("hello".to_string()), Value::Text("hello".to_string()));
}

#[test]
fn test_value_from_containers() {
    let map = Map::new().with("k", 1);
    assert_eq!(Value::from(map.clone()), Value::Map(map));

    let list: List = vec![1, 2].into();
    assert_eq!(Value::from(list.clone()), Value::List(list));

    // Vec goes through List
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::List(vec!["a", "b"].into())
    );
}

#[test]
fn test_value_from_option() {
    assert_eq!(Value::from(Some(5)), Value::Int(5));
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

#[test]
fn test_value_default_is_null() {
    assert_eq!(Value::default(), Value::Null);
    assert!(Value::default().is_null());
}

#[test]
fn test_value_leaf_and_branch_classification() {
    assert!(Value::Null.is_leaf());
    assert!(Value::Bool(true).is_leaf());
    assert!(Value::Int(1).is_leaf());
    assert!(Value::Text("x".into()).is_leaf());

    assert!(Value::Map(Map::new()).is_branch());
    assert!(Value::List(List::new()).is_branch());
}

#[test]
fn test_value_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Text("x".into()).type_name(), "text");
    assert_eq!(Value::List(List::new()).type_name(), "list");
    assert_eq!(Value::Map(Map::new()).type_name(), "map");
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Text("x".into()).as_text(), Some("x"));
    assert!(Value::Map(Map::new()).as_map().is_some());
    assert!(Value::List(List::new()).as_list().is_some());

    // cross-type access reads as None
    assert_eq!(Value::Int(7).as_bool(), None);
    assert_eq!(Value::Text("7".into()).as_int(), None);
    assert_eq!(Value::Null.as_text(), None);
}

#[test]
fn test_value_primitive_comparisons() {
    let text = Value::Text("hello".to_string());
    let number = Value::Int(42);
    let flag = Value::Bool(true);

    assert_eq!(text, "hello");
    assert_eq!("hello", text);
    assert_eq!(text, "hello".to_string());
    assert_eq!(number, 42i64);
    assert_eq!(number, 42i32);
    assert_eq!(flag, true);

    assert_ne!(text, 42);
    assert_ne!(number, "42");
    assert_ne!(flag, false);
}

#[test]
fn test_value_typed_extraction() {
    let value = Value::Int(42);

    assert_eq!(i64::try_from(&value).ok(), Some(42));
    assert_eq!(<&str>::try_from(&Value::Text("x".into())).ok(), Some("x"));
    assert_eq!(bool::try_from(&Value::Bool(true)).ok(), Some(true));
}

#[test]
fn test_value_typed_extraction_mismatch() {
    let err = i64::try_from(&Value::Text("42".into())).unwrap_err();

    assert!(err.is_type_mismatch());
    let message = err.to_string();
    assert!(message.contains("int"), "unexpected message: {message}");
    assert!(message.contains("text"), "unexpected message: {message}");

    // and through the crate-level error
    let crate_err: dotpath::Error = err.into();
    assert!(crate_err.is_type_error());
    assert_eq!(crate_err.module(), "tree");
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Text("hi".into()).to_string(), "hi");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
    assert_eq!(
        Value::Map(Map::new().with("a", 1).with("b", 2)).to_string(),
        "{a: 1, b: 2}"
    );
}

#[test]
fn test_list_push_and_iterate() {
    let mut list = List::new();
    list.push(1);
    list.push("two");
    list.push(Value::Null);

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&Value::Int(1)));
    assert_eq!(list.get(1), Some(&Value::Text("two".to_string())));
    assert_eq!(list.get(2), Some(&Value::Null));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_map_insert_replaces_in_place() {
    let mut map = Map::new().with("a", 1).with("b", 2);

    let old = map.insert("a", 10);
    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_map_equality_is_order_sensitive() {
    let ab = Map::new().with("a", 1).with("b", 2);
    let ba = Map::new().with("b", 2).with("a", 1);

    assert_ne!(ab, ba);
}
