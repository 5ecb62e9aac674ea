//! Serialization integration tests
//!
//! The serde representation of a tree is its natural JSON shape, with map
//! keys in insertion order. Floats and numbers beyond i64 have no tree
//! form and are rejected rather than coerced.

use dotpath::{Map, Value};
use serde_json::json;

use crate::helpers::{assert_key_order, nested_tree};

#[test]
fn test_map_serializes_in_insertion_order() {
    let map = Map::new().with("b", 2).with("a", 1).with("c", 3);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1,"c":3}"#);
}

#[test]
fn test_map_json_round_trip() {
    let tree = nested_tree().with("flag", true).with("name", "x");

    let json = serde_json::to_string(&tree).unwrap();
    let back: Map = serde_json::from_str(&json).unwrap();

    assert_eq!(back, tree);
}

#[test]
fn test_from_json_str_keeps_document_order() {
    let tree = Map::from_json_str(r#"{"z": 1, "a": {"m": 2, "b": 3}}"#).unwrap();

    assert_key_order(&tree, &["z", "a"]);
    let inner = tree.fetch_ref("a").and_then(Value::as_map).unwrap();
    assert_key_order(inner, &["m", "b"]);
}

#[test]
fn test_value_serializes_untagged() {
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(serde_json::to_string(&Value::Int(5)).unwrap(), "5");
    assert_eq!(
        serde_json::to_string(&Value::Text("hi".into())).unwrap(),
        "\"hi\""
    );
    assert_eq!(
        serde_json::to_string(&Value::from(vec![1, 2])).unwrap(),
        "[1,2]"
    );
}

#[test]
fn test_value_deserializes_from_natural_json() {
    assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Null);
    assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::Bool(true));
    assert_eq!(serde_json::from_str::<Value>("5").unwrap(), Value::Int(5));
    assert_eq!(
        serde_json::from_str::<Value>("\"hi\"").unwrap(),
        Value::Text("hi".into())
    );
    assert_eq!(
        serde_json::from_str::<Value>("[1,2]").unwrap(),
        Value::from(vec![1, 2])
    );
}

#[test]
fn test_from_json_str_rejects_floats() {
    let err = Map::from_json_str(r#"{"a": 1.5}"#).unwrap_err();

    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_from_json_str_rejects_non_objects() {
    assert!(Map::from_json_str("[1,2]").is_err());
    assert!(Map::from_json_str("5").is_err());
}

#[test]
fn test_json_value_bridge_out() {
    let tree = Map::new()
        .with("n", 5)
        .with("s", "x")
        .with("list", vec![1, 2])
        .with("nested", Map::new().with("flag", true));

    let json: serde_json::Value = Value::Map(tree).into();

    assert_eq!(
        json,
        json!({"n": 5, "s": "x", "list": [1, 2], "nested": {"flag": true}})
    );
}

#[test]
fn test_json_value_bridge_in() {
    let value = Value::try_from(json!({"a": {"b": 2}, "items": [1, "x", null]})).unwrap();

    let map = value.as_map().unwrap();
    assert_eq!(map.fetch("a.b", 0), 2);
    let items = map.fetch_ref("items").and_then(Value::as_list).unwrap();
    assert_eq!(items.get(2), Some(&Value::Null));
}

#[test]
fn test_json_value_bridge_rejects_floats() {
    let err = Value::try_from(json!(1.5)).unwrap_err();
    assert!(err.is_unsupported_json());

    // nested floats are caught too
    let err = Value::try_from(json!({"a": [1, 2.5]})).unwrap_err();
    assert!(err.is_unsupported_json());
}

#[test]
fn test_to_json_string_ordering_and_escaping() {
    let map = Map::new()
        .with("b", "say \"hi\"")
        .with("a", "back\\slash");

    assert_eq!(
        map.to_json_string(),
        r#"{"b":"say \"hi\"","a":"back\\slash"}"#
    );
}

#[test]
fn test_to_json_string_escapes_control_characters() {
    let map = Map::new()
        .with("text", "line1\nline2\ttabbed")
        .with("low", "\u{1}");

    let json = map.to_json_string();
    assert_eq!(json, r#"{"text":"line1\nline2\ttabbed","low":"\u0001"}"#);

    // the output parses back to the same tree
    assert_eq!(Map::from_json_str(&json).unwrap(), map);
}

#[test]
fn test_to_json_string_matches_serde() {
    // the hand-rolled display form and the serde form agree, control
    // characters and quoting included
    let tree = nested_tree()
        .with("flag", true)
        .with("quoted", "say \"hi\"\n\r\u{8}\u{c}\u{1f}");

    assert_eq!(tree.to_json_string(), serde_json::to_string(&tree).unwrap());
}
