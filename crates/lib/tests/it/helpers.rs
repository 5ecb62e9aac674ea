use dotpath::{Map, Value};

/// A small nested tree used across the operation tests:
/// `{"a": {"b": 2, "c": {"d": 3}}, "top": 1}`
pub fn nested_tree() -> Map {
    Map::new()
        .with(
            "a",
            Map::new()
                .with("b", 2)
                .with("c", Map::new().with("d", 3)),
        )
        .with("top", 1)
}

/// Assert that a Map contains the expected keys, in the expected order.
pub fn assert_key_order(map: &Map, expected: &[&str]) {
    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, expected, "key order mismatch in {map}");
}

/// Assert that fetching `path` yields the expected integer.
pub fn assert_fetch_int(map: &Map, path: &str, expected: i64) {
    match map.fetch_ref(path) {
        Some(Value::Int(n)) => assert_eq!(*n, expected, "value mismatch at '{path}'"),
        Some(other) => panic!("expected int at '{path}', got: {other:?}"),
        None => panic!("path '{path}' not found in {map}"),
    }
}

/// Builds a dotted path with the given number of segments ("s.s.s...").
pub fn long_path(segments: usize) -> String {
    vec!["s"; segments].join(".")
}
