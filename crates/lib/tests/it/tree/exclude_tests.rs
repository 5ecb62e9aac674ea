//! Exclude-specific integration tests
//!
//! Exclude removes the entry at a path and is a no-op for anything that
//! does not resolve, so it is idempotent.

use dotpath::Map;

use crate::helpers::{assert_key_order, long_path, nested_tree};

#[test]
fn test_exclude_removes_nested_entry() {
    let tree = Map::new().with("a", Map::new().with("b", 5).with("c", 6));

    let pruned = tree.exclude("a.b");

    assert!(!pruned.ping("a.b"));
    assert_eq!(pruned.fetch("a.c", 0), 6);
}

#[test]
fn test_exclude_removes_root_entry() {
    let tree = nested_tree().exclude("top");

    assert!(!tree.ping("top"));
    assert_eq!(tree.fetch("a.b", 0), 2);
}

#[test]
fn test_exclude_absent_path_is_a_no_op() {
    let tree = nested_tree();

    assert_eq!(tree.exclude("missing"), tree);
    assert_eq!(tree.exclude("a.missing"), tree);
    assert_eq!(tree.exclude("missing.deeper"), tree);
}

#[test]
fn test_exclude_is_idempotent() {
    let once = nested_tree().exclude("a.b");
    let twice = once.exclude("a.b");

    assert_eq!(once, twice);
}

#[test]
fn test_exclude_through_scalar_is_a_no_op() {
    // "a.b" is 2; there is no "a.b.c" to remove and nothing is disturbed.
    let tree = nested_tree();

    assert_eq!(tree.exclude("a.b.c"), tree);
    assert_eq!(tree.exclude("top.anything"), tree);
}

#[test]
fn test_exclude_preserves_sibling_order() {
    let tree = Map::new()
        .with("x", 1)
        .with("a", Map::new().with("b", 2).with("c", 3))
        .with("y", 4)
        .exclude("a.b");

    assert_key_order(&tree, &["x", "a", "y"]);
    assert_eq!(tree.fetch("a.c", 0), 3);
}

#[test]
fn test_exclude_leaves_original_untouched() {
    let tree = nested_tree();
    let snapshot = tree.clone();

    let _ = tree.exclude("a.b");

    assert_eq!(tree, snapshot);
}

#[test]
fn test_exclude_empty_path_targets_empty_key() {
    // "" tokenizes to a single blank segment: a removal of the literal ""
    // key, present or not.
    let tree = Map::new().with("", 1).with("a", 2);

    let pruned = tree.exclude("");
    assert!(!pruned.contains_key(""));
    assert_eq!(pruned.fetch("a", 0), 2);

    // and a no-op when no such key exists
    let plain = nested_tree();
    assert_eq!(plain.exclude(""), plain);
}

#[test]
fn test_exclude_retracts_extend() {
    let base = nested_tree();
    let written = base.extend("a.c.new", 9);

    assert_eq!(written.exclude("a.c.new"), base);
}

#[test]
fn test_exclude_overlong_path_is_a_no_op() {
    let tree = nested_tree();

    assert_eq!(tree.exclude(long_path(300).as_str()), tree);
}
