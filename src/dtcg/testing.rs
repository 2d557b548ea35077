//! Testing utilities for token tree assertions
//!
//! Tests compare whole trees against literal JSON expectations instead of
//! poking at individual fields: one assertion pins the full output shape,
//! and a mismatch prints both trees side by side.

use serde_json::Value;

use crate::dtcg::ast::Node;

/// Assert that a token tree serializes to exactly the expected JSON.
///
/// Comparison is structural; object key order is not significant.
pub fn assert_tree(actual: &Node, expected: &Value) {
    let actual = actual.to_value();
    assert!(
        &actual == expected,
        "token tree mismatch\n--- actual ---\n{}\n--- expected ---\n{}",
        serde_json::to_string_pretty(&actual).unwrap_or_default(),
        serde_json::to_string_pretty(expected).unwrap_or_default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matching_trees_pass() {
        let node = Node::from_value(json!({ "a": { "value": 1 } }));
        assert_tree(&node, &json!({ "a": { "value": 1 } }));
    }

    #[test]
    #[should_panic(expected = "token tree mismatch")]
    fn mismatching_trees_panic() {
        let node = Node::from_value(json!({ "a": { "value": 1 } }));
        assert_tree(&node, &json!({ "a": { "value": 2 } }));
    }
}
