//! Document parsing stage
//!
//! Converts normalized token-document text into the typed token tree.

use crate::dtcg::ast::Node;
use crate::dtcg::parsing::parse_document;
use crate::dtcg::transforms::{Runnable, TransformError};

/// Document parsing stage
///
/// Empty or blank input parses to an empty group; invalid JSON fails the
/// stage.
///
/// # Input
/// - `String` - normalized token document text
///
/// # Output
/// - `Node` - the token tree, composite tokens still intact
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Default for Parsing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Node> for Parsing {
    fn run(&self, input: String) -> Result<Node, TransformError> {
        parse_document(&input).map_err(|error| TransformError::StageFailed {
            stage: "parsing".to_string(),
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parsing_builds_a_tree() {
        let stage = Parsing::new();
        let node = stage
            .run(r##"{"color": {"accent": {"value": "#f0a"}}}"##.to_string())
            .unwrap();
        assert_eq!(
            node.to_value(),
            json!({ "color": { "accent": { "value": "#f0a" } } })
        );
    }

    #[test]
    fn test_parsing_empty_input() {
        let stage = Parsing::new();
        let node = stage.run(String::new()).unwrap();
        assert_eq!(node.to_value(), json!({}));
    }

    #[test]
    fn test_parsing_reports_the_failing_stage() {
        let stage = Parsing::new();
        let error = stage.run("{broken".to_string()).unwrap_err();
        assert!(matches!(
            error,
            TransformError::StageFailed { stage, .. } if stage == "parsing"
        ));
    }
}
