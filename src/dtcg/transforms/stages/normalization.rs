//! Schema normalization stage
//!
//! Rewrites DTCG marker keys in unparsed source text to the internal field
//! names: `$value` → `value`, `$description` → `comment`.

use crate::dtcg::parsing::normalize_schema;
use crate::dtcg::transforms::{Runnable, TransformError};

/// Schema normalization stage
///
/// Must run before parsing, since the substitution is textual.
///
/// # Input
/// - `String` - raw token document text
///
/// # Output
/// - `String` - text with marker keys renamed
pub struct SchemaNormalization;

impl SchemaNormalization {
    pub fn new() -> Self {
        SchemaNormalization
    }
}

impl Default for SchemaNormalization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for SchemaNormalization {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(normalize_schema(&input))
    }
}

// Also implement for &str for convenience
impl Runnable<&str, String> for SchemaNormalization {
    fn run(&self, input: &str) -> Result<String, TransformError> {
        Ok(normalize_schema(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_renamed() {
        let stage = SchemaNormalization::new();
        let result = stage
            .run(r#"{"$value": "", "$description": ""}"#.to_string())
            .unwrap();
        assert_eq!(result, r#"{"value": "", "comment": ""}"#);
    }

    #[test]
    fn test_unrelated_keys_are_untouched() {
        let stage = SchemaNormalization::new();
        let result = stage.run(r#"{"$type": "color"}"#).unwrap();
        assert_eq!(result, r#"{"$type": "color"}"#);
    }
}
