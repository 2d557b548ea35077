//! Schema normalization and document parsing
//!
//! DTCG documents mark token fields with sigil-prefixed keys (`$value`,
//! `$description`). Normalization rewrites those markers to the internal
//! field names `value` and `comment` with a textual pass over the unparsed
//! source, then the document is parsed into the typed tree.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dtcg::ast::{Group, Node};

static VALUE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#""\$?value"\s*:"#).unwrap());
static DESCRIPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\$?description"\s*:"#).unwrap());
static TOKEN_SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.tokens\.json$|\.tokens$|\.json$").unwrap());

/// Error raised when a token document cannot be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The source text is not valid JSON after normalization.
    InvalidJson(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidJson(message) => {
                write!(f, "invalid token document: {}", message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Rewrite DTCG marker keys to their internal names: `$value` (or bare
/// `value`) becomes `value`, `$description` (or bare `description`) becomes
/// `comment`.
///
/// Runs on unparsed text, before JSON parsing. A marker spelled inside a
/// string value gets rewritten too; accepted limitation of the textual
/// pass, since the markers only match a quoted key followed by a colon.
pub fn normalize_schema(source: &str) -> String {
    let renamed = VALUE_MARKER.replace_all(source, "\"value\":");
    DESCRIPTION_MARKER
        .replace_all(&renamed, "\"comment\":")
        .into_owned()
}

/// Parse normalized token-document text into a tree.
///
/// Empty or blank text parses to an empty group. Invalid JSON is fatal; no
/// partial tree is returned.
pub fn parse_document(source: &str) -> Result<Node, ParseError> {
    if source.trim().is_empty() {
        return Ok(Node::Group(Group::new()));
    }
    let value = serde_json::from_str(source)
        .map_err(|error| ParseError::InvalidJson(error.to_string()))?;
    Ok(Node::from_value(value))
}

/// Normalize marker keys and parse, without composite expansion.
///
/// The full pipeline (including expansion) is available through
/// [`crate::dtcg::transforms::standard::STRING_TO_TOKENS`] or
/// [`crate::dtcg::loader::DocumentLoader::parse`].
pub fn parse_tokens(source: &str) -> Result<Node, ParseError> {
    parse_document(&normalize_schema(source))
}

/// Whether a path names a token source document (`.json`, `.tokens.json`,
/// or `.tokens`).
pub fn is_token_source<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_str()
        .is_some_and(|path| TOKEN_SOURCE.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn markers_are_renamed_with_and_without_sigil() {
        assert_eq!(normalize_schema(r#"{"$value": 1}"#), r#"{"value": 1}"#);
        assert_eq!(normalize_schema(r#"{"value": 1}"#), r#"{"value": 1}"#);
        assert_eq!(
            normalize_schema(r#"{"$description": "x"}"#),
            r#"{"comment": "x"}"#
        );
        assert_eq!(
            normalize_schema(r#"{"description": "x"}"#),
            r#"{"comment": "x"}"#
        );
    }

    #[test]
    fn whitespace_before_the_colon_is_absorbed() {
        assert_eq!(normalize_schema("{\"$value\" : 1}"), "{\"value\": 1}");
    }

    #[test]
    fn blank_documents_parse_to_an_empty_group() {
        for source in ["", "   ", "\n\t"] {
            let node = parse_tokens(source).unwrap();
            assert_eq!(node.to_value(), json!({}));
        }
    }

    #[test]
    fn invalid_json_is_fatal() {
        assert!(matches!(
            parse_tokens("{not json"),
            Err(ParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn token_source_paths_are_recognized() {
        assert!(is_token_source("theme.json"));
        assert!(is_token_source("theme.tokens.json"));
        assert!(is_token_source("theme.tokens"));
        assert!(!is_token_source("theme.yaml"));
        assert!(!is_token_source("tokens"));
    }
}
