//! Token document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading token
//! source text from files or strings and running transforms on it. Used by
//! both production code and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use dtcg_parser::dtcg::loader::DocumentLoader;
//!
//! // From file
//! let tree = DocumentLoader::from_path("theme.tokens.json")?.parse()?;
//!
//! // From string
//! let tree = DocumentLoader::from_string(r#"{"color": {"$value": "black"}}"#)
//!     .parse()?;
//! ```

use std::fs;
use std::path::Path;

use crate::dtcg::ast::Node;
use crate::dtcg::transforms::standard::{PARSING, STRING_TO_TOKENS};
use crate::dtcg::transforms::{Transform, TransformError};

/// Error that can occur when loading token documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    Io(String),
    /// Transform/parsing error
    Transform(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Transform(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::Transform(err)
    }
}

/// Token document loader with transform shortcuts
///
/// Loads source text and runs transforms on it. [`DocumentLoader::parse`]
/// runs the full standard pipeline (normalize, parse, expand composites);
/// [`DocumentLoader::parse_unexpanded`] stops before expansion, which is
/// useful for inspecting a document as the author wrote it.
#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    ///
    /// This is the generic method the shortcuts use internally.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse the source into the finished token tree
    ///
    /// Shortcut for `.with(&STRING_TO_TOKENS)`: marker keys renamed, JSON
    /// parsed, composite tokens expanded.
    pub fn parse(&self) -> Result<Node, LoaderError> {
        self.with(&STRING_TO_TOKENS)
    }

    /// Parse the source without composite expansion
    ///
    /// Shortcut for `.with(&PARSING)`.
    pub fn parse_unexpanded(&self) -> Result<Node, LoaderError> {
        self.with(&PARSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_string_parses() {
        let tree = DocumentLoader::from_string(r#"{"spacing": {"$value": "4px"}}"#)
            .parse()
            .unwrap();
        assert_eq!(tree.to_value(), json!({ "spacing": { "value": "4px" } }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let error = DocumentLoader::from_path("no/such/file.tokens.json").unwrap_err();
        assert!(matches!(error, LoaderError::Io(_)));
    }

    #[test]
    fn test_parse_errors_surface_as_transform_errors() {
        let error = DocumentLoader::from_string("{broken").parse().unwrap_err();
        assert!(matches!(error, LoaderError::Transform(_)));
    }
}
