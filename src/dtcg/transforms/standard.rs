//! Standard transform definitions
//!
//! This module provides pre-built transforms for common use cases.
//! All transforms are defined as static references using `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;

use crate::dtcg::ast::Node;
use crate::dtcg::transforms::stages::{CompositeExpansion, Parsing, SchemaNormalization};
use crate::dtcg::transforms::Transform;

/// Type alias for text-to-text transforms
pub type TextTransform = Transform<String, String>;

/// Type alias for text-to-tree transforms
pub type TreeTransform = Transform<String, Node>;

/// Schema normalization transform: String → String
///
/// Renames the DTCG marker keys (`$value`, `$description`) to the internal
/// field names. This is the first stage of any token pipeline.
///
/// # Example
///
/// ```rust
/// use dtcg_parser::dtcg::transforms::standard::NORMALIZATION;
///
/// let text = NORMALIZATION
///     .run(r#"{"$value": "1px"}"#.to_string())
///     .unwrap();
/// assert_eq!(text, r#"{"value": "1px"}"#);
/// ```
pub static NORMALIZATION: Lazy<TextTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(SchemaNormalization::new()));

/// Parsing transform: String → Node
///
/// Normalizes marker keys and parses the document into the typed tree.
/// Composite tokens are left intact; use [`STRING_TO_TOKENS`] for the full
/// pipeline.
///
/// # Example
///
/// ```rust
/// use dtcg_parser::dtcg::transforms::standard::PARSING;
///
/// let tree = PARSING
///     .run(r#"{"color": {"$value": "black"}}"#.to_string())
///     .unwrap();
/// assert!(tree.as_group().is_some());
/// ```
pub static PARSING: Lazy<TreeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(SchemaNormalization::new())
        .then(Parsing::new())
});

/// Full standard pipeline: String → Node with composites expanded
///
/// 1. Schema normalization (`$value`/`$description` renaming)
/// 2. Document parsing
/// 3. Composite expansion (border, gradient, shadow, strokeStyle,
///    transition, typography)
///
/// This is the standard transform for most use cases; the result is the
/// tree handed to output generators.
pub static STRING_TO_TOKENS: Lazy<TreeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(SchemaNormalization::new())
        .then(Parsing::new())
        .then(CompositeExpansion::new())
});
