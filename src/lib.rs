//! # dtcg-parser
//!
//! A parser for Design Tokens Community Group (DTCG) token documents.
//!
//! The library ingests a hierarchical token definition (a JSON document
//! describing colors, dimensions, borders, shadows, gradients, transitions,
//! typography) and rewrites it into the intermediate tree a multi-format
//! code generator consumes. Downstream per-type value formatters only know
//! how to format one token type at a time, so composite tokens (a border
//! bundling color, width and style; a gradient bundling stops) are exploded
//! into individually-typed child tokens, with a wrapper token standing in
//! for the whole composite via alias references.
//!
//! Processing is a three stage pipeline:
//!
//! 1. Schema normalization - rewrite the DTCG marker keys `$value` and
//!    `$description` to the internal names `value` and `comment`
//! 2. Parsing - build the typed token tree from JSON text
//! 3. Composite expansion - explode composite tokens into groups of
//!    individually-typed children plus an alias wrapper
//!
//! See [`dtcg::loader::DocumentLoader`] for the usual entry point and
//! [`dtcg::transforms`] for the pipeline pieces.

pub mod dtcg;
