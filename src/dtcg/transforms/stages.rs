//! Individual transformation stages
//!
//! This module contains the individual stages that can be composed into
//! pipelines. Each stage implements the `Runnable` trait.

pub mod expansion;
pub mod normalization;
pub mod parsing;

pub use expansion::CompositeExpansion;
pub use normalization::SchemaNormalization;
pub use parsing::Parsing;
