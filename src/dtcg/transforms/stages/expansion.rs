//! Composite expansion stage
//!
//! Explodes composite tokens into groups of individually-typed child
//! tokens plus an alias wrapper. See [`crate::dtcg::expansion`] for the
//! rewrite itself.

use crate::dtcg::ast::Node;
use crate::dtcg::expansion::CompositeExpander;
use crate::dtcg::registry::CompositeTypeRegistry;
use crate::dtcg::transforms::{Runnable, TransformError};

/// Composite expansion stage
///
/// # Input
/// - `Node` - parsed token tree
///
/// # Output
/// - `Node` - tree with every composite token replaced by its expansion
pub struct CompositeExpansion {
    expander: CompositeExpander,
}

impl CompositeExpansion {
    /// Stage using the standard DTCG composite types.
    pub fn new() -> Self {
        CompositeExpansion {
            expander: CompositeExpander::standard(),
        }
    }

    /// Stage using a caller-provided registry, for custom composite types.
    pub fn with_registry(registry: CompositeTypeRegistry) -> Self {
        CompositeExpansion {
            expander: CompositeExpander::new(registry),
        }
    }
}

impl Default for CompositeExpansion {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Node, Node> for CompositeExpansion {
    fn run(&self, input: Node) -> Result<Node, TransformError> {
        Ok(self.expander.expand(input))
    }
}
