//! Composite token expansion
//!
//! Downstream per-type value transforms only know how to format one token
//! type at a time, so composite tokens are exploded before formatting: each
//! composite value member becomes an individually-typed sibling token, and a
//! wrapper token takes the composite's place with its value rebuilt from
//! alias references to the new children.
//!
//! ```text
//! { "border": { "thin": {
//!     "$type": "border",
//!     "value": { "width": "1px", "color": "black" }
//! } } }
//! ```
//! becomes
//! ```text
//! { "border": { "thin": {
//!     "width": { "$type": "dimension", "value": "1px", "intermediate": true },
//!     "color": { "$type": "color", "value": "black", "intermediate": true },
//!     "@": {
//!         "$type": "border",
//!         "value": { "width": "{border.thin.width}", "color": "{border.thin.color}" }
//!     }
//! } } }
//! ```
//!
//! The walk rebuilds the tree functionally rather than mutating it in
//! place, so a node is never revisited after replacement.

use serde_json::{Map, Value};

use crate::dtcg::ast::{Group, Node, Token};
use crate::dtcg::registry::CompositeTypeRegistry;

/// Reserved child key for the wrapper token standing in for the whole
/// composite. Output generators collapse this name to the parent's own, so
/// the composite keeps its original path in final deliverables.
pub const WRAPPER_KEY: &str = "@";

/// Group-key chain of the current traversal position; alias strings are
/// built from it.
#[derive(Debug, Default)]
struct PathTracker {
    segments: Vec<String>,
}

impl PathTracker {
    fn push(&mut self, key: &str) {
        self.segments.push(key.to_string());
    }

    fn pop(&mut self) {
        self.segments.pop();
    }

    /// Alias string for a child created at the current position, e.g.
    /// `{border.thin.width}`.
    fn alias_for(&self, child_key: &str) -> String {
        let mut path = self.segments.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        format!("{{{}{}}}", path, child_key)
    }
}

/// Rewrites composite tokens into groups of individually-typed child tokens
/// plus an alias wrapper.
#[derive(Debug, Clone)]
pub struct CompositeExpander {
    registry: CompositeTypeRegistry,
}

impl CompositeExpander {
    pub fn new(registry: CompositeTypeRegistry) -> CompositeExpander {
        CompositeExpander { registry }
    }

    /// Expander configured with the standard DTCG composite types.
    pub fn standard() -> CompositeExpander {
        CompositeExpander::new(CompositeTypeRegistry::standard())
    }

    /// Expand every composite token in the tree, returning the rewritten
    /// tree. Non-composite nodes are carried over unchanged.
    ///
    /// Running the expansion over an already-expanded tree is a no-op: the
    /// walk never descends into the reserved wrapper key, so wrapper tokens
    /// (which still look composite) are not re-expanded.
    pub fn expand(&self, root: Node) -> Node {
        let mut path = PathTracker::default();
        self.expand_node(root, &mut path)
    }

    fn expand_node(&self, node: Node, path: &mut PathTracker) -> Node {
        match node {
            Node::Group(group) => Node::Group(self.expand_group(group, path)),
            Node::Token(token) => match self.expand_token(&token, path) {
                Some(group) => Node::Group(group),
                None => Node::Token(token),
            },
            raw => raw,
        }
    }

    fn expand_group(&self, group: Group, path: &mut PathTracker) -> Group {
        group
            .into_iter()
            .map(|(key, child)| {
                // Wrapper tokens are already expanded; descending into them
                // on a second pass would corrupt the alias chain.
                if key == WRAPPER_KEY {
                    return (key, child);
                }
                path.push(&key);
                let child = self.expand_node(child, path);
                path.pop();
                (key, child)
            })
            .collect()
    }

    /// The replacement group for a composite token, or `None` when the
    /// token is not composite (untagged or unregistered `$type`, scalar
    /// value) and must pass through untouched.
    fn expand_token(&self, token: &Token, path: &PathTracker) -> Option<Group> {
        let composite_type = token.token_type.as_ref()?;
        if !self.registry.contains(composite_type) {
            return None;
        }
        let members = composite_members(&token.value)?;

        let mut children = Group::new();
        let mut skeleton = AliasSkeleton::like(&token.value);

        for (member, value, step) in members {
            let child_key = match step {
                Some(index) => format!("{}-{}", index + 1, member),
                None => member.to_string(),
            };
            let sub_type = self.registry.member_type(composite_type, member);
            skeleton.set(step, member, path.alias_for(&child_key));
            children.insert(child_key, Node::Token(Token::intermediate(value.clone(), sub_type)));
        }

        // The wrapper keeps every original property except the raw value,
        // so comments and caller-defined attributes survive.
        let mut wrapper = token.clone();
        wrapper.value = skeleton.into_value();
        children.insert(WRAPPER_KEY, Node::Token(wrapper));

        Some(children)
    }
}

/// Flatten a composite value into `(member, value, step)` entries.
///
/// An object yields one entry per property in key order. An array yields
/// the properties of each object element, tagged with the element's index,
/// in array-then-key order. Scalar values are not composite shapes and
/// yield `None`.
fn composite_members(value: &Value) -> Option<Vec<(&str, &Value, Option<usize>)>> {
    match value {
        Value::Object(members) => Some(
            members
                .iter()
                .map(|(key, value)| (key.as_str(), value, None))
                .collect(),
        ),
        Value::Array(steps) => Some(
            steps
                .iter()
                .enumerate()
                .filter_map(|(index, step)| step.as_object().map(|members| (index, members)))
                .flat_map(|(index, members)| {
                    members
                        .iter()
                        .map(move |(key, value)| (key.as_str(), value, Some(index)))
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Mirror of a composite value's shape with every leaf replaced by an alias
/// string.
enum AliasSkeleton {
    Object(Map<String, Value>),
    Array(Vec<Map<String, Value>>),
}

impl AliasSkeleton {
    fn like(value: &Value) -> AliasSkeleton {
        match value {
            Value::Array(steps) => AliasSkeleton::Array(vec![Map::new(); steps.len()]),
            _ => AliasSkeleton::Object(Map::new()),
        }
    }

    fn set(&mut self, step: Option<usize>, member: &str, alias: String) {
        match (self, step) {
            (AliasSkeleton::Array(steps), Some(index)) => {
                steps[index].insert(member.to_string(), Value::String(alias));
            }
            (AliasSkeleton::Object(members), _) => {
                members.insert(member.to_string(), Value::String(alias));
            }
            // members and skeleton are derived from the same value, so an
            // array skeleton only ever sees stepped members
            (AliasSkeleton::Array(_), None) => {}
        }
    }

    fn into_value(self) -> Value {
        match self {
            AliasSkeleton::Object(members) => Value::Object(members),
            AliasSkeleton::Array(steps) => {
                Value::Array(steps.into_iter().map(Value::Object).collect())
            }
        }
    }
}
