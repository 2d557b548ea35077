//! Tree nodes: groups, tokens, and their JSON conversions

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::dtcg::ast::TokenType;

/// Field carrying a token's design value. Its presence is what makes an
/// object a token rather than a group.
pub const VALUE_KEY: &str = "value";

/// Field carrying a token's description after schema normalization.
pub const COMMENT_KEY: &str = "comment";

/// Field carrying a token's type tag.
pub const TYPE_KEY: &str = "$type";

/// Marker flag on tokens created by composite expansion, so generators can
/// filter them out of final deliverables.
pub const INTERMEDIATE_KEY: &str = "intermediate";

/// A node in the token tree.
///
/// A JSON object with a `value` key is a [`Token`]; an object without one is
/// a [`Group`]. Any other JSON found in group position fits neither shape
/// and is kept as [`Node::Raw`], carried through every rewrite untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Token(Token),
    Raw(Value),
}

impl Node {
    /// Build a node from parsed JSON, classifying by structural shape.
    pub fn from_value(value: Value) -> Node {
        match value {
            Value::Object(map) => {
                if map.contains_key(VALUE_KEY) {
                    Node::Token(Token::from_map(map))
                } else {
                    Node::Group(Group::from_map(map))
                }
            }
            other => Node::Raw(other),
        }
    }

    /// Serialize the node back to JSON.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Group(group) => group.to_value(),
            Node::Token(token) => token.to_value(),
            Node::Raw(value) => value.clone(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Node::Token(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from_value)
    }
}

/// A named collection of child nodes.
///
/// Entry order is preserved through parsing and rewriting so downstream
/// output generation stays deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    children: IndexMap<String, Node>,
}

impl Group {
    pub fn new() -> Group {
        Group::default()
    }

    fn from_map(map: Map<String, Value>) -> Group {
        map.into_iter()
            .map(|(key, value)| (key, Node::from_value(value)))
            .collect()
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .children
            .iter()
            .map(|(key, node)| (key.clone(), node.to_value()))
            .collect();
        Value::Object(map)
    }

    /// Append a child. An existing child under the same key is replaced
    /// without changing its position.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        self.children.insert(key.into(), node);
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.children.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Look up a node by its dotted path, e.g. `"border.thin.width"`.
    ///
    /// This is the path syntax alias strings refer to (without the
    /// surrounding braces).
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.get(first)?;
        for segment in segments {
            current = current.as_group()?.get(segment)?;
        }
        Some(current)
    }
}

impl FromIterator<(String, Node)> for Group {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Group {
        Group {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Group {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// A leaf holding one design value and its metadata.
///
/// Beyond the modeled fields, tokens carry an open `extra` map of
/// caller-defined properties, kept in document order and preserved verbatim
/// through every copy and rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The design value: scalar, object, or array.
    pub value: Value,
    /// The `$type` tag, when the author supplied one.
    pub token_type: Option<TokenType>,
    /// The normalized `$description` text.
    pub comment: Option<String>,
    /// Set on tokens created by composite expansion.
    pub intermediate: bool,
    /// Caller-defined properties, preserved untouched.
    pub extra: IndexMap<String, Value>,
}

impl Token {
    pub fn new(value: Value) -> Token {
        Token {
            value,
            token_type: None,
            comment: None,
            intermediate: false,
            extra: IndexMap::new(),
        }
    }

    /// A generator-created token carrying one extracted composite member.
    pub fn intermediate(value: Value, token_type: Option<TokenType>) -> Token {
        Token {
            value,
            token_type,
            comment: None,
            intermediate: true,
            extra: IndexMap::new(),
        }
    }

    fn from_map(map: Map<String, Value>) -> Token {
        let mut token = Token::new(Value::Null);
        for (key, value) in map {
            if key == VALUE_KEY {
                token.value = value;
            } else if key == TYPE_KEY {
                match value {
                    Value::String(name) => token.token_type = Some(TokenType::from_name(&name)),
                    other => {
                        token.extra.insert(key, other);
                    }
                }
            } else if key == COMMENT_KEY {
                match value {
                    Value::String(text) => token.comment = Some(text),
                    other => {
                        token.extra.insert(key, other);
                    }
                }
            } else if key == INTERMEDIATE_KEY {
                match value {
                    Value::Bool(flag) => token.intermediate = flag,
                    other => {
                        token.extra.insert(key, other);
                    }
                }
            } else {
                token.extra.insert(key, value);
            }
        }
        token
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(token_type) = &self.token_type {
            map.insert(
                TYPE_KEY.to_string(),
                Value::String(token_type.as_str().to_string()),
            );
        }
        if let Some(comment) = &self.comment {
            map.insert(COMMENT_KEY.to_string(), Value::String(comment.clone()));
        }
        map.insert(VALUE_KEY.to_string(), self.value.clone());
        if self.intermediate {
            map.insert(INTERMEDIATE_KEY.to_string(), Value::Bool(true));
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_with_value_are_tokens() {
        let node = Node::from_value(json!({ "value": "1px", "$type": "dimension" }));
        let token = node.as_token().expect("token");
        assert_eq!(token.value, json!("1px"));
        assert_eq!(token.token_type, Some(TokenType::Dimension));
    }

    #[test]
    fn objects_without_value_are_groups() {
        let node = Node::from_value(json!({ "spacing": { "value": "4px" } }));
        let group = node.as_group().expect("group");
        assert_eq!(group.len(), 1);
        assert!(group.get("spacing").unwrap().is_token());
    }

    #[test]
    fn non_objects_are_raw() {
        assert_eq!(Node::from_value(json!(42)), Node::Raw(json!(42)));
        assert_eq!(Node::from_value(json!([1, 2])), Node::Raw(json!([1, 2])));
    }

    #[test]
    fn extra_properties_survive_a_round_trip() {
        let source = json!({
            "$type": "color",
            "comment": "Accent",
            "value": "#ff00aa",
            "vendor": { "figma": true },
            "deprecated": false
        });
        let node = Node::from_value(source.clone());
        assert_eq!(node.to_value(), source);
    }

    #[test]
    fn non_string_metadata_lands_in_extra() {
        let node = Node::from_value(json!({ "value": 1, "$type": 7, "comment": [] }));
        let token = node.as_token().expect("token");
        assert_eq!(token.token_type, None);
        assert_eq!(token.comment, None);
        assert_eq!(token.extra.get("$type"), Some(&json!(7)));
        assert_eq!(token.extra.get("comment"), Some(&json!([])));
    }

    #[test]
    fn resolve_walks_dotted_paths() {
        let node = Node::from_value(json!({
            "theme": { "border": { "width": { "value": "1px" } } }
        }));
        let root = node.as_group().expect("group");
        assert!(root.resolve("theme.border.width").unwrap().is_token());
        assert!(root.resolve("theme.border").unwrap().is_group());
        assert!(root.resolve("theme.missing").is_none());
        assert!(root.resolve("theme.border.width.deeper").is_none());
    }

    #[test]
    fn group_entry_order_is_preserved() {
        let node = Node::from_value(json!({ "z": {}, "a": {}, "m": {} }));
        let group = node.as_group().expect("group");
        let keys: Vec<&str> = group.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
