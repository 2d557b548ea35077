//! Composite token member specifications
//!
//! Maps each composite token type to the sub-type expected for each of its
//! value members, e.g. `border.width` is a `dimension`. The expansion stage
//! consults this when exploding a composite value into child tokens.

use indexmap::IndexMap;

use crate::dtcg::ast::TokenType;

/// Member specifications for composite token types.
///
/// Registry membership doubles as the composite predicate: a token is only
/// treated as composite when its `$type` has an entry here. Adding a new
/// composite type means registering one entry mapping member keys to
/// sub-types.
///
/// A member mapped to `None` is defined by the format without a type of its
/// own (e.g. `gradient.position`); its extracted child token stays untyped.
#[derive(Debug, Clone, Default)]
pub struct CompositeTypeRegistry {
    specs: IndexMap<TokenType, IndexMap<String, Option<TokenType>>>,
}

impl CompositeTypeRegistry {
    /// An empty registry; nothing is treated as composite.
    pub fn empty() -> CompositeTypeRegistry {
        CompositeTypeRegistry::default()
    }

    /// The composite types defined by the DTCG specification.
    pub fn standard() -> CompositeTypeRegistry {
        let mut registry = CompositeTypeRegistry::empty();
        registry.register(
            TokenType::Border,
            [
                ("color", Some(TokenType::Color)),
                ("width", Some(TokenType::Dimension)),
                ("style", Some(TokenType::StrokeStyle)),
            ],
        );
        registry.register(
            TokenType::Gradient,
            [
                // value is an array of stops
                ("color", Some(TokenType::Color)),
                ("position", None),
            ],
        );
        registry.register(
            TokenType::Shadow,
            [
                ("blur", Some(TokenType::Dimension)),
                ("color", Some(TokenType::Color)),
                ("offsetX", Some(TokenType::Dimension)),
                ("offsetY", Some(TokenType::Dimension)),
                ("spread", Some(TokenType::Dimension)),
            ],
        );
        registry.register(
            TokenType::StrokeStyle,
            [
                // object form only; the string form is a plain scalar value
                ("dashArray", Some(TokenType::Dimension)),
                ("lineCap", None),
            ],
        );
        registry.register(
            TokenType::Transition,
            [
                ("delay", Some(TokenType::Duration)),
                ("duration", Some(TokenType::Duration)),
                ("timingFunction", Some(TokenType::CubicBezier)),
            ],
        );
        registry.register(
            TokenType::Typography,
            [
                ("fontFamily", Some(TokenType::FontFamily)),
                ("fontSize", Some(TokenType::Dimension)),
                ("fontWeight", Some(TokenType::FontWeight)),
                ("letterSpacing", Some(TokenType::Dimension)),
                ("lineHeight", Some(TokenType::Number)),
            ],
        );
        registry
    }

    /// Add or replace the member specification for a composite type.
    pub fn register<K, I>(&mut self, composite: TokenType, members: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<TokenType>)>,
    {
        self.specs.insert(
            composite,
            members
                .into_iter()
                .map(|(key, sub_type)| (key.into(), sub_type))
                .collect(),
        );
    }

    /// Whether tokens tagged with this type should be expanded.
    pub fn contains(&self, token_type: &TokenType) -> bool {
        self.specs.contains_key(token_type)
    }

    /// The sub-type for one member of a composite value.
    ///
    /// `None` when the member is unknown or defined without a type; both
    /// degrade to an untyped child token rather than an error.
    pub fn member_type(&self, composite: &TokenType, member: &str) -> Option<TokenType> {
        self.specs
            .get(composite)?
            .get(member)
            .and_then(|sub_type| sub_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_the_six_composite_types() {
        let registry = CompositeTypeRegistry::standard();
        for composite in [
            TokenType::Border,
            TokenType::Gradient,
            TokenType::Shadow,
            TokenType::StrokeStyle,
            TokenType::Transition,
            TokenType::Typography,
        ] {
            assert!(registry.contains(&composite), "missing {}", composite);
        }
        assert!(!registry.contains(&TokenType::Color));
        assert!(!registry.contains(&TokenType::Dimension));
    }

    #[test]
    fn member_types_follow_the_format_spec() {
        let registry = CompositeTypeRegistry::standard();
        assert_eq!(
            registry.member_type(&TokenType::Border, "width"),
            Some(TokenType::Dimension)
        );
        assert_eq!(
            registry.member_type(&TokenType::Typography, "lineHeight"),
            Some(TokenType::Number)
        );
        assert_eq!(
            registry.member_type(&TokenType::Transition, "timingFunction"),
            Some(TokenType::CubicBezier)
        );
    }

    #[test]
    fn undefined_and_unknown_members_have_no_type() {
        let registry = CompositeTypeRegistry::standard();
        // defined by the format, but without a type of its own
        assert_eq!(registry.member_type(&TokenType::Gradient, "position"), None);
        // not defined at all
        assert_eq!(registry.member_type(&TokenType::Border, "radius"), None);
    }

    #[test]
    fn custom_composite_types_can_be_registered() {
        let mut registry = CompositeTypeRegistry::empty();
        registry.register(
            TokenType::Other("focusRing".to_string()),
            [
                ("color", Some(TokenType::Color)),
                ("offset", Some(TokenType::Dimension)),
            ],
        );
        let focus_ring = TokenType::Other("focusRing".to_string());
        assert!(registry.contains(&focus_ring));
        assert_eq!(
            registry.member_type(&focus_ring, "offset"),
            Some(TokenType::Dimension)
        );
    }
}
