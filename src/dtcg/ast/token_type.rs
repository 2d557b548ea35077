//! Token `$type` tags

use std::fmt;

/// A token's `$type` tag.
///
/// The DTCG specification defines a fixed set of type names. Names outside
/// that set are kept verbatim in [`TokenType::Other`] so documents using
/// draft or vendor types round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Color,
    Dimension,
    Duration,
    FontFamily,
    FontWeight,
    Number,
    CubicBezier,
    StrokeStyle,
    Border,
    Gradient,
    Shadow,
    Transition,
    Typography,
    /// A type name outside the DTCG set, preserved as written.
    Other(String),
}

impl TokenType {
    /// Parse a `$type` tag as it appears in a document.
    ///
    /// Never fails; unknown names become [`TokenType::Other`].
    pub fn from_name(name: &str) -> TokenType {
        match name {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "duration" => TokenType::Duration,
            "fontFamily" => TokenType::FontFamily,
            "fontWeight" => TokenType::FontWeight,
            "number" => TokenType::Number,
            "cubicBezier" => TokenType::CubicBezier,
            "strokeStyle" => TokenType::StrokeStyle,
            "border" => TokenType::Border,
            "gradient" => TokenType::Gradient,
            "shadow" => TokenType::Shadow,
            "transition" => TokenType::Transition,
            "typography" => TokenType::Typography,
            other => TokenType::Other(other.to_string()),
        }
    }

    /// The tag as written in a token document.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::Duration => "duration",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::Number => "number",
            TokenType::CubicBezier => "cubicBezier",
            TokenType::StrokeStyle => "strokeStyle",
            TokenType::Border => "border",
            TokenType::Gradient => "gradient",
            TokenType::Shadow => "shadow",
            TokenType::Transition => "transition",
            TokenType::Typography => "typography",
            TokenType::Other(name) => name,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for name in [
            "color",
            "dimension",
            "duration",
            "fontFamily",
            "fontWeight",
            "number",
            "cubicBezier",
            "strokeStyle",
            "border",
            "gradient",
            "shadow",
            "transition",
            "typography",
        ] {
            assert_eq!(TokenType::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn unknown_names_are_preserved() {
        let parsed = TokenType::from_name("gradientStop");
        assert_eq!(parsed, TokenType::Other("gradientStop".to_string()));
        assert_eq!(parsed.as_str(), "gradientStop");
    }
}
