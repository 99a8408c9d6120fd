//! Indentation configuration for generated code.

use serde::Deserialize;

/// Indentation style for generated code.
///
/// Deserializes from a width (`indent = 4`) or the string `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the Kotlin default.
    pub const KOTLIN: Self = Self::Spaces(2);

    /// The string written for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Named(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(width) => Ok(Self::Spaces(width)),
            IndentRepr::Named(name) if name.eq_ignore_ascii_case("tab") => Ok(Self::Tab),
            IndentRepr::Named(name) => Err(format!(
                "invalid indent '{name}', expected a width or \"tab\""
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(0).unit(), "");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }
}
